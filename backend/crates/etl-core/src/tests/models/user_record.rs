use crate::UserRecord;
use crate::tests::raw;

use serde_json::json;

#[test]
fn test_user_record_from_complete_raw() {
    let user = raw(json!({
        "id": 7,
        "name": "Leanne Graham",
        "email": "Sincere@april.biz",
        "username": "Bret",
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org"
    }));

    let record = UserRecord::from_raw(&user, 1);

    assert_eq!(record.id, 1);
    assert_eq!(record.name, "Leanne Graham");
    assert_eq!(record.email, "Sincere@april.biz");
    assert_eq!(record.username, "Bret");
    assert_eq!(record.phone, "1-770-736-8031 x56442");
    assert_eq!(record.website, "hildegard.org");
}

#[test]
fn test_user_record_missing_fields_default_to_empty() {
    let user = raw(json!({ "id": 1, "name": "A", "email": "a@x.com" }));

    let record = UserRecord::from_raw(&user, 1);

    assert_eq!(record.name, "A");
    assert_eq!(record.email, "a@x.com");
    assert_eq!(record.username, "");
    assert_eq!(record.phone, "");
    assert_eq!(record.website, "");
}

#[test]
fn test_user_record_null_fields_default_to_empty() {
    let user = raw(json!({ "name": null, "phone": null }));

    let record = UserRecord::from_raw(&user, 3);

    assert_eq!(record.name, "");
    assert_eq!(record.phone, "");
}

#[test]
fn test_user_record_non_string_fields_keep_json_text() {
    let user = raw(json!({ "phone": 5551234, "website": { "host": "x.org" } }));

    let record = UserRecord::from_raw(&user, 1);

    assert_eq!(record.phone, "5551234");
    assert_eq!(record.website, r#"{"host":"x.org"}"#);
}

#[test]
fn test_user_record_without_id_uses_ordinal() {
    let user = raw(json!({ "name": "No Id" }));

    let record = UserRecord::from_raw(&user, 4);

    assert_eq!(record.id, 4);
}

#[test]
fn test_user_record_source_id_is_ignored() {
    let integer_id = raw(json!({ "id": 9, "name": "Integer Id" }));
    let text_id = raw(json!({ "id": "abc", "name": "Text Id" }));

    assert_eq!(UserRecord::from_raw(&integer_id, 2).id, 2);
    assert_eq!(UserRecord::from_raw(&text_id, 3).id, 3);
}

#[test]
fn test_user_record_drops_unknown_fields() {
    let user = raw(json!({
        "id": 1,
        "name": "A",
        "address": { "city": "Gwenborough" },
        "company": { "name": "Romaguera-Crona" }
    }));

    let record = UserRecord::from_raw(&user, 1);

    assert_eq!(
        record,
        UserRecord {
            id: 1,
            name: "A".to_string(),
            email: String::new(),
            username: String::new(),
            phone: String::new(),
            website: String::new(),
        }
    );
}
