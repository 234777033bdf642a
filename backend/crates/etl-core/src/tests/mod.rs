mod models;

use crate::RawUser;

use serde_json::Value;

/// Parse a JSON object literal into a [`RawUser`]
pub(crate) fn raw(value: Value) -> RawUser {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
