use crate::error::Result as DbErrorResult;

use etl_core::{StoredUserRecord, UserRecord};

use chrono::NaiveDateTime;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

pub struct UserRecordRepository;

impl UserRecordRepository {
    /// Create `user_data` if it does not exist. Existing rows are left alone.
    pub async fn create_table<'e, E>(executor: E) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              CREATE TABLE IF NOT EXISTS user_data (
                  id INTEGER PRIMARY KEY,
                  name TEXT NOT NULL DEFAULT '',
                  email TEXT NOT NULL DEFAULT '',
                  username TEXT NOT NULL DEFAULT '',
                  phone TEXT NOT NULL DEFAULT '',
                  website TEXT NOT NULL DEFAULT '',
                  timestamp DATETIME DEFAULT CURRENT_TIMESTAMP
              )
              "#,
        )
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Insert the record, or overwrite every text column of the row with the
    /// same id. `timestamp` keeps its first-insert value.
    pub async fn upsert<'e, E>(executor: E, record: &UserRecord) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
              INSERT INTO user_data (id, name, email, username, phone, website)
              VALUES (?, ?, ?, ?, ?, ?)
              ON CONFLICT(id) DO UPDATE SET
                  name = excluded.name,
                  email = excluded.email,
                  username = excluded.username,
                  phone = excluded.phone,
                  website = excluded.website
              "#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.username)
        .bind(&record.phone)
        .bind(&record.website)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<StoredUserRecord>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
              SELECT id, name, email, username, phone, website, timestamp
              FROM user_data
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(Self::map_row).transpose()
    }

    pub async fn list_all<'e, E>(executor: E) -> DbErrorResult<Vec<StoredUserRecord>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
              SELECT id, name, email, username, phone, website, timestamp
              FROM user_data
              ORDER BY id ASC
              "#,
        )
        .fetch_all(executor)
        .await?;

        rows.iter().map(Self::map_row).collect()
    }

    pub async fn count<'e, E>(executor: E) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_data")
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    fn map_row(row: &SqliteRow) -> DbErrorResult<StoredUserRecord> {
        Ok(StoredUserRecord {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            username: row.try_get("username")?,
            phone: row.try_get("phone")?,
            website: row.try_get("website")?,
            timestamp: row.try_get::<NaiveDateTime, _>("timestamp")?,
        })
    }
}
