use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{
    models::{AvatarFilename, AvatarRecord, DeleteReceipt, UserId},
    ports::outbound::AvatarRecordStore,
    AvatarError,
};

pub struct PostgresAvatarRecordStore {
    pool: PgPool,
}

impl PostgresAvatarRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AvatarRow {
    user_id: i32,
    content_hash: String,
    filename: String,
}

impl TryFrom<AvatarRow> for AvatarRecord {
    type Error = AvatarError;

    fn try_from(row: AvatarRow) -> Result<Self, Self::Error> {
        let filename = AvatarFilename::parse(row.filename.as_str()).ok_or_else(|| {
            AvatarError::RecordStore(format!("invalid stored filename '{}'", row.filename))
        })?;

        Ok(AvatarRecord::new(
            UserId::new(row.user_id),
            row.content_hash,
            filename,
        ))
    }
}

#[async_trait]
impl AvatarRecordStore for PostgresAvatarRecordStore {
    async fn insert(&self, record: &AvatarRecord) -> Result<AvatarRecord, AvatarError> {
        let row = sqlx::query_as::<_, AvatarRow>(
            r#"
            INSERT INTO avatars (user_id, content_hash, filename)
            VALUES ($1, $2, $3)
            RETURNING user_id, content_hash, filename
            "#,
        )
        .bind(record.user_id.as_i32())
        .bind(&record.content_hash)
        .bind(record.filename.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| AvatarError::RecordStore(err.to_string()))?;

        row.try_into()
    }

    async fn find_one(&self, user_id: UserId) -> Result<Option<AvatarRecord>, AvatarError> {
        let row = sqlx::query_as::<_, AvatarRow>(
            r#"
            SELECT user_id, content_hash, filename
            FROM avatars
            WHERE user_id = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(user_id.as_i32())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| AvatarError::RecordStore(err.to_string()))?;

        row.map(AvatarRecord::try_from).transpose()
    }

    async fn delete_all(&self, user_id: UserId) -> Result<DeleteReceipt, AvatarError> {
        let result = sqlx::query(
            r#"
            DELETE FROM avatars
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i32())
        .execute(&self.pool)
        .await
        .map_err(|err| AvatarError::RecordStore(err.to_string()))?;

        // Postgres either commits the statement or errors out.
        Ok(DeleteReceipt {
            acknowledged: true,
            deleted_count: result.rows_affected(),
        })
    }
}
