use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{
    models::{NewUser, User, UserId},
    ports::outbound::UserRepository,
    Email, UserError,
};

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    name: String,
    job: String,
    email: String,
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, name, job, email)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, job, email
            "#,
        )
        .bind(user.id.as_i32())
        .bind(&user.name)
        .bind(&user.job)
        .bind(user.email.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                UserError::AlreadyExists(user.id)
            }
            other => UserError::Storage(other.to_string()),
        })?;

        Ok(User {
            id: UserId::new(row.id),
            name: row.name,
            job: row.job,
            email: Email::try_from(row.email)?,
        })
    }
}
