use async_trait::async_trait;

use crate::domain::{
    models::{NewUser, User, UserId},
    UserError,
};

#[async_trait]
pub trait UserService: Send + Sync + 'static {
    async fn create_user(&self, user: NewUser) -> Result<User, UserError>;

    async fn get_remote_user(&self, user_id: UserId) -> Result<serde_json::Value, UserError>;
}
