use async_trait::async_trait;

use crate::domain::{
    models::{NewUser, User},
    UserError,
};

#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    async fn create(&self, user: &NewUser) -> Result<User, UserError>;
}
