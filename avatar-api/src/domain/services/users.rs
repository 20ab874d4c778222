use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{
    models::{NewUser, User, UserId},
    ports::{
        inbound::UserService,
        outbound::{EmailNotifier, EventPublisher, RemoteUserClient, UserRepository},
    },
    UserError,
};

pub const USERS_QUEUE: &str = "users-queue";
const USER_CREATED: &str = "User created";

pub struct UserServiceImpl<U, R, E, P> {
    repository: Arc<U>,
    remote: Arc<R>,
    email: Arc<E>,
    events: Arc<P>,
}

impl<U, R, E, P> UserServiceImpl<U, R, E, P>
where
    U: UserRepository,
    R: RemoteUserClient,
    E: EmailNotifier,
    P: EventPublisher,
{
    pub fn new(repository: Arc<U>, remote: Arc<R>, email: Arc<E>, events: Arc<P>) -> Self {
        Self {
            repository,
            remote,
            email,
            events,
        }
    }

    /// Notifications run detached; the caller never waits on them.
    fn notify_created(&self, user: &User) {
        let email = Arc::clone(&self.email);
        let to = user.email.to_string();
        tokio::spawn(async move {
            email
                .send(&to, USER_CREATED, "A user has been created")
                .await;
        });

        let events = Arc::clone(&self.events);
        let message = json!({
            "action": USER_CREATED,
            "payload": user,
        });
        tokio::spawn(async move {
            events.publish(USERS_QUEUE, message).await;
        });
    }
}

#[async_trait]
impl<U, R, E, P> UserService for UserServiceImpl<U, R, E, P>
where
    U: UserRepository,
    R: RemoteUserClient,
    E: EmailNotifier,
    P: EventPublisher,
{
    async fn create_user(&self, user: NewUser) -> Result<User, UserError> {
        let created = self.repository.create(&user).await?;
        tracing::info!(user_id = %created.id, "created user");

        self.notify_created(&created);
        Ok(created)
    }

    async fn get_remote_user(&self, user_id: UserId) -> Result<serde_json::Value, UserError> {
        Ok(self.remote.get_user_payload(user_id).await?)
    }
}
