mod avatar_records;
mod avatar_storage;
mod notifications;
mod remote_users;
mod user_repository;

pub use avatar_records::*;
pub use avatar_storage::*;
pub use notifications::*;
pub use remote_users::*;
pub use user_repository::*;

#[cfg(test)]
mod mock;
#[cfg(test)]
pub use mock::*;
