mod avatar;
mod user;

pub use avatar::PostgresAvatarRecordStore;
pub use user::PostgresUserRepository;
