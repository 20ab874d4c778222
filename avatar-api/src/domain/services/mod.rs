mod avatar;
mod in_flight;
mod users;

pub use avatar::{AvatarCacheOptions, AvatarServiceImpl};
pub use users::UserServiceImpl;
