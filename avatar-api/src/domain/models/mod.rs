mod avatar;
mod ids;
mod user;

pub use avatar::*;
pub use ids::*;
pub use user::*;
