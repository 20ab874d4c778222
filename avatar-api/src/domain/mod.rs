mod email;
mod error;
mod hash;
pub mod models;
pub mod ports;
pub mod services;

pub use email::*;
pub use error::*;
pub use hash::*;
