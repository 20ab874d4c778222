pub mod filesystem;
pub mod notifications;
pub mod postgres;
pub mod reqres;
