mod client;
mod models;
mod reqres_url;

pub(crate) use reqres_url::*;

pub use client::*;
pub use models::*;
