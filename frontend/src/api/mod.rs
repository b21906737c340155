mod auth;
pub mod client;
pub mod error;
mod sessions;
mod teachers;
pub mod types;
mod users;

pub use client::*;
pub use error::*;
pub use types::*;
