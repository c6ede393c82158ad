pub mod client;
mod password;
pub mod types;
mod users;

pub use client::*;
pub use types::*;
