//! ud-client library
//!
//! HTTP client, cached data service and view state machines for the user
//! directory. The `ud` binary is a thin command-line front end over these.

pub mod cache;
pub mod client;
pub mod service;
pub mod views;


pub use cache::UserCache;
pub use client::{ApiErrorBody, Client, ClientError, ClientResult};
pub use service::UserService;
