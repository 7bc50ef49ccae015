pub(crate) mod api_user;
pub(crate) mod client;
pub(crate) mod error;

pub use client::Client;
pub use error::{ApiErrorBody, ClientError, Result as ClientResult};
