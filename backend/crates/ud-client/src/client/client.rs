use crate::client::api_user::{ApiUser, DeleteRequest, SuccessBody, UpdateRequest};
use crate::{ClientError, ClientResult};

use ud_config::ClientConfig;
use ud_core::{UserFields, UserRecord};

use std::time::Duration;

use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;

const USERS_PATH: &str = "/api/v1/users";
const USER_PATH: &str = "/api/v1/user";

/// HTTP client for the ud-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8000")
    /// * `timeout` - Whole-request timeout; expiry is reported as unreachable
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send the request and decode a 2xx body as `T`; anything else is
    /// classified by status
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            debug!("API call failed with status {status}");
            let error_body = serde_json::from_slice(&body).ok();
            return Err(ClientError::from_status(status.as_u16(), error_body));
        }

        Ok(serde_json::from_slice(&body)?)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// List all active users in server order
    pub async fn list_users(&self) -> ClientResult<Vec<UserRecord>> {
        let req = self.request(Method::GET, USERS_PATH);
        let users: Vec<ApiUser> = self.execute(req).await?;
        Ok(users.into_iter().map(UserRecord::from).collect())
    }

    /// Get one active user
    pub async fn get_user(&self, id: i64) -> ClientResult<UserRecord> {
        let req = self.request(Method::GET, &format!("{USER_PATH}?id={id}"));
        let user: ApiUser = self.execute(req).await?;
        Ok(user.into())
    }

    /// Create a user, returning the new id
    pub async fn create_user(&self, fields: &UserFields) -> ClientResult<i64> {
        let req = self.request(Method::POST, USERS_PATH).json(fields);
        let body: SuccessBody = self.execute(req).await?;
        body.id
            .ok_or_else(|| ClientError::unexpected("create response carried no id"))
    }

    /// Replace every field of an active user, returning the server's message
    pub async fn update_user(&self, id: i64, fields: &UserFields) -> ClientResult<String> {
        let req = self
            .request(Method::PUT, USERS_PATH)
            .json(&UpdateRequest { id, fields });
        let body: SuccessBody = self.execute(req).await?;
        Ok(body.success)
    }

    /// Soft-delete a user, returning the server's message
    pub async fn delete_user(&self, id: i64) -> ClientResult<String> {
        let req = self
            .request(Method::DELETE, USERS_PATH)
            .json(&DeleteRequest { id });
        let body: SuccessBody = self.execute(req).await?;
        Ok(body.success)
    }
}
