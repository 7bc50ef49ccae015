//! Client data service: the single owner of the cached user list.
//!
//! Reads go to the server and land in the [`UserCache`]. Every successful
//! mutation re-fetches the whole list; nothing is patched in place.

use crate::service::search::filter_users;
use crate::{Client, ClientResult, UserCache};

use ud_config::ClientConfig;
use ud_core::{UserFields, UserRecord};

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::watch;

#[derive(Clone)]
pub struct UserService {
    client: Arc<Client>,
    cache: UserCache,
}

impl UserService {
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
            cache: UserCache::new(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(Client::from_config(config)?))
    }

    pub fn cache(&self) -> &UserCache {
        &self.cache
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<UserRecord>>> {
        self.cache.subscribe()
    }

    /// Fetch the active users and publish them, sorted, to the cache
    pub async fn refresh(&self) -> ClientResult<Arc<Vec<UserRecord>>> {
        let users = self.client.list_users().await?;
        debug!("User cache refreshed with {} users", users.len());
        Ok(self.cache.replace(users))
    }

    pub async fn get(&self, id: i64) -> ClientResult<UserRecord> {
        self.client.get_user(id).await
    }

    pub async fn create(&self, fields: &UserFields) -> ClientResult<i64> {
        let id = self.client.create_user(fields).await?;
        self.refresh_after_mutation().await;
        Ok(id)
    }

    pub async fn update(&self, id: i64, fields: &UserFields) -> ClientResult<String> {
        let message = self.client.update_user(id, fields).await?;
        self.refresh_after_mutation().await;
        Ok(message)
    }

    pub async fn delete(&self, id: i64) -> ClientResult<String> {
        let message = self.client.delete_user(id).await?;
        self.refresh_after_mutation().await;
        Ok(message)
    }

    /// Cached users matching `term`, in cache order
    pub fn search(&self, term: &str) -> Vec<UserRecord> {
        filter_users(&self.cache.snapshot(), term)
    }

    /// Whether a cached user other than `exclude_id` already has this email
    pub fn email_in_use(&self, email: &str, exclude_id: Option<i64>) -> bool {
        let email = email.trim();
        self.cache
            .snapshot()
            .iter()
            .any(|u| Some(u.id) != exclude_id && u.email.eq_ignore_ascii_case(email))
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// The mutation already succeeded; a failed re-fetch only leaves the cache stale.
    async fn refresh_after_mutation(&self) {
        if let Err(e) = self.refresh().await {
            warn!("Failed to refresh user cache after mutation: {e}");
        }
    }
}
