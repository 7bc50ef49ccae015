use ud_core::UserRecord;

use std::sync::Arc;

use tokio::sync::watch;

/// Shared snapshot of the active-user list.
///
/// Always held sorted by given names, then surnames, case-insensitively.
/// Subscribers see every replacement through a watch channel.
#[derive(Clone)]
pub struct UserCache {
    users_tx: Arc<watch::Sender<Arc<Vec<UserRecord>>>>,
}

impl UserCache {
    pub fn new() -> Self {
        let (users_tx, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            users_tx: Arc::new(users_tx),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Vec<UserRecord>>> {
        self.users_tx.subscribe()
    }

    pub fn snapshot(&self) -> Arc<Vec<UserRecord>> {
        Arc::clone(&*self.users_tx.borrow())
    }

    /// Sort and publish a fresh list
    pub fn replace(&self, mut users: Vec<UserRecord>) -> Arc<Vec<UserRecord>> {
        sort_users(&mut users);
        let users = Arc::new(users);
        self.users_tx.send_replace(Arc::clone(&users));
        users
    }

    pub fn clear(&self) {
        self.users_tx.send_replace(Arc::new(Vec::new()));
    }

    pub fn len(&self) -> usize {
        self.users_tx.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for UserCache {
    fn default() -> Self {
        Self::new()
    }
}

pub fn sort_users(users: &mut [UserRecord]) {
    users.sort_by_cached_key(|u| (u.given_names.to_lowercase(), u.surnames.to_lowercase()));
}
