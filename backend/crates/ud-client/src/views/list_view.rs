//! User list screen.
//!
//! Search input is debounced and only applied when the term actually
//! changed. Whenever the filtered set changes the pagination is recomputed,
//! falling back to page 1 if the current page no longer exists.

use crate::UserService;
use crate::service::filter_users;
use crate::views::{
    AlertSlot, DelayedTask, DeleteConfirmation, Pagination, ViewSettings, users_to_csv,
};

use ud_core::UserRecord;

use std::sync::Arc;

use log::info;
use tokio::sync::watch;

/// Counts over the unfiltered list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

#[derive(Debug, Clone)]
struct ListState {
    users: Arc<Vec<UserRecord>>,
    /// What the user typed
    search_input: String,
    /// What the list is currently filtered by
    applied_search: String,
    filtered: Vec<UserRecord>,
    pagination: Pagination,
}

impl ListState {
    fn new(users: Arc<Vec<UserRecord>>, page_size: usize) -> Self {
        let mut state = Self {
            users,
            search_input: String::new(),
            applied_search: String::new(),
            filtered: Vec::new(),
            pagination: Pagination::new(page_size),
        };
        state.apply_filter();
        state
    }

    fn set_users(&mut self, users: Arc<Vec<UserRecord>>) {
        self.users = users;
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        self.filtered = filter_users(&self.users, &self.applied_search);
        self.pagination.set_total_items(self.filtered.len());
    }

    /// Returns false when the input equals the applied term
    fn apply_search(&mut self) -> bool {
        if self.search_input == self.applied_search {
            return false;
        }
        self.applied_search = self.search_input.clone();
        self.pagination.reset();
        self.apply_filter();
        true
    }
}

pub struct ListView {
    service: UserService,
    settings: ViewSettings,
    cache_rx: watch::Receiver<Arc<Vec<UserRecord>>>,
    state_tx: Arc<watch::Sender<ListState>>,
    debounce: Option<DelayedTask>,
    delete: DeleteConfirmation,
    alert: AlertSlot,
    loading: bool,
}

impl ListView {
    /// Starts from whatever the cache already holds; call [`ListView::load`]
    /// to fetch
    pub fn new(service: UserService, settings: ViewSettings) -> Self {
        let mut cache_rx = service.subscribe();
        let users = Arc::clone(&*cache_rx.borrow_and_update());
        let (state_tx, _) = watch::channel(ListState::new(users, settings.page_size));

        Self {
            service,
            settings,
            cache_rx,
            state_tx: Arc::new(state_tx),
            debounce: None,
            delete: DeleteConfirmation::default(),
            alert: AlertSlot::new(settings.alert_dismiss),
            loading: false,
        }
    }

    pub async fn load(&mut self) -> bool {
        self.loading = true;
        let loaded = match self.service.refresh().await {
            Ok(_) => true,
            Err(e) => {
                self.alert
                    .error(format!("Could not load users: {}", e.user_message()));
                false
            }
        };
        self.sync_from_cache();
        self.loading = false;
        loaded
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Wait for the next list published to the shared cache, by this view
    /// or any other holder of the service, and show it. Returns false once
    /// the cache can no longer change.
    pub async fn changed(&mut self) -> bool {
        if self.cache_rx.changed().await.is_err() {
            return false;
        }
        self.sync_from_cache();
        true
    }

    /// Show whatever the shared cache holds now
    pub fn sync_from_cache(&mut self) {
        let users = Arc::clone(&*self.cache_rx.borrow_and_update());
        self.state_tx.send_modify(|state| state.set_users(users));
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Record the typed term; it is applied after the debounce delay
    pub fn set_search_input<S: Into<String>>(&mut self, term: S) {
        let term = term.into();
        self.state_tx.send_modify(|state| state.search_input = term);

        let state_tx = Arc::clone(&self.state_tx);
        self.debounce = Some(DelayedTask::schedule(
            self.settings.search_debounce,
            async move {
                state_tx.send_if_modified(ListState::apply_search);
            },
        ));
    }

    pub fn search_input(&self) -> String {
        self.state_tx.borrow().search_input.clone()
    }

    pub fn applied_search(&self) -> String {
        self.state_tx.borrow().applied_search.clone()
    }

    pub fn is_search_pending(&self) -> bool {
        self.debounce.as_ref().is_some_and(|t| !t.is_finished())
    }

    // =========================================================================
    // Listing and paging
    // =========================================================================

    pub fn filtered_users(&self) -> Vec<UserRecord> {
        self.state_tx.borrow().filtered.clone()
    }

    /// Users on the current page
    pub fn page_users(&self) -> Vec<UserRecord> {
        let state = self.state_tx.borrow();
        state.filtered[state.pagination.item_range()].to_vec()
    }

    pub fn pagination(&self) -> Pagination {
        self.state_tx.borrow().pagination
    }

    pub fn stats(&self) -> ListStats {
        let state = self.state_tx.borrow();
        let active = state.users.iter().filter(|u| u.is_active()).count();
        ListStats {
            total: state.users.len(),
            active,
            inactive: state.users.len() - active,
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.state_tx.send_if_modified(|state| state.pagination.next())
    }

    pub fn previous_page(&mut self) -> bool {
        self.state_tx
            .send_if_modified(|state| state.pagination.previous())
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.state_tx
            .send_if_modified(|state| state.pagination.go_to(page))
    }

    // =========================================================================
    // Delete confirmation
    // =========================================================================

    /// Open the prompt for a listed user; false if the id is not listed
    pub fn request_delete(&mut self, id: i64) -> bool {
        let user = self
            .state_tx
            .borrow()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned();

        match user {
            Some(user) => {
                self.delete.open(user);
                true
            }
            None => false,
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
    }

    pub fn delete_prompt(&self) -> &DeleteConfirmation {
        &self.delete
    }

    /// Delete the user the prompt was open for. The prompt closes either way.
    pub async fn confirm_delete(&mut self) -> bool {
        let Some(user) = self.delete.confirm() else {
            return false;
        };

        match self.service.delete(user.id).await {
            Ok(_) => {
                info!("Deleted user {}", user.id);
                self.alert
                    .success(format!("User \"{}\" deleted", user.full_name()));
                self.sync_from_cache();
                true
            }
            Err(e) => {
                self.alert
                    .error(format!("Could not delete user: {}", e.user_message()));
                false
            }
        }
    }

    // =========================================================================
    // Refresh and export
    // =========================================================================

    /// Clear the search, go back to page 1 and reload
    pub async fn refresh(&mut self) -> bool {
        self.debounce = None;
        self.state_tx.send_modify(|state| {
            state.search_input.clear();
            state.applied_search.clear();
            state.pagination.reset();
            state.apply_filter();
        });

        let loaded = self.load().await;
        if loaded {
            self.alert.success("List refreshed");
        }
        loaded
    }

    /// CSV of the filtered users
    pub fn export_csv(&mut self) -> String {
        let filtered = self.filtered_users();
        let csv = users_to_csv(&filtered);
        self.alert
            .success(format!("Exported {} users to CSV", filtered.len()));
        csv
    }

    // =========================================================================
    // Alert
    // =========================================================================

    pub fn alert(&self) -> &AlertSlot {
        &self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert.dismiss();
    }
}
