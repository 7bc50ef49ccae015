use crate::views::DelayedTask;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

/// Screens a view can send the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Edit(i64),
}

/// Pending navigation requested by a view, delivered after a delay
pub struct Navigator {
    target_tx: Arc<watch::Sender<Option<Route>>>,
    timer: Option<DelayedTask>,
}

impl Navigator {
    pub fn new() -> Self {
        let (target_tx, _) = watch::channel(None);
        Self {
            target_tx: Arc::new(target_tx),
            timer: None,
        }
    }

    pub fn navigate_after(&mut self, route: Route, delay: Duration) {
        let target_tx = Arc::clone(&self.target_tx);
        self.timer = Some(DelayedTask::schedule(delay, async move {
            target_tx.send_replace(Some(route));
        }));
    }

    pub fn is_scheduled(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Where the view asked to go, once the delay has elapsed
    pub fn requested(&self) -> Option<Route> {
        *self.target_tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Route>> {
        self.target_tx.subscribe()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
