use crate::views::DelayedTask;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Information",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
struct AlertState {
    current: Option<Alert>,
    /// Bumped on every show so a stale timer cannot close a newer alert
    generation: u64,
}

/// The one alert a view can display: dismissible, and closed
/// automatically after `auto_dismiss`.
pub struct AlertSlot {
    state_tx: Arc<watch::Sender<AlertState>>,
    auto_dismiss: Duration,
    timer: Option<DelayedTask>,
}

impl AlertSlot {
    pub fn new(auto_dismiss: Duration) -> Self {
        let (state_tx, _) = watch::channel(AlertState::default());
        Self {
            state_tx: Arc::new(state_tx),
            auto_dismiss,
            timer: None,
        }
    }

    /// Replace whatever is showing and restart the auto-dismiss timer
    pub fn show<S: Into<String>>(&mut self, kind: AlertKind, message: S) {
        let alert = Alert {
            kind,
            message: message.into(),
        };

        let mut generation = 0;
        self.state_tx.send_modify(|state| {
            state.generation += 1;
            state.current = Some(alert);
            generation = state.generation;
        });

        let state_tx = Arc::clone(&self.state_tx);
        self.timer = Some(DelayedTask::schedule(self.auto_dismiss, async move {
            state_tx.send_if_modified(|state| {
                if state.generation != generation || state.current.is_none() {
                    return false;
                }
                state.current = None;
                true
            });
        }));
    }

    pub fn success<S: Into<String>>(&mut self, message: S) {
        self.show(AlertKind::Success, message);
    }

    pub fn error<S: Into<String>>(&mut self, message: S) {
        self.show(AlertKind::Error, message);
    }

    /// User closed the alert
    pub fn dismiss(&mut self) {
        self.timer = None;
        self.state_tx.send_if_modified(|state| state.current.take().is_some());
    }

    pub fn current(&self) -> Option<Alert> {
        self.state_tx.borrow().current.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.state_tx.borrow().current.is_some()
    }
}
