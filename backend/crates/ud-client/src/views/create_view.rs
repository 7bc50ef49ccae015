use crate::UserService;
use crate::views::{
    AlertSlot, FormPhase, Navigator, Route, SubmitOutcome, UserForm, ViewSettings,
};

use ud_core::UserField;

use log::info;
use tokio::sync::watch;

/// New-user form: `Editing -> Submitting -> Success`, back to `Editing`
/// on failure
pub struct CreateView {
    service: UserService,
    settings: ViewSettings,
    form: UserForm,
    phase_tx: watch::Sender<FormPhase>,
    alert: AlertSlot,
    navigator: Navigator,
}

impl CreateView {
    pub fn new(service: UserService, settings: ViewSettings) -> Self {
        let (phase_tx, _) = watch::channel(FormPhase::Editing);
        Self {
            service,
            settings,
            form: UserForm::new(),
            phase_tx,
            alert: AlertSlot::new(settings.alert_dismiss),
            navigator: Navigator::new(),
        }
    }

    pub fn phase(&self) -> FormPhase {
        *self.phase_tx.borrow()
    }

    pub fn subscribe_phase(&self) -> watch::Receiver<FormPhase> {
        self.phase_tx.subscribe()
    }

    pub fn form(&self) -> &UserForm {
        &self.form
    }

    /// Ignored outside `Editing`
    pub fn set_field<S: Into<String>>(&mut self, field: UserField, value: S) {
        if self.phase() == FormPhase::Editing {
            self.form.set(field, value);
        }
    }

    pub fn field_error(&self, field: UserField) -> Option<String> {
        self.form.field_error(field)
    }

    pub fn alert(&self) -> &AlertSlot {
        &self.alert
    }

    pub fn dismiss_alert(&mut self) {
        self.alert.dismiss();
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if self.phase() != FormPhase::Editing {
            return SubmitOutcome::Ignored;
        }

        self.form.touch_all();
        let Ok(fields) = self.form.validate() else {
            self.alert.error("Please fix the errors in the form");
            return SubmitOutcome::Invalid;
        };

        if self.service.email_in_use(&fields.email, None) {
            self.alert.error("That email is already registered.");
            return SubmitOutcome::Invalid;
        }

        self.phase_tx.send_replace(FormPhase::Submitting);

        match self.service.create(&fields).await {
            Ok(id) => {
                info!("Created user {id} ({})", fields.full_name());
                self.phase_tx.send_replace(FormPhase::Success);
                self.alert.success("User created successfully");
                self.navigator
                    .navigate_after(Route::List, self.settings.navigation_delay);
                SubmitOutcome::Saved { id }
            }
            Err(e) => {
                self.phase_tx.send_replace(FormPhase::Editing);
                self.alert.error(e.user_message());
                SubmitOutcome::Failed
            }
        }
    }

    /// Clear the form; only meaningful while editing
    pub fn reset(&mut self) {
        if self.phase() == FormPhase::Editing {
            self.form.reset();
        }
    }
}
