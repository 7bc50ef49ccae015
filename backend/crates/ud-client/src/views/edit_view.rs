use crate::UserService;
use crate::views::{
    AlertSlot, FormPhase, Navigator, Route, SubmitOutcome, UserForm, ViewSettings,
};

use ud_core::UserField;

use log::info;
use tokio::sync::watch;

/// Edit form for one user: `Loading -> Editing` (or `LoadFailed`), then the
/// same submit cycle as the create view
pub struct EditView {
    id: i64,
    service: UserService,
    settings: ViewSettings,
    form: UserForm,
    phase_tx: watch::Sender<FormPhase>,
    alert: AlertSlot,
    navigator: Navigator,
}

impl EditView {
    /// Build the view and load the record
    pub async fn open(service: UserService, settings: ViewSettings, id: i64) -> Self {
        let (phase_tx, _) = watch::channel(FormPhase::Loading);
        let mut view = Self {
            id,
            service,
            settings,
            form: UserForm::new(),
            phase_tx,
            alert: AlertSlot::new(settings.alert_dismiss),
            navigator: Navigator::new(),
        };
        view.load().await;
        view
    }

    /// Fetch the record again, discarding unsaved edits
    pub async fn load(&mut self) {
        self.phase_tx.send_replace(FormPhase::Loading);

        match self.service.get(self.id).await {
            Ok(user) => {
                self.form = UserForm::from_record(&user);
                self.phase_tx.send_replace(FormPhase::Editing);
            }
            Err(e) => {
                self.phase_tx.send_replace(FormPhase::LoadFailed);
                self.alert
                    .error(format!("Could not load the user: {}", e.user_message()));
            }
        }
    }

    pub fn id(&self) -> i64 {
        self.id
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

        if self.service.email_in_use(&fields.email, Some(self.id)) {
            self.alert.error("That email is already registered.");
            return SubmitOutcome::Invalid;
        }

        self.phase_tx.send_replace(FormPhase::Submitting);

        match self.service.update(self.id, &fields).await {
            Ok(_) => {
                info!("Updated user {}", self.id);
                self.phase_tx.send_replace(FormPhase::Success);
                self.alert.success("User updated successfully");
                self.navigator
                    .navigate_after(Route::List, self.settings.navigation_delay);
                SubmitOutcome::Saved { id: self.id }
            }
            Err(e) => {
                self.phase_tx.send_replace(FormPhase::Editing);
                self.alert
                    .error(format!("Could not update the user: {}", e.user_message()));
                SubmitOutcome::Failed
            }
        }
    }
}
