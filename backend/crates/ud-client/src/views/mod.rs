//! Client views as plain state machines.
//!
//! Nothing here renders. Each view owns its timers as [`DelayedTask`]s, so
//! dropping a view cancels its pending debounce, navigation and alert work.

pub(crate) mod alert;
pub(crate) mod create_view;
pub(crate) mod csv_export;
pub(crate) mod delayed_task;
pub(crate) mod delete_confirmation;
pub(crate) mod edit_view;
pub(crate) mod form;
pub(crate) mod list_view;
pub(crate) mod navigation;
pub(crate) mod pagination;
pub(crate) mod view_settings;

pub use alert::{Alert, AlertKind, AlertSlot};
pub use create_view::CreateView;
pub use csv_export::{CSV_HEADER, export_file_name, users_to_csv};
pub use delayed_task::DelayedTask;
pub use delete_confirmation::DeleteConfirmation;
pub use edit_view::EditView;
pub use form::{FORM_FIELDS, FormPhase, SubmitOutcome, UserForm, field_message};
pub use list_view::{ListStats, ListView};
pub use navigation::{Navigator, Route};
pub use pagination::{PAGE_WINDOW, Pagination};
pub use view_settings::ViewSettings;
