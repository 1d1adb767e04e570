pub mod dialogs;
pub mod event_log;
pub mod server_resources;

pub use dialogs::{DialogCallback, DialogError, DialogId, PendingDialog, QuickDialogs};
pub use event_log::{EventLog, NameChange, Popup, PopupKind};
pub use server_resources::{PaiConfig, PaiRng};
