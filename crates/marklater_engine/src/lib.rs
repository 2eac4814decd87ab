//! Marklater engine: submission controller and IO seams.
mod controller;
mod notify;
mod settings;
mod transport;

pub use controller::{SubmissionEvent, SubmitCommand, SubmitHandle};
pub use notify::Notifier;
pub use settings::{resolve_config, SettingsScope, SettingsStore};
pub use transport::{
    BookmarkTransport, ReqwestTransport, TransportSettings, PASSWORD_HEADER, USERNAME_HEADER,
};
