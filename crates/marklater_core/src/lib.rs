//! Marklater core: pure bookmark-submission domain, no IO.
mod config;
mod draft;
mod error;
mod notice;
mod phase;

pub use config::{Credentials, ServerConfig, PASSWORD_KEY, SERVER_URL_KEY, USERNAME_KEY};
pub use draft::{parse_tags, BookmarkDraft};
pub use error::SubmitError;
pub use notice::{failure_notice, progress_notice, success_notice, Notice, NoticeKind};
pub use phase::{NotificationId, SubmissionId, SubmissionPhase, SubmissionTracker};
