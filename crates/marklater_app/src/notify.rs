//! Terminal rendering of transient notices for the headless host.

use std::sync::atomic::{AtomicU64, Ordering};

use mark_logging::mark_debug;
use marklater_core::{Notice, NoticeKind, NotificationId};
use marklater_engine::Notifier;

/// Prints notices to stdout and hands out monotonically increasing ids.
///
/// A terminal cannot retract a printed line, so `clear` only records the
/// dismissal; the replacement notice that follows plays the role the
/// update would in a real notification subsystem.
#[derive(Default)]
pub struct TermNotifier {
    next_id: AtomicU64,
}

impl TermNotifier {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Notifier for TermNotifier {
    async fn show(&self, notice: &Notice) -> NotificationId {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let tag = match notice.kind {
            NoticeKind::Progress => "..",
            NoticeKind::Success => "ok",
            NoticeKind::Failure => "!!",
        };
        println!("[{}] {}: {}", tag, notice.title, notice.message);
        id
    }

    async fn clear(&self, id: NotificationId) {
        mark_debug!("notice {} dismissed", id.0);
    }
}
