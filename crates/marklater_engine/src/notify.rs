use marklater_core::{Notice, NotificationId};

/// The host's transient-message subsystem.
///
/// The controller treats notices as fire-and-forget-with-handle: `show`
/// hands back an opaque id the submission owns until it clears it. Failures
/// inside the notification subsystem are the host's problem, so the trait
/// is infallible.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn show(&self, notice: &Notice) -> NotificationId;
    async fn clear(&self, id: NotificationId);
}
