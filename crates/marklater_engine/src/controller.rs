use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use mark_logging::{mark_info, mark_warn};
use marklater_core::{
    failure_notice, progress_notice, success_notice, BookmarkDraft, SubmissionId,
    SubmissionTracker, SubmitError,
};

use crate::settings::resolve_config;
use crate::{BookmarkTransport, Notifier, SettingsStore};

/// One-way command into the controller, mirroring the capture producer's
/// `addBookmark` message. The producer gets no reply; the outcome is
/// visible only through the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitCommand {
    AddBookmark(BookmarkDraft),
}

/// Internal completion event for the host loop. This is plumbing for the
/// embedding application, not a channel back to the capture producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    Finished {
        submission_id: SubmissionId,
        result: Result<(), SubmitError>,
    },
}

/// Handle to the submission controller: a worker thread owning a tokio
/// runtime, fed over an mpsc command channel. Each accepted command becomes
/// an independent task, so overlapping submissions never serialize or
/// share state.
pub struct SubmitHandle {
    cmd_tx: mpsc::Sender<SubmitCommand>,
    event_rx: mpsc::Receiver<SubmissionEvent>,
}

impl SubmitHandle {
    pub fn new(
        store: Arc<dyn SettingsStore>,
        notifier: Arc<dyn Notifier>,
        transport: Arc<dyn BookmarkTransport>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<SubmitCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut next_id: SubmissionId = 1;
            while let Ok(SubmitCommand::AddBookmark(draft)) = cmd_rx.recv() {
                let submission_id = next_id;
                next_id += 1;
                let store = store.clone();
                let notifier = notifier.clone();
                let transport = transport.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    run_submission(
                        submission_id,
                        draft,
                        store.as_ref(),
                        notifier.as_ref(),
                        transport.as_ref(),
                        event_tx,
                    )
                    .await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Fire-and-forget submission of one draft. Returns immediately; the
    /// result surfaces as notifications and a [`SubmissionEvent`].
    pub fn submit(&self, draft: BookmarkDraft) {
        let _ = self.cmd_tx.send(SubmitCommand::AddBookmark(draft));
    }

    pub fn try_recv(&self) -> Option<SubmissionEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<SubmissionEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

/// Drives one submission through its whole lifecycle. Every error is
/// converted to a terminal failure notice here; nothing escapes the task.
async fn run_submission(
    submission_id: SubmissionId,
    draft: BookmarkDraft,
    store: &dyn SettingsStore,
    notifier: &dyn Notifier,
    transport: &dyn BookmarkTransport,
    event_tx: mpsc::Sender<SubmissionEvent>,
) {
    let mut tracker = SubmissionTracker::new(submission_id);

    // The in-progress notice must be on screen before any IO starts.
    let shown = notifier.show(&progress_notice(&draft)).await;
    if let Some(stale) = tracker.notice_shown(shown) {
        notifier.clear(stale).await;
    }
    mark_info!("submission {} started for {}", submission_id, draft.url);

    let result = attempt(&mut tracker, &draft, store, transport).await;
    tracker.finished(result.clone());

    // Replace the in-progress notice with exactly one terminal notice.
    if let Some(notice_id) = tracker.take_notice() {
        notifier.clear(notice_id).await;
    }
    let terminal = match &result {
        Ok(()) => {
            mark_info!("submission {} saved {}", submission_id, draft.url);
            success_notice(&draft)
        }
        Err(err) => {
            mark_warn!("submission {} failed: {}", submission_id, err);
            failure_notice(err)
        }
    };
    // The terminal notice is handed to the host to dismiss on its own
    // schedule; this submission's notification ownership ends here.
    let _ = notifier.show(&terminal).await;

    let _ = event_tx.send(SubmissionEvent::Finished {
        submission_id,
        result,
    });
}

async fn attempt(
    tracker: &mut SubmissionTracker,
    draft: &BookmarkDraft,
    store: &dyn SettingsStore,
    transport: &dyn BookmarkTransport,
) -> Result<(), SubmitError> {
    // A missing server URL fails the submission before any request is made.
    let config = resolve_config(store).await?;
    tracker.request_dispatched();
    transport.submit(&config, draft).await
}
