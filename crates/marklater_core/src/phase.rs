use crate::SubmitError;

/// Identifies one end-to-end submission attempt. Ids are allocated by the
/// controller handle and never reused.
pub type SubmissionId = u64;

/// Opaque handle to a transient notification owned by one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub u64);

/// Lifecycle of a single submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// The draft has been accepted and the in-progress notice is showing.
    Started,
    /// The HTTP request has been dispatched.
    AwaitingResponse,
    Succeeded,
    Failed(SubmitError),
}

/// Pure per-submission state: the current phase plus ownership of the one
/// live notification handle.
///
/// The tracker is created when a draft is accepted and discarded once a
/// terminal phase has been reported. It enforces the notification contract:
/// each submission shows at most one notice at a time, and the in-progress
/// notice is released exactly once, before the terminal notice appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTracker {
    id: SubmissionId,
    phase: SubmissionPhase,
    notification: Option<NotificationId>,
}

impl SubmissionTracker {
    pub fn new(id: SubmissionId) -> Self {
        Self {
            id,
            phase: SubmissionPhase::Started,
            notification: None,
        }
    }

    pub fn id(&self) -> SubmissionId {
        self.id
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.phase,
            SubmissionPhase::Succeeded | SubmissionPhase::Failed(_)
        )
    }

    /// Records the handle of the notice currently on screen. Replacing a
    /// handle without releasing the previous one is a contract violation,
    /// so the previous handle (if any) is returned for the caller to clear.
    #[must_use = "a previously shown notification must be cleared"]
    pub fn notice_shown(&mut self, id: NotificationId) -> Option<NotificationId> {
        self.notification.replace(id)
    }

    /// Releases ownership of the live notice so it can be cleared. Returns
    /// `None` when nothing is showing; a second call cannot double-clear.
    pub fn take_notice(&mut self) -> Option<NotificationId> {
        self.notification.take()
    }

    /// Started -> AwaitingResponse, once the request is on the wire.
    pub fn request_dispatched(&mut self) {
        if self.phase == SubmissionPhase::Started {
            self.phase = SubmissionPhase::AwaitingResponse;
        }
    }

    /// Any non-terminal phase -> Succeeded or Failed. Terminal phases are
    /// final; a second outcome is ignored.
    pub fn finished(&mut self, result: Result<(), SubmitError>) {
        if self.is_terminal() {
            return;
        }
        self.phase = match result {
            Ok(()) => SubmissionPhase::Succeeded,
            Err(err) => SubmissionPhase::Failed(err),
        };
    }
}
