use crate::{BookmarkDraft, SubmitError};

/// Visual category of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Progress,
    Success,
    Failure,
}

/// One transient message for the host notification subsystem. The strings
/// are fixed and non-localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// The notice shown while a submission is in flight.
pub fn progress_notice(draft: &BookmarkDraft) -> Notice {
    Notice {
        kind: NoticeKind::Progress,
        title: "Saving bookmark".to_string(),
        message: draft.url.clone(),
    }
}

/// The terminal notice for a successful submission.
pub fn success_notice(draft: &BookmarkDraft) -> Notice {
    Notice {
        kind: NoticeKind::Success,
        title: "Bookmark saved".to_string(),
        message: draft.url.clone(),
    }
}

/// The terminal notice for a failed submission. All error kinds share one
/// generic title; the message carries the error's own rendering.
pub fn failure_notice(error: &SubmitError) -> Notice {
    Notice {
        kind: NoticeKind::Failure,
        title: "Failed to save bookmark".to_string(),
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookmarkDraft {
        BookmarkDraft::new("T", "https://a", "", Vec::new())
    }

    #[test]
    fn progress_and_success_carry_the_url() {
        assert_eq!(progress_notice(&draft()).message, "https://a");
        assert_eq!(success_notice(&draft()).message, "https://a");
        assert_eq!(success_notice(&draft()).kind, NoticeKind::Success);
    }

    #[test]
    fn failure_uses_one_generic_title_for_all_kinds() {
        let status = failure_notice(&SubmitError::HttpStatus(500));
        let network = failure_notice(&SubmitError::Network("dns".into()));
        assert_eq!(status.title, network.title);
        assert_eq!(status.kind, NoticeKind::Failure);
        assert_eq!(status.message, "server returned status 500");
    }
}
