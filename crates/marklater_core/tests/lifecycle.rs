use std::sync::Once;

use marklater_core::{
    failure_notice, progress_notice, success_notice, NotificationId, SubmissionPhase,
    SubmissionTracker, SubmitError,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(mark_logging::initialize_for_tests);
}

fn draft() -> marklater_core::BookmarkDraft {
    marklater_core::BookmarkDraft::new("T", "https://a", "", Vec::new())
}

/// Walks the notification contract the controller relies on: one notice
/// live at a time, released exactly once, terminal notice after release.
#[test]
fn one_notice_live_at_a_time() {
    init_logging();
    let mut tracker = SubmissionTracker::new(1);

    let progress = progress_notice(&draft());
    assert!(tracker.notice_shown(NotificationId(1)).is_none());
    assert_eq!(progress.title, "Saving bookmark");

    tracker.request_dispatched();
    assert_eq!(tracker.phase(), &SubmissionPhase::AwaitingResponse);

    // The in-progress notice is released before the terminal one shows.
    assert_eq!(tracker.take_notice(), Some(NotificationId(1)));
    tracker.finished(Ok(()));
    assert!(tracker.notice_shown(NotificationId(2)).is_none());
    assert_eq!(success_notice(&draft()).title, "Bookmark saved");
    assert!(tracker.is_terminal());
}

#[test]
fn config_failure_reports_without_dispatch() {
    init_logging();
    let mut tracker = SubmissionTracker::new(2);
    assert!(tracker.notice_shown(NotificationId(7)).is_none());

    tracker.finished(Err(SubmitError::MissingServerUrl));
    assert_eq!(
        tracker.phase(),
        &SubmissionPhase::Failed(SubmitError::MissingServerUrl)
    );

    assert_eq!(tracker.take_notice(), Some(NotificationId(7)));
    let notice = failure_notice(&SubmitError::MissingServerUrl);
    assert_eq!(notice.message, "no server URL is configured");
}

/// Two trackers never share state; interleaving their transitions cannot
/// cross-contaminate phases or notification handles.
#[test]
fn trackers_are_independent() {
    init_logging();
    let mut first = SubmissionTracker::new(10);
    let mut second = SubmissionTracker::new(11);

    assert!(first.notice_shown(NotificationId(100)).is_none());
    assert!(second.notice_shown(NotificationId(200)).is_none());

    first.request_dispatched();
    second.request_dispatched();
    first.finished(Err(SubmitError::Network("refused".into())));

    assert!(first.is_terminal());
    assert_eq!(second.phase(), &SubmissionPhase::AwaitingResponse);
    assert_eq!(first.take_notice(), Some(NotificationId(100)));
    assert_eq!(second.take_notice(), Some(NotificationId(200)));
}
