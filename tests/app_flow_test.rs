//! App-level flows driven through the message channel with a mock store.

mod common;

use oneline::app::AppMessage;

#[tokio::test]
async fn like_toggle_is_self_inverse_at_the_store() {
    let (mut app, mut rx, mock) = common::test_app();
    app.session = Some(common::test_session());
    app.feed = vec![common::display_line("l-1", false, false)];
    app.feed_selected = 0;

    // Not liked yet: the toggle inserts a membership row.
    app.toggle_like_selected();
    let message = rx.recv().await.unwrap();
    assert!(matches!(message, AppMessage::ToggleFinished { .. }));
    let likes = mock.requests_matching("/rest/v1/likes");
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].method, "POST");

    // A finished toggle re-fetches the feed rather than patching in place.
    app.handle_message(message);
    let refreshed = rx.recv().await.unwrap();
    assert!(matches!(refreshed, AppMessage::FeedLoaded { .. }));
    let fetches = mock.requests_matching("/rest/v1/lines");
    assert_eq!(fetches.len(), 1);
    assert_eq!(fetches[0].method, "GET");
    app.handle_message(refreshed);

    // Already liked: the same toggle deletes the row.
    app.feed = vec![common::display_line("l-1", true, false)];
    app.feed_selected = 0;
    app.toggle_like_selected();
    let message = rx.recv().await.unwrap();
    app.handle_message(message);

    let likes = mock.requests_matching("/rest/v1/likes");
    assert_eq!(likes.len(), 2);
    assert_eq!(likes[1].method, "DELETE");
}

#[tokio::test]
async fn bookmark_toggle_targets_the_bookmarks_relation() {
    let (mut app, mut rx, mock) = common::test_app();
    app.session = Some(common::test_session());
    app.feed = vec![common::display_line("l-9", false, true)];
    app.feed_selected = 0;

    app.toggle_bookmark_selected();
    rx.recv().await.unwrap();

    let bookmarks = mock.requests_matching("/rest/v1/bookmarks");
    assert_eq!(bookmarks.len(), 1);
    assert_eq!(bookmarks[0].method, "DELETE");
    assert!(mock.requests_matching("/rest/v1/likes").is_empty());
}

#[tokio::test]
async fn anonymous_toggle_sends_nothing_and_prompts_sign_in() {
    let (mut app, _rx, mock) = common::test_app();
    app.feed = vec![common::display_line("l-1", false, false)];
    app.feed_selected = 0;

    app.toggle_like_selected();

    assert!(mock.requests().is_empty());
    let notice = app.notice.expect("expected a sign-in prompt");
    assert!(notice.text.contains("sign in"));
}
