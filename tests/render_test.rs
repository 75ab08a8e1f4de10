//! Rendering smoke tests over a ratatui test backend.

mod common;

use ratatui::backend::TestBackend;
use ratatui::Terminal;

use oneline::app::{App, Screen};
use oneline::composer::Composer;
use oneline::ui;

fn render_to_text(app: &App) -> String {
    let backend = TestBackend::new(100, 30);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::render(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn feed_screen_shows_lines_and_authors() {
    let (mut app, _rx, _mock) = common::test_app();
    app.feed = vec![common::display_line("l-1", true, false)];

    let text = render_to_text(&app);
    assert!(text.contains("line l-1"));
    assert!(text.contains("@ada"));
    assert!(text.contains("OneLine"));
}

#[test]
fn empty_feed_distinguishes_filtered_from_unfiltered() {
    let (mut app, _rx, _mock) = common::test_app();
    let unfiltered = render_to_text(&app);
    assert!(unfiltered.contains("No lines yet"));

    app.date_filter = Some("2024-03-10".to_string());
    let filtered = render_to_text(&app);
    assert!(filtered.contains("2024-03-10"));
}

#[test]
fn login_screen_shows_both_fields() {
    let (mut app, _rx, _mock) = common::test_app();
    app.screen = Screen::Login;

    let text = render_to_text(&app);
    assert!(text.contains("Email"));
    assert!(text.contains("Password"));
}

#[test]
fn composer_modal_shows_remaining_characters() {
    let (mut app, _rx, _mock) = common::test_app();
    app.session = Some(common::test_session());
    let mut composer = Composer::default();
    for ch in "hello".chars() {
        composer.push_char(ch);
    }
    app.composer = Some(composer);

    let text = render_to_text(&app);
    assert!(text.contains("hello"));
    assert!(text.contains("145"));
}

#[test]
fn search_modal_previews_the_parsed_day() {
    let (mut app, _rx, _mock) = common::test_app();
    app.search.visible = true;
    app.search.input = "2024-03-10".to_string();

    let text = render_to_text(&app);
    assert!(text.contains("2024-03-10"));
}
