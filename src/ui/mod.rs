//! UI rendering for all screens and modals.

pub mod composer;
pub mod feed;
pub mod helpers;
pub mod login;
pub mod notice;
pub mod profile;
pub mod search;
pub mod settings;
pub mod theme;

use ratatui::Frame;

use crate::app::{App, Screen};

/// Render the whole frame: active screen, then any modal, then the notice.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Feed => feed::render_feed_screen(frame, app),
        Screen::Login => login::render_login_screen(frame, app),
        Screen::Profile => profile::render_profile_screen(frame, app),
        Screen::Settings => settings::render_settings_screen(frame, app),
    }

    if let Some(active) = app.composer.as_ref() {
        composer::render_composer_modal(frame, app, active);
    } else if app.search.visible {
        search::render_search_modal(frame, app);
    }

    if let Some(active) = app.notice.as_ref() {
        notice::render_notice(frame, active);
    }
}
