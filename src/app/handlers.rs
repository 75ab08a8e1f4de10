//! Message and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, AppMessage, Notice, ProfileTab, ProfileUpdateContext, Screen};
use crate::composer::{Composer, ComposerStep};
use crate::models::LineTheme;

impl App {
    /// Apply a message from a finished async operation.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::SessionRestored { session } => {
                self.session = session;
                self.refresh_feed();
            }

            AppMessage::AuthFinished { result } => {
                self.login.in_flight = false;
                match result {
                    Ok(session) => {
                        self.show_notice(Notice::success(format!(
                            "Welcome, @{}!",
                            session.username()
                        )));
                        self.session = Some(session);
                        self.login.reset();
                        self.screen = Screen::Feed;
                        self.refresh_feed();
                    }
                    Err(err) => {
                        tracing::error!(code = err.error_code(), "auth failed: {}", err);
                        self.show_notice(Notice::error(err.user_message()));
                    }
                }
            }

            AppMessage::FeedLoaded { generation, result } => {
                if generation != self.feed_generation {
                    tracing::debug!(generation, "discarding stale feed result");
                    return;
                }
                self.feed_loading = false;
                match result {
                    Ok(records) => {
                        self.feed = records;
                        self.clamp_selections();
                    }
                    Err(err) => {
                        // Reads degrade to an empty feed; never partial.
                        tracing::error!(code = err.error_code(), "feed load failed: {}", err);
                        self.feed = Vec::new();
                        self.show_notice(Notice::error(err.user_message()));
                    }
                }
            }

            AppMessage::ProfileDataLoaded { generation, result } => {
                if generation != self.profile_generation {
                    tracing::debug!(generation, "discarding stale profile result");
                    return;
                }
                self.profile_loading = false;
                match result {
                    Ok(data) => {
                        self.my_lines = data.my_lines;
                        self.bookmarked_lines = data.bookmarks;
                        self.clamp_selections();
                    }
                    Err(err) => {
                        tracing::error!(code = err.error_code(), "profile load failed: {}", err);
                        self.my_lines = Vec::new();
                        self.bookmarked_lines = Vec::new();
                        self.show_notice(Notice::error(err.user_message()));
                    }
                }
            }

            AppMessage::ToggleFinished { line_id, result } => {
                self.toggles_in_flight.remove(&line_id);
                match result {
                    // The displayed count always reflects the store's
                    // post-mutation state, so re-fetch the owning view.
                    Ok(()) => match self.screen {
                        Screen::Profile => self.load_profile_data(),
                        _ => self.refresh_feed(),
                    },
                    Err(err) => {
                        tracing::error!(code = err.error_code(), "toggle failed: {}", err);
                        self.show_notice(Notice::error(err.user_message()));
                    }
                }
            }

            AppMessage::LinePosted { result } => {
                self.posting = false;
                match result {
                    Ok(()) => {
                        self.composer = None;
                        self.theme_cursor = 0;
                        self.show_notice(Notice::success(
                            "Posted! Your line has been shared with the world.",
                        ));
                        self.refresh_feed();
                    }
                    Err(err) => {
                        tracing::error!(code = err.error_code(), "post failed: {}", err);
                        if let Some(composer) = self.composer.as_mut() {
                            composer.submit_failed();
                        }
                        self.show_notice(Notice::error(
                            "Failed to post your line. Please try again.",
                        ));
                    }
                }
            }

            AppMessage::ProfileUpdated { context, result } => match result {
                Ok(session) => {
                    self.session = Some(session);
                    let notice = match context {
                        ProfileUpdateContext::Username => Notice::success("Username updated."),
                        ProfileUpdateContext::PremiumUpgrade => {
                            Notice::success("Congratulations! You are now a Premium member!")
                        }
                    };
                    self.show_notice(notice);
                }
                Err(err) => {
                    tracing::error!(code = err.error_code(), "profile update failed: {}", err);
                    self.show_notice(Notice::error(err.user_message()));
                }
            },
        }
    }

    /// Route a key press to the active modal or screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.composer.is_some() {
            self.handle_composer_key(key);
            return;
        }
        if self.search.visible {
            self.handle_search_key(key);
            return;
        }
        match self.screen {
            Screen::Feed => self.handle_feed_key(key),
            Screen::Login => self.handle_login_key(key),
            Screen::Profile => self.handle_profile_key(key),
            Screen::Settings => self.handle_settings_key(key),
        }
    }

    fn handle_feed_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                if self.feed_selected + 1 < self.feed.len() {
                    self.feed_selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.feed_selected = self.feed_selected.saturating_sub(1);
            }
            KeyCode::Char('l') => self.toggle_like_selected(),
            KeyCode::Char('b') => self.toggle_bookmark_selected(),
            KeyCode::Char('c') => {
                self.composer = Some(Composer::new());
                self.theme_cursor = 0;
            }
            KeyCode::Char('s') | KeyCode::Char('/') => {
                self.search.visible = true;
                self.search.input.clear();
            }
            KeyCode::Char('d') => {
                if self.date_filter.take().is_some() {
                    self.refresh_feed();
                }
            }
            KeyCode::Char('r') => self.refresh_feed(),
            KeyCode::Char('p') => {
                if self.is_signed_in() {
                    self.screen = Screen::Profile;
                    self.profile_selected = 0;
                    self.load_profile_data();
                } else {
                    self.screen = Screen::Login;
                }
            }
            KeyCode::Char('g') => {
                if self.is_signed_in() {
                    self.screen = Screen::Settings;
                } else {
                    self.screen = Screen::Login;
                }
            }
            _ => {}
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        if self.login.in_flight {
            return;
        }
        match key.code {
            KeyCode::Esc => {
                self.login.reset();
                self.screen = Screen::Feed;
            }
            KeyCode::Tab | KeyCode::Down => self.login.focus_next(),
            KeyCode::Enter => self.submit_login(),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.login.toggle_mode();
            }
            KeyCode::Char(c) => self.login.focused_buffer().push(c),
            KeyCode::Backspace => {
                self.login.focused_buffer().pop();
            }
            _ => {}
        }
    }

    fn handle_profile_key(&mut self, key: KeyEvent) {
        // Username editing takes over the keyboard while active.
        if self.username_edit.is_some() {
            match key.code {
                KeyCode::Esc => self.username_edit = None,
                KeyCode::Enter => self.save_username(),
                KeyCode::Char(c) => {
                    if let Some(buffer) = self.username_edit.as_mut() {
                        buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(buffer) = self.username_edit.as_mut() {
                        buffer.pop();
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.screen = Screen::Feed,
            KeyCode::Tab => {
                self.profile_tab = match self.profile_tab {
                    ProfileTab::MyLines => ProfileTab::Bookmarks,
                    ProfileTab::Bookmarks => ProfileTab::MyLines,
                };
                self.profile_selected = 0;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.profile_selected + 1 < self.visible_lines().len() {
                    self.profile_selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.profile_selected = self.profile_selected.saturating_sub(1);
            }
            KeyCode::Char('l') => self.toggle_like_selected(),
            KeyCode::Char('b') => self.toggle_bookmark_selected(),
            KeyCode::Char('e') => {
                if let Some(session) = self.session.as_ref() {
                    self.username_edit = Some(session.username().to_string());
                }
            }
            KeyCode::Char('r') => self.load_profile_data(),
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.screen = Screen::Feed,
            KeyCode::Char('u') => self.upgrade_premium(),
            KeyCode::Char('o') => self.sign_out_now(),
            _ => {}
        }
    }

    fn handle_composer_key(&mut self, key: KeyEvent) {
        let Some(step) = self.composer.as_ref().map(|c| c.step()) else {
            return;
        };
        match step {
            ComposerStep::EditingText => match key.code {
                KeyCode::Esc => {
                    self.composer = None;
                    self.theme_cursor = 0;
                }
                KeyCode::Enter => {
                    let signed_in = self.is_signed_in();
                    let outcome = self
                        .composer
                        .as_mut()
                        .map(|composer| composer.advance(signed_in));
                    if let Some(Err(err)) = outcome {
                        self.show_notice(Notice::error(err.user_message()));
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(composer) = self.composer.as_mut() {
                        composer.push_char(c);
                    }
                }
                KeyCode::Backspace => {
                    if let Some(composer) = self.composer.as_mut() {
                        composer.backspace();
                    }
                }
                _ => {}
            },
            ComposerStep::ChoosingTheme => match key.code {
                KeyCode::Esc => {
                    self.composer = None;
                    self.theme_cursor = 0;
                }
                KeyCode::Backspace => {
                    if let Some(composer) = self.composer.as_mut() {
                        composer.back();
                    }
                }
                KeyCode::Left => {
                    self.theme_cursor =
                        (self.theme_cursor + LineTheme::ALL.len() - 1) % LineTheme::ALL.len();
                }
                KeyCode::Right => {
                    self.theme_cursor = (self.theme_cursor + 1) % LineTheme::ALL.len();
                }
                KeyCode::Char(' ') => {
                    let theme = LineTheme::ALL[self.theme_cursor];
                    let premium = self.is_premium();
                    let outcome = self
                        .composer
                        .as_mut()
                        .map(|composer| composer.select_theme(theme, premium));
                    if let Some(Err(err)) = outcome {
                        self.show_notice(Notice::error(err.user_message()));
                    }
                }
                KeyCode::Enter => self.submit_composer(),
                _ => {}
            },
            // No operation is cancelable mid-flight.
            ComposerStep::Submitting => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.search.visible = false;
                self.search.input.clear();
            }
            KeyCode::Enter => {
                if !self.search.input.is_empty() {
                    self.date_filter = Some(self.search.input.clone());
                    self.search.visible = false;
                    self.search.input.clear();
                    self.feed_selected = 0;
                    self.refresh_feed();
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                self.search.input.push(c);
            }
            KeyCode::Backspace => {
                self.search.input.pop();
            }
            _ => {}
        }
    }
}
