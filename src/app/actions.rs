//! Async actions: every store interaction the UI can trigger.
//!
//! Each action spawns a task with clones of the store/session clients and
//! reports back through [`AppMessage`]. Fetches carry a generation counter;
//! a result for a superseded generation is discarded, never applied.

use super::{App, AppMessage, Notice, ProfileData, ProfileUpdateContext, Screen};
use crate::error::OneLineError;
use crate::feed::{assemble_feed, DayWindow};
use crate::models::ProfileUpdate;

impl App {
    /// Restore the previous session (startup), then load the feed.
    pub fn start_session_restore(&self) {
        let sessions = self.sessions.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let session = sessions.restore().await;
            let _ = tx.send(AppMessage::SessionRestored { session });
        });
    }

    /// Re-fetch and re-assemble the feed for the current date filter.
    pub fn refresh_feed(&mut self) {
        self.feed_generation += 1;
        let generation = self.feed_generation;
        self.feed_loading = true;

        let window = self.date_filter.as_deref().map(DayWindow::parse);
        let store = self.store.clone();
        let viewer = self.viewer_id().map(str::to_string);
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = async {
                // An unparseable date is an empty window: no rows, no request.
                if window.as_ref().is_some_and(DayWindow::is_empty) {
                    return Ok(Vec::new());
                }
                let rows = store.fetch_lines(window.as_ref()).await?;
                assemble_feed(&store, rows, viewer.as_deref()).await
            }
            .await;
            let _ = tx.send(AppMessage::FeedLoaded { generation, result });
        });
    }

    /// Load both profile tabs (own lines and bookmarks).
    pub fn load_profile_data(&mut self) {
        let Some(user_id) = self.viewer_id().map(str::to_string) else {
            return;
        };
        self.profile_generation += 1;
        let generation = self.profile_generation;
        self.profile_loading = true;

        let store = self.store.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = async {
                let (own_rows, bookmark_rows) = tokio::try_join!(
                    store.fetch_lines_by_author(&user_id),
                    store.fetch_bookmarked_lines(&user_id),
                )?;
                let my_lines = assemble_feed(&store, own_rows, Some(&user_id)).await?;
                let bookmarks = assemble_feed(&store, bookmark_rows, Some(&user_id)).await?;
                Ok::<_, OneLineError>(ProfileData { my_lines, bookmarks })
            }
            .await;
            let _ = tx.send(AppMessage::ProfileDataLoaded { generation, result });
        });
    }

    /// Toggle the like relation for the selected line.
    pub fn toggle_like_selected(&mut self) {
        self.toggle_selected(true);
    }

    /// Toggle the bookmark relation for the selected line.
    pub fn toggle_bookmark_selected(&mut self) {
        self.toggle_selected(false);
    }

    fn toggle_selected(&mut self, like: bool) {
        let Some(line) = self.selected_line().cloned() else {
            return;
        };
        let Some(user_id) = self.viewer_id().map(str::to_string) else {
            let action = if like { "like lines" } else { "bookmark lines" };
            self.show_notice(Notice::error(
                OneLineError::AuthRequired { action }.user_message(),
            ));
            return;
        };
        // Control is disabled while a toggle for this line is in flight.
        if !self.toggles_in_flight.insert(line.id.clone()) {
            return;
        }

        let store = self.store.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = if like {
                if line.is_liked {
                    store.delete_like(&user_id, &line.id).await
                } else {
                    store.insert_like(&user_id, &line.id).await
                }
            } else if line.is_bookmarked {
                store.delete_bookmark(&user_id, &line.id).await
            } else {
                store.insert_bookmark(&user_id, &line.id).await
            };
            let _ = tx.send(AppMessage::ToggleFinished {
                line_id: line.id,
                result,
            });
        });
    }

    /// Post the composed line (composer must be at the theme step).
    pub fn submit_composer(&mut self) {
        let Some(user_id) = self.viewer_id().map(str::to_string) else {
            self.show_notice(Notice::error(
                OneLineError::AuthRequired { action: "post a line" }.user_message(),
            ));
            return;
        };
        let Some(composer) = self.composer.as_mut() else {
            return;
        };
        let (text, theme) = match composer.begin_submit() {
            Ok(pair) => pair,
            Err(err) => {
                self.show_notice(Notice::error(err.user_message()));
                return;
            }
        };
        self.posting = true;

        let store = self.store.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = store.insert_line(&user_id, &text, theme).await;
            let _ = tx.send(AppMessage::LinePosted { result });
        });
    }

    /// Submit the login form (sign in or sign up by mode).
    pub fn submit_login(&mut self) {
        if self.login.in_flight {
            return;
        }
        let email = self.login.email.trim().to_string();
        let password = self.login.password.clone();
        let username = self.login.username.trim().to_string();
        if email.is_empty() || password.is_empty() {
            self.show_notice(Notice::error("Email and password are required."));
            return;
        }
        let signing_up = self.login.mode == super::LoginMode::SignUp;
        if signing_up && username.is_empty() {
            self.show_notice(Notice::error("Pick a username to sign up."));
            return;
        }
        self.login.in_flight = true;

        let sessions = self.sessions.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = if signing_up {
                sessions.sign_up(&email, &password, &username).await
            } else {
                sessions.sign_in(&email, &password).await
            };
            let _ = tx.send(AppMessage::AuthFinished { result });
        });
    }

    /// The mock premium upgrade: set the premium flag via a profile update.
    pub fn upgrade_premium(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        if session.is_premium() {
            self.show_notice(Notice::info("You are already a Premium member."));
            return;
        }
        self.spawn_profile_update(
            session,
            ProfileUpdate::premium(true),
            ProfileUpdateContext::PremiumUpgrade,
        );
    }

    /// Save the edited username; unchanged input just closes the editor.
    pub fn save_username(&mut self) {
        let Some(session) = self.session.clone() else {
            return;
        };
        let Some(edited) = self.username_edit.take() else {
            return;
        };
        let edited = edited.trim().to_string();
        if edited.is_empty() || edited == session.username() {
            return;
        }
        self.spawn_profile_update(
            session,
            ProfileUpdate::username(edited),
            ProfileUpdateContext::Username,
        );
    }

    fn spawn_profile_update(
        &mut self,
        session: crate::session::Session,
        update: ProfileUpdate,
        context: ProfileUpdateContext,
    ) {
        let sessions = self.sessions.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = sessions.update_profile(&session, &update).await;
            let _ = tx.send(AppMessage::ProfileUpdated { context, result });
        });
    }

    /// Sign out: clear the session snapshot and go back to the feed.
    ///
    /// The feed is re-fetched so viewer-relative flags drop immediately.
    pub fn sign_out_now(&mut self) {
        self.sessions.sign_out();
        self.session = None;
        self.my_lines.clear();
        self.bookmarked_lines.clear();
        // Any profile fetch still in flight belongs to the old viewer.
        self.profile_generation += 1;
        self.profile_loading = false;
        self.screen = Screen::Feed;
        self.show_notice(Notice::info("Signed out."));
        self.refresh_feed();
    }
}
