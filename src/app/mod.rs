//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`AppMessage`] - Messages for async communication
//! - Key handling and the async actions that talk to the store

mod actions;
mod handlers;
mod messages;
mod types;

pub use messages::{AppMessage, ProfileData, ProfileUpdateContext};
pub use types::{
    LoginField, LoginForm, LoginMode, Notice, NoticeKind, ProfileTab, Screen, SearchModal,
};

use std::collections::HashSet;

use tokio::sync::mpsc;

use crate::composer::Composer;
use crate::models::{DisplayLine, LineTheme};
use crate::session::{Session, SessionManager};
use crate::store::StoreClient;

/// The application state.
///
/// All fields are plain data; every store interaction happens in a spawned
/// task that reports back via [`AppMessage`] on `message_tx`.
pub struct App {
    /// Which screen is displayed.
    pub screen: Screen,
    /// Current session snapshot; `None` while browsing anonymously.
    pub session: Option<Session>,
    /// Data access client for the hosted store.
    pub store: StoreClient,
    /// Session provider.
    pub sessions: SessionManager,
    /// Sender for async results back into the event loop.
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Set when the user asks to quit.
    pub should_quit: bool,

    // Feed state
    /// Assembled display records for the feed, newest first.
    pub feed: Vec<DisplayLine>,
    /// True while a feed fetch is in flight.
    pub feed_loading: bool,
    /// Selected row in the feed list.
    pub feed_selected: usize,
    /// Raw date filter as entered; `None` means the unbounded feed.
    pub date_filter: Option<String>,
    /// Generation counter for stale feed result discard.
    pub feed_generation: u64,

    // Profile screen state
    pub profile_tab: ProfileTab,
    pub my_lines: Vec<DisplayLine>,
    pub bookmarked_lines: Vec<DisplayLine>,
    pub profile_loading: bool,
    pub profile_selected: usize,
    pub profile_generation: u64,
    /// Username edit buffer; `Some` while editing.
    pub username_edit: Option<String>,

    // Modals
    /// Composer wizard; `Some` while the modal is open.
    pub composer: Option<Composer>,
    /// Highlight position in the composer's theme row.
    pub theme_cursor: usize,
    /// Search-by-date modal.
    pub search: SearchModal,
    /// Login form state.
    pub login: LoginForm,

    /// Transient notice, if any.
    pub notice: Option<Notice>,
    /// Line ids with a like/bookmark toggle in flight (controls disabled).
    pub toggles_in_flight: HashSet<String>,
    /// True while a composed line is being posted.
    pub posting: bool,
}

impl App {
    /// Create the application state.
    pub fn new(
        store: StoreClient,
        sessions: SessionManager,
        message_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            screen: Screen::default(),
            session: None,
            store,
            sessions,
            message_tx,
            should_quit: false,
            feed: Vec::new(),
            feed_loading: false,
            feed_selected: 0,
            date_filter: None,
            feed_generation: 0,
            profile_tab: ProfileTab::default(),
            my_lines: Vec::new(),
            bookmarked_lines: Vec::new(),
            profile_loading: false,
            profile_selected: 0,
            profile_generation: 0,
            username_edit: None,
            composer: None,
            theme_cursor: 0,
            search: SearchModal::default(),
            login: LoginForm::default(),
            notice: None,
            toggles_in_flight: HashSet::new(),
            posting: false,
        }
    }

    /// The signed-in viewer's id, if any.
    pub fn viewer_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.user_id.as_str())
    }

    /// Whether the viewer is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the viewer's account carries the premium flag.
    pub fn is_premium(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_premium)
    }

    /// The list the current screen's selection refers to.
    pub fn visible_lines(&self) -> &[DisplayLine] {
        match self.screen {
            Screen::Profile => match self.profile_tab {
                ProfileTab::MyLines => &self.my_lines,
                ProfileTab::Bookmarks => &self.bookmarked_lines,
            },
            _ => &self.feed,
        }
    }

    /// The display record the selection points at.
    pub fn selected_line(&self) -> Option<&DisplayLine> {
        let index = match self.screen {
            Screen::Profile => self.profile_selected,
            _ => self.feed_selected,
        };
        self.visible_lines().get(index)
    }

    /// Show a transient notice, replacing any current one.
    pub fn show_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    /// The theme currently highlighted in the composer's theme row.
    pub fn highlighted_theme(&self) -> LineTheme {
        LineTheme::ALL[self.theme_cursor % LineTheme::ALL.len()]
    }

    /// Periodic upkeep: expire the notice.
    pub fn tick(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_expired) {
            self.notice = None;
        }
    }

    fn clamp_selections(&mut self) {
        if self.feed_selected >= self.feed.len() {
            self.feed_selected = self.feed.len().saturating_sub(1);
        }
        let visible = match self.profile_tab {
            ProfileTab::MyLines => self.my_lines.len(),
            ProfileTab::Bookmarks => self.bookmarked_lines.len(),
        };
        if self.profile_selected >= visible {
            self.profile_selected = visible.saturating_sub(1);
        }
    }
}
