//! Type definitions for the application state.

use std::time::Instant;

/// Represents which screen is currently active. These stand in for the web
/// routes `/`, `/login`, `/profile`, and `/settings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Feed,
    Login,
    Profile,
    Settings,
}

/// Which tab of the profile screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    MyLines,
    Bookmarks,
}

/// Severity of a transient user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A transient notice shown at the bottom of the screen.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub shown_at: Instant,
}

impl Notice {
    /// How long a notice stays on screen.
    pub const TTL_SECS: u64 = 4;

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, text)
    }

    fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    /// Whether the notice has outlived its display window.
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed().as_secs() >= Self::TTL_SECS
    }
}

/// Which login form field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
    Username,
}

/// Sign-in vs. account creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

/// State of the login screen form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub mode: LoginMode,
    pub email: String,
    pub password: String,
    /// Only used in sign-up mode.
    pub username: String,
    pub focus: LoginField,
    /// Set while a sign-in/sign-up request is in flight.
    pub in_flight: bool,
}

impl LoginForm {
    /// Move focus to the next field, skipping username in sign-in mode.
    pub fn focus_next(&mut self) {
        self.focus = match (self.focus, self.mode) {
            (LoginField::Email, _) => LoginField::Password,
            (LoginField::Password, LoginMode::SignUp) => LoginField::Username,
            (LoginField::Password, LoginMode::SignIn) => LoginField::Email,
            (LoginField::Username, _) => LoginField::Email,
        };
    }

    /// Toggle between sign-in and sign-up.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LoginMode::SignIn => LoginMode::SignUp,
            LoginMode::SignUp => LoginMode::SignIn,
        };
        if self.mode == LoginMode::SignIn && self.focus == LoginField::Username {
            self.focus = LoginField::Email;
        }
    }

    /// The buffer for the focused field.
    pub fn focused_buffer(&mut self) -> &mut String {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
            LoginField::Username => &mut self.username,
        }
    }

    /// Reset everything, including any in-flight marker.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State of the search-by-date modal.
#[derive(Debug, Clone, Default)]
pub struct SearchModal {
    pub visible: bool,
    pub input: String,
}
