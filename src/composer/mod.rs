//! Composer state machine.
//!
//! An explicit two-step wizard with guarded transitions:
//!
//! ```text
//! EditingText -> ChoosingTheme -> Submitting -> (closed)
//!      ^              ^   |            |
//!      |              |   +-- back ----+-- failure returns to ChoosingTheme
//!      +---- close resets everything
//! ```
//!
//! The text step is gated on an authenticated viewer and non-empty trimmed
//! text. The theme step applies the premium gate. Closing from any state
//! resets text, theme, and step.

use crate::error::{OneLineError, OneLineResult};
use crate::models::LineTheme;

/// Hard cap on line text length, in characters.
pub const CHARACTER_LIMIT: usize = 150;

/// Which step of the wizard is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComposerStep {
    #[default]
    EditingText,
    ChoosingTheme,
    Submitting,
}

/// The composer wizard state.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    step: ComposerStep,
    text: String,
    theme: LineTheme,
}

impl Composer {
    /// A fresh composer at the text step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    pub fn step(&self) -> ComposerStep {
        self.step
    }

    /// Current text buffer.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Currently selected theme.
    pub fn theme(&self) -> LineTheme {
        self.theme
    }

    /// Remaining characters under the hard cap. Derived, never stored.
    pub fn remaining_chars(&self) -> usize {
        CHARACTER_LIMIT.saturating_sub(self.text.chars().count())
    }

    /// Append a character, ignored once the cap is reached or while a
    /// submit is in flight.
    pub fn push_char(&mut self, c: char) {
        if self.step == ComposerStep::Submitting {
            return;
        }
        if self.text.chars().count() < CHARACTER_LIMIT {
            self.text.push(c);
        }
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        if self.step == ComposerStep::Submitting {
            return;
        }
        self.text.pop();
    }

    /// Guarded transition `EditingText -> ChoosingTheme`.
    ///
    /// Rejected when the viewer is not signed in or the trimmed text is
    /// empty; the step does not change in either case.
    pub fn advance(&mut self, signed_in: bool) -> OneLineResult<()> {
        if self.step != ComposerStep::EditingText {
            return Ok(());
        }
        if !signed_in {
            return Err(OneLineError::AuthRequired {
                action: "post a line",
            });
        }
        if self.text.trim().is_empty() {
            return Err(OneLineError::validation("Write something first."));
        }
        self.step = ComposerStep::ChoosingTheme;
        Ok(())
    }

    /// Back from the theme step to the text step.
    pub fn back(&mut self) {
        if self.step == ComposerStep::ChoosingTheme {
            self.step = ComposerStep::EditingText;
        }
    }

    /// Apply the premium gate and select a theme.
    ///
    /// Selecting a premium-only theme without the premium flag is rejected
    /// and the selection is not applied. This is a client-side convenience
    /// gate; the hosted store remains the authority on write legality.
    pub fn select_theme(&mut self, theme: LineTheme, is_premium: bool) -> OneLineResult<()> {
        if theme.is_premium_only() && !is_premium {
            return Err(OneLineError::validation(
                "Upgrade to Premium to unlock custom themes!",
            ));
        }
        self.theme = theme;
        Ok(())
    }

    /// Guarded transition `ChoosingTheme -> Submitting`.
    ///
    /// Returns the trimmed text and theme to post. The caller reports the
    /// outcome via [`Composer::submit_failed`] or [`Composer::reset`].
    pub fn begin_submit(&mut self) -> OneLineResult<(String, LineTheme)> {
        match self.step {
            ComposerStep::ChoosingTheme => {
                self.step = ComposerStep::Submitting;
                Ok((self.text.trim().to_string(), self.theme))
            }
            ComposerStep::Submitting => Err(OneLineError::validation("Already posting.")),
            ComposerStep::EditingText => Err(OneLineError::validation("Choose a theme first.")),
        }
    }

    /// A submit failed: stay at the theme step so the user can retry.
    pub fn submit_failed(&mut self) {
        if self.step == ComposerStep::Submitting {
            self.step = ComposerStep::ChoosingTheme;
        }
    }

    /// Close or finish: reset text, theme, and step.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
