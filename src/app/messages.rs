//! AppMessage enum for async communication within the application.
//!
//! Every spawned store operation reports back through one of these. Fetch
//! results carry the generation they were started under so stale results
//! can be discarded instead of applied.

use crate::error::OneLineError;
use crate::models::DisplayLine;
use crate::session::Session;

/// Messages received from async operations.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Startup session restore finished.
    SessionRestored { session: Option<Session> },
    /// Sign-in or sign-up finished.
    AuthFinished { result: Result<Session, OneLineError> },
    /// The feed fetch + assembly finished.
    FeedLoaded {
        generation: u64,
        result: Result<Vec<DisplayLine>, OneLineError>,
    },
    /// The profile screen's data (own lines + bookmarks) finished loading.
    ProfileDataLoaded {
        generation: u64,
        result: Result<ProfileData, OneLineError>,
    },
    /// A like or bookmark toggle finished.
    ToggleFinished {
        line_id: String,
        result: Result<(), OneLineError>,
    },
    /// The composer's line creation finished.
    LinePosted { result: Result<(), OneLineError> },
    /// A profile update (username or premium flag) finished.
    ProfileUpdated {
        context: ProfileUpdateContext,
        result: Result<Session, OneLineError>,
    },
}

/// Assembled records for both profile tabs.
#[derive(Debug, Clone, Default)]
pub struct ProfileData {
    pub my_lines: Vec<DisplayLine>,
    pub bookmarks: Vec<DisplayLine>,
}

/// What a profile update was for, to pick the right notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileUpdateContext {
    Username,
    PremiumUpgrade,
}
