//! Data models: wire rows from the hosted store and derived display types.

pub mod line;
pub mod profile;
pub mod theme;

pub use line::{
    BookmarkRow, DisplayLine, EmbeddedProfile, LineRow, MembershipLineId, MembershipPair, NewLine,
    UNKNOWN_AUTHOR,
};
pub use profile::{Profile, ProfileUpdate};
pub use theme::LineTheme;
