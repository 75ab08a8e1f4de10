//! Line themes and the premium gate.

use serde::{Deserialize, Deserializer, Serialize};

/// Named visual treatment applied to a line's rendering.
///
/// `Default` is free; every other theme requires a premium account. The gate
/// here is a client-side convenience only; the hosted store is the
/// authority on whether a write is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum LineTheme {
    #[default]
    Default,
    Sunset,
    Ocean,
    Forest,
    Royal,
    Fire,
}

impl LineTheme {
    /// All themes, in display order.
    pub const ALL: [LineTheme; 6] = [
        LineTheme::Default,
        LineTheme::Sunset,
        LineTheme::Ocean,
        LineTheme::Forest,
        LineTheme::Royal,
        LineTheme::Fire,
    ];

    /// Display name, identical to the wire value.
    pub fn name(&self) -> &'static str {
        match self {
            LineTheme::Default => "Default",
            LineTheme::Sunset => "Sunset",
            LineTheme::Ocean => "Ocean",
            LineTheme::Forest => "Forest",
            LineTheme::Royal => "Royal",
            LineTheme::Fire => "Fire",
        }
    }

    /// Whether this theme is locked behind the premium flag.
    pub fn is_premium_only(&self) -> bool {
        !matches!(self, LineTheme::Default)
    }

    /// Parse a wire value; unknown names fall back to `Default`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Sunset" => LineTheme::Sunset,
            "Ocean" => LineTheme::Ocean,
            "Forest" => LineTheme::Forest,
            "Royal" => LineTheme::Royal,
            "Fire" => LineTheme::Fire,
            _ => LineTheme::Default,
        }
    }
}

// Unknown wire values map to `Default` instead of failing the whole row.
impl<'de> Deserialize<'de> for LineTheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(LineTheme::from_name(&name))
    }
}

impl std::fmt::Display for LineTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
