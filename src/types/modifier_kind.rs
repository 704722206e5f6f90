use std::fmt;
use std::str::FromStr;

use super::error::ModifierError;

/// The state a rule puts its time spans into.
///
/// Each variant has exactly one canonical lowercase spelling, used both when
/// reading tokens and when rendering. Ordering follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ModifierKind {
    Open,
    Closed,
    Off,
    Unknown,
}

impl ModifierKind {
    /// Every kind, in declaration order.
    pub const ALL: [ModifierKind; 4] = [
        ModifierKind::Open,
        ModifierKind::Closed,
        ModifierKind::Off,
        ModifierKind::Unknown,
    ];

    /// Look up a kind by its canonical spelling.
    ///
    /// Matching is exact: no case folding, trimming or abbreviations.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError::InvalidModifier`] carrying `token` when it is
    /// not one of `open`, `closed`, `off`, `unknown`.
    pub fn from_text(token: &str) -> Result<Self, ModifierError> {
        match token {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "off" => Ok(Self::Off),
            "unknown" => Ok(Self::Unknown),
            _ => {
                tracing::debug!(token, "rejecting modifier token");
                Err(ModifierError::invalid_modifier(token))
            }
        }
    }

    /// The canonical spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Off => "off",
            Self::Unknown => "unknown",
        }
    }

    /// All canonical spellings, in declaration order.
    #[must_use]
    pub const fn all_spellings() -> [&'static str; 4] {
        [
            Self::Open.as_str(),
            Self::Closed.as_str(),
            Self::Off.as_str(),
            Self::Unknown.as_str(),
        ]
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModifierKind {
    type Err = ModifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl TryFrom<&str> for ModifierKind {
    type Error = ModifierError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_text(value)
    }
}
