use std::fmt;

use super::element::Element;
use super::error::ModifierError;
use super::modifier_kind::ModifierKind;

/// The state and optional comment attached to a rule, e.g. `closed "holiday"`.
///
/// Both fields are optional and independent of each other. A modifier with
/// neither set renders as the empty string.
///
/// Equality and hashing are structural over both fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleModifier {
    kind: Option<ModifierKind>,
    comment: Option<String>,
}

impl RuleModifier {
    /// An empty modifier with no kind and no comment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ModifierKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> Option<ModifierKind> {
        self.kind
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Replace the kind. `None` clears it.
    pub fn set_kind(&mut self, kind: impl Into<Option<ModifierKind>>) {
        self.kind = kind.into();
    }

    /// Replace the kind from a raw keyword token.
    ///
    /// `None` and the empty string clear the kind. Any other text must be a
    /// canonical spelling.
    ///
    /// # Errors
    ///
    /// Returns [`ModifierError::InvalidModifier`] for an unrecognised token.
    /// The current kind is left untouched in that case.
    pub fn set_kind_text(&mut self, text: Option<&str>) -> Result<(), ModifierError> {
        self.kind = match text {
            None | Some("") => None,
            Some(token) => Some(ModifierKind::from_text(token)?),
        };
        Ok(())
    }

    /// Replace the comment verbatim. `None` clears it.
    ///
    /// The text is stored as given: surrounding quotes must already have been
    /// stripped by the caller.
    pub fn set_comment(&mut self, comment: Option<String>) {
        self.comment = comment;
    }

    /// True when neither a kind nor a comment is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.comment.is_none()
    }
}

impl From<ModifierKind> for RuleModifier {
    fn from(kind: ModifierKind) -> Self {
        Self::new().with_kind(kind)
    }
}

// Quotes inside the comment are written as-is, so a comment containing `"`
// does not survive a render/re-parse cycle.
impl fmt::Display for RuleModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(kind) = self.kind {
            write!(f, "{kind}")?;
        }
        if let Some(comment) = &self.comment {
            if self.kind.is_some() {
                f.write_str(" ")?;
            }
            write!(f, "\"{comment}\"")?;
        }
        Ok(())
    }
}

impl Element for RuleModifier {
    fn copy(&self) -> Self {
        self.clone()
    }
}
