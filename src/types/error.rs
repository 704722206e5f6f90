use thiserror::Error;

use crate::i18n::{Translate, INVALID_MODIFIER};

/// Errors raised while building a [`RuleModifier`](super::RuleModifier) from raw tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModifierError {
    #[error("invalid modifier '{token}'")]
    InvalidModifier { token: String },
}

impl ModifierError {
    pub(crate) fn invalid_modifier(token: impl Into<String>) -> Self {
        Self::InvalidModifier {
            token: token.into(),
        }
    }

    /// The message key used to look this error up in a translation catalog.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidModifier { .. } => INVALID_MODIFIER,
        }
    }

    /// The raw token that was rejected, exactly as it was passed in.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::InvalidModifier { token } => token,
        }
    }

    /// Render a human-readable message through the supplied translator.
    ///
    /// The translator receives [`message_key()`](Self::message_key) and the
    /// offending token as its only argument.
    pub fn localized(&self, translator: &impl Translate) -> String {
        translator.translate(self.message_key(), &[self.token()])
    }
}
