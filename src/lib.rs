//! The rule modifier node of an opening-hours style rule language.
//!
//! A [`RuleModifier`] qualifies a parsed rule with an optional state
//! ([`ModifierKind`]: `open`, `closed`, `off`, `unknown`) and an optional
//! free-text comment. The parser builds one per rule clause from tokens it has
//! already isolated; serializers read it back through its `Display` form.
//!
//! ```
//! use ohrule::{Element, ModifierKind, RuleModifier};
//!
//! let mut modifier = RuleModifier::new();
//! modifier.set_kind_text(Some("closed"))?;
//! modifier.set_comment(Some("public holiday".to_owned()));
//!
//! assert_eq!(modifier.kind(), Some(ModifierKind::Closed));
//! assert_eq!(modifier.render(), r#"closed "public holiday""#);
//! # Ok::<(), ohrule::ModifierError>(())
//! ```

pub mod i18n;
mod types;

pub use types::{Element, ModifierError, ModifierKind, RuleModifier};
