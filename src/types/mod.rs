mod element;
mod error;
mod modifier_kind;
mod rule_modifier;

pub use element::Element;
pub use error::ModifierError;
pub use modifier_kind::ModifierKind;
pub use rule_modifier::RuleModifier;
