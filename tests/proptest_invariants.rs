
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use ohrule::{Element, ModifierError, ModifierKind, RuleModifier};
use proptest::prelude::*;
use strategies::{
    arb_comment, arb_invalid_token, arb_kind, arb_modifier, arb_quote_free_comment,
};

fn hash_of(m: &RuleModifier) -> u64 {
    let mut h = DefaultHasher::new();
    m.hash(&mut h);
    h.finish()
}

/// Split a rendered modifier back into kind and comment. Only valid for
/// comments without embedded quotes.
fn split_rendered(text: &str) -> (Option<&str>, Option<&str>) {
    match text.find('"') {
        None if text.is_empty() => (None, None),
        None => (Some(text), None),
        Some(0) => (None, Some(&text[1..text.len() - 1])),
        Some(q) => (Some(&text[..q - 1]), Some(&text[q + 1..text.len() - 1])),
    }
}

// ---------------------------------------------------------------------------
// Spelling round trip and rejection
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn spelling_round_trip(kind in arb_kind()) {
        prop_assert_eq!(ModifierKind::from_text(kind.as_str()), Ok(kind));
        prop_assert_eq!(kind.to_string().parse::<ModifierKind>(), Ok(kind));
    }

    #[test]
    fn non_canonical_tokens_rejected(token in arb_invalid_token()) {
        let err = ModifierKind::from_text(&token).unwrap_err();
        prop_assert_eq!(err, ModifierError::InvalidModifier { token: token.clone() });
    }

    #[test]
    fn case_variants_rejected(kind in arb_kind()) {
        let upper = kind.as_str().to_uppercase();
        prop_assert!(ModifierKind::from_text(&upper).is_err());
    }
}

// ---------------------------------------------------------------------------
// Field independence
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn setting_kind_keeps_comment(
        start in arb_modifier(),
        kind in prop::option::of(arb_kind()),
    ) {
        let mut m = start.copy();
        m.set_kind(kind);
        prop_assert_eq!(m.kind(), kind);
        prop_assert_eq!(m.comment(), start.comment());
    }

    #[test]
    fn setting_comment_keeps_kind(
        start in arb_modifier(),
        comment in prop::option::of(arb_comment()),
    ) {
        let mut m = start.copy();
        m.set_comment(comment.clone());
        prop_assert_eq!(m.comment(), comment.as_deref());
        prop_assert_eq!(m.kind(), start.kind());
    }

    #[test]
    fn failed_text_setter_is_atomic(start in arb_modifier(), token in arb_invalid_token()) {
        prop_assume!(!token.is_empty());
        let mut m = start.copy();
        prop_assert!(m.set_kind_text(Some(&token)).is_err());
        prop_assert_eq!(&m, &start);
    }
}

// ---------------------------------------------------------------------------
// Copy, equality and hashing
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn copy_equals_original(m in arb_modifier()) {
        let c = m.copy();
        prop_assert_eq!(&c, &m);
        prop_assert_eq!(hash_of(&c), hash_of(&m));
    }

    #[test]
    fn copy_shares_no_state(m in arb_modifier(), comment in arb_comment()) {
        let before = m.clone();
        let mut c = m.copy();
        c.set_comment(Some(comment));
        c.set_kind(None);
        prop_assert_eq!(&m, &before);
    }

    #[test]
    fn equal_fields_mean_equal_hash(
        kind in prop::option::of(arb_kind()),
        comment in prop::option::of(arb_comment()),
    ) {
        let mut a = RuleModifier::new();
        a.set_comment(comment.clone());
        a.set_kind(kind);

        let mut b = RuleModifier::new();
        b.set_kind(kind);
        b.set_comment(comment);

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn equality_matches_fields(a in arb_modifier(), b in arb_modifier()) {
        let fields_equal = a.kind() == b.kind() && a.comment() == b.comment();
        prop_assert_eq!(a == b, fields_equal);
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn render_is_display(m in arb_modifier()) {
        prop_assert_eq!(m.render(), m.to_string());
    }

    #[test]
    fn render_empty_iff_empty(m in arb_modifier()) {
        prop_assert_eq!(m.render().is_empty(), m.is_empty());
    }

    #[test]
    fn render_splits_back_into_fields(
        kind in prop::option::of(arb_kind()),
        comment in prop::option::of(arb_quote_free_comment()),
    ) {
        let mut m = RuleModifier::new();
        m.set_kind(kind);
        m.set_comment(comment.clone());

        let rendered = m.render();
        let (kind_text, comment_text) = split_rendered(&rendered);

        let mut rebuilt = RuleModifier::new();
        rebuilt.set_kind_text(kind_text).unwrap();
        rebuilt.set_comment(comment_text.map(str::to_owned));
        prop_assert_eq!(rebuilt, m);
    }
}
