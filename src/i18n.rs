//! Message translation for user-facing error text.
//!
//! The crate never formats localized messages on its own. Errors carry a
//! message key plus positional arguments, and a [`Translate`] implementation
//! supplied by the host turns them into text. [`English`] is the built-in
//! fallback catalog.

/// Key for a modifier token that is not one of the canonical spellings.
/// Takes the offending token as its single argument.
pub const INVALID_MODIFIER: &str = "invalid_modifier";

/// Turns a message key and its positional arguments into display text.
///
/// Any `Fn(&str, &[&str]) -> String` closure implements this trait, so a
/// catalog can be injected without defining a type.
pub trait Translate {
    fn translate(&self, key: &str, args: &[&str]) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &[&str]) -> String,
{
    fn translate(&self, key: &str, args: &[&str]) -> String {
        self(key, args)
    }
}

/// Built-in English messages.
///
/// Wording matches the `Display` output of the corresponding error, so an
/// untranslated message reads the same either way. Unknown keys render as the
/// key itself.
#[derive(Debug, Default, Clone, Copy)]
pub struct English;

impl English {
    fn template(key: &str) -> Option<&'static str> {
        match key {
            INVALID_MODIFIER => Some("invalid modifier '{0}'"),
            _ => None,
        }
    }
}

impl Translate for English {
    fn translate(&self, key: &str, args: &[&str]) -> String {
        match Self::template(key) {
            Some(template) => substitute(template, args),
            None => key.to_owned(),
        }
    }
}

/// Replace `{N}` placeholders with `args[N]` in a single pass.
///
/// Argument text is inserted verbatim, so placeholder syntax inside an
/// argument is never expanded. Placeholders without a matching argument are
/// left as written.
pub(crate) fn substitute(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let arg = after[..close]
            .parse::<usize>()
            .ok()
            .and_then(|i| args.get(i));
        match arg {
            Some(arg) => out.push_str(arg),
            None => out.push_str(&rest[open..=open + 1 + close]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}
