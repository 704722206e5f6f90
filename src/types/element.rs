use std::fmt;

/// Common contract for nodes produced by the rule parser.
///
/// The `Display` implementation is the node's canonical text form, the one a
/// serializer writes back when reconstituting a rule sequence.
pub trait Element: fmt::Display {
    /// An independent structural copy. Mutating the copy never affects `self`.
    #[must_use]
    fn copy(&self) -> Self
    where
        Self: Sized;

    /// The canonical text form.
    fn render(&self) -> String {
        self.to_string()
    }
}
