//! Ordered inline style declarations.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// An ordered set of CSS declarations rendered into a `style` attribute.
///
/// Setting a property that is already present replaces its value in place, so
/// later layers (size, then variant, then state) override earlier ones the same
/// way a cascade would.
pub struct InlineStyle {
    rules: Vec<(&'static str, String)>,
}

impl InlineStyle {
    /// Creates an empty declaration list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property` to `value`, replacing any earlier declaration.
    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.rules.iter_mut().find(|(name, _)| *name == property) {
            Some((_, existing)) => *existing = value,
            None => self.rules.push((property, value)),
        }
        self
    }

    /// Applies every declaration of `layer` on top of `self`.
    pub fn merge(self, layer: InlineStyle) -> Self {
        layer
            .rules
            .into_iter()
            .fold(self, |style, (property, value)| style.set(property, value))
    }

    /// Returns the value declared for `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no declarations are present.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (property, value)) in self.rules.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{property}: {value};")?;
        }
        Ok(())
    }
}
