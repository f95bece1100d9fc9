//! Annotation text payload

use alloc::string::String;
use core::fmt;

/// Descriptive text attached to a tour, waypoint, or leg
///
/// Opaque to the controller; only the presentation layer interprets it.
/// The default annotation is empty and marks legs the author never described.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Annotation(String);

impl Annotation {
    /// Create an annotation from text
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Annotation text
    pub fn text(&self) -> &str {
        &self.0
    }

    /// Check if this is the default (empty) annotation
    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Annotation {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Annotation {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let ann = Annotation::default();
        assert!(ann.is_default());
        assert_eq!(ann.text(), "");
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Annotation::from("Royal Mile"), Annotation::new("Royal Mile"));
        assert_eq!(
            Annotation::from(String::from("Royal Mile")).to_string(),
            "Royal Mile"
        );
        assert!(!Annotation::new("x").is_default());
    }
}
