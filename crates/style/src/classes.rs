//! The ordered set of style tags attached to a rendered path.

use crate::StyleError;
use std::fmt;

/// An ordered, non-empty set of class names such as `["stroke", "fill-2"]`.
///
/// Insertion order is kept (it is the order the renderer writes them in);
/// repeated names are dropped after their first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassSet {
    classes: Vec<String>,
}

impl ClassSet {
    pub fn new<I, S>(classes: I) -> Result<Self, StyleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for class in classes {
            let class = class.into();
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(StyleError::InvalidClassName(class));
            }
            if !unique.contains(&class) {
                unique.push(class);
            }
        }
        if unique.is_empty() {
            return Err(StyleError::EmptyClassSet);
        }
        Ok(Self { classes: unique })
    }

    pub fn single(class: impl Into<String>) -> Result<Self, StyleError> {
        Self::new([class.into()])
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}
