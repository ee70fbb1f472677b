use thiserror::Error;

pub mod classes;
pub mod parsers;
pub mod stylesheet;

pub use classes::ClassSet;
pub use stylesheet::{ClassRule, LineCap, StyleRule, Stylesheet};

/// Errors from building class sets or reading stylesheets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("A class set needs at least one class")]
    EmptyClassSet,

    #[error("Invalid class name: '{0}'")]
    InvalidClassName(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown style property: '{0}'")]
    UnknownProperty(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}
