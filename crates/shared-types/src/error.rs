use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a single inline style declaration was rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum StyleErrorKind {
    /// The declaration has no `:` separating property from value.
    MissingColon,
    EmptyProperty,
    EmptyValue,
}

impl fmt::Display for StyleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleErrorKind::MissingColon => write!(f, "missing ':' separator"),
            StyleErrorKind::EmptyProperty => write!(f, "empty property name"),
            StyleErrorKind::EmptyValue => write!(f, "empty value"),
        }
    }
}

/// Error returned when parsing an inline style string such as
/// `"border: 1px solid; padding: 15px"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StyleError {
    pub kind: StyleErrorKind,
    /// The offending declaration, trimmed.
    pub declaration: String,
}

impl StyleError {
    pub fn new(kind: StyleErrorKind, declaration: impl Into<String>) -> Self {
        Self {
            kind,
            declaration: declaration.into(),
        }
    }
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid style declaration `{}`: {}",
            self.declaration, self.kind
        )
    }
}

impl std::error::Error for StyleError {}
