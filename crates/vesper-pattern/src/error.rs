use std::fmt;

/// A malformed `#rrggbb` color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
}

impl ColorParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self { input: input.into() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: expected #rrggbb", self.input)
    }
}

impl std::error::Error for ColorParseError {}

/// A shape or style identifier that is not part of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNameError {
    /// `"shape"` or `"style"`.
    pub kind: &'static str,
    pub name: String,
}

impl UnknownNameError {
    pub(crate) fn new(kind: &'static str, name: impl Into<String>) -> Self {
        Self { kind, name: name.into() }
    }
}

impl fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} {:?}", self.kind, self.name)
    }
}

impl std::error::Error for UnknownNameError {}
