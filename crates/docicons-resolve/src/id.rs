//! Icon identifier parsing.

use std::fmt;

use crate::error::ResolveError;

/// A parsed `prefix:name` identifier borrowing from its source string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconId<'a> {
    /// Bundle prefix (may be empty when the identifier starts with `:`).
    pub prefix: &'a str,
    /// Icon name; everything after the first colon.
    pub name: &'a str,
}

impl<'a> IconId<'a> {
    /// Split an identifier on its first colon.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MalformedIdentifier`] when there is no colon.
    pub fn parse(identifier: &'a str) -> Result<Self, ResolveError> {
        let (prefix, name) = identifier
            .split_once(':')
            .ok_or_else(|| ResolveError::MalformedIdentifier(identifier.to_owned()))?;
        Ok(Self { prefix, name })
    }
}

impl fmt::Display for IconId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.name)
    }
}
