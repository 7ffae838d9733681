//! Namespaced identifiers used as stable names by the item and enchantment registries.

use std::str::FromStr;
use std::fmt;


/// The namespace used when an identifier is written without one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";


/// A `namespace:path` identifier, such as `minecraft:sharpness`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {

    /// Create an identifier from its parts, checking their characters.
    pub fn new(namespace: &str, path: &str) -> Result<Self, IdentifierError> {

        if namespace.is_empty() {
            return Err(IdentifierError::EmptyNamespace);
        } else if path.is_empty() {
            return Err(IdentifierError::EmptyPath);
        }

        if let Some(c) = namespace.chars().find(|&c| !is_namespace_char(c)) {
            return Err(IdentifierError::InvalidNamespace(c));
        }

        if let Some(c) = path.chars().find(|&c| !is_path_char(c)) {
            return Err(IdentifierError::InvalidPath(c));
        }

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })

    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Return true if this identifier renders exactly as the given full name.
    pub fn matches(&self, full_name: &str) -> bool {
        match full_name.split_once(':') {
            Some((namespace, path)) => self.namespace == namespace && self.path == path,
            None => false,
        }
    }

}

impl FromStr for Identifier {

    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, s),
        }
    }

}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}


#[inline]
fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

#[inline]
fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}


/// Error returned when parsing an invalid identifier.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("empty namespace")]
    EmptyNamespace,
    #[error("empty path")]
    EmptyPath,
    #[error("illegal character {0:?} in namespace")]
    InvalidNamespace(char),
    #[error("illegal character {0:?} in path")]
    InvalidPath(char),
}
