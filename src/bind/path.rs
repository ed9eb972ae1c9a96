//! Key paths and binding errors.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a validator's configuration section.
///
/// Displays as `key`, `key[1].subkey`, and so on. The section root itself
/// displays as `<section>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<Segment>,
}

impl KeyPath {
    /// The root of a configuration section.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend this path with a mapping key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.into()));
        Self { segments }
    }

    /// Extend this path with a sequence index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    /// Whether this path points at the section root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "<section>");
        }
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => write!(f, "{}", key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Failure to bind a configuration section onto a typed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    /// The section names a key the configuration type does not declare.
    #[error("unknown key `{path}`")]
    UnknownKey { path: KeyPath },

    /// The value's shape does not fit the field (e.g. a mapping on a string field).
    #[error("`{path}` expects a {expected}, found a {found}")]
    TypeMismatch {
        path: KeyPath,
        expected: &'static str,
        found: &'static str,
    },

    /// A scalar could not be converted to the field's scalar type.
    #[error("`{path}` cannot read {value:?} as {expected}: {reason}")]
    InvalidScalar {
        path: KeyPath,
        value: String,
        expected: &'static str,
        reason: String,
    },
}

impl BindError {
    pub fn unknown_key(path: &KeyPath) -> Self {
        BindError::UnknownKey { path: path.clone() }
    }

    pub fn mismatch(path: &KeyPath, expected: &'static str, found: &'static str) -> Self {
        BindError::TypeMismatch {
            path: path.clone(),
            expected,
            found,
        }
    }

    pub fn invalid_scalar(
        path: &KeyPath,
        value: &str,
        expected: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        BindError::InvalidScalar {
            path: path.clone(),
            value: value.to_string(),
            expected,
            reason: reason.into(),
        }
    }

    /// The offending key path.
    pub fn path(&self) -> &KeyPath {
        match self {
            BindError::UnknownKey { path }
            | BindError::TypeMismatch { path, .. }
            | BindError::InvalidScalar { path, .. } => path,
        }
    }
}
