//! Errors surfaced by member lookup.
//!
//! Every failure is terminal for the immediate caller. Nothing here is
//! retried, and a failed lookup never leaves state behind in the registry.

use thiserror::Error;

/// Coarse classification of an [`EnumError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnknownMember,
    InvalidMember,
    CopyNotAllowed,
    PersistenceNotAllowed,
    Resolution,
    BadCall,
}

#[derive(Debug, Error)]
pub enum EnumError {
    /// No constant, field or method backs the requested name.
    #[error("{requested} is not an enum member of {class}.")]
    UnknownMember {
        /// The name as the caller spelled it, before normalization.
        requested: String,
        class: &'static str,
    },

    /// The name is reserved, or the supplied member belongs to another class.
    #[error("{subject} is not an enum member of {class}.")]
    InvalidMember { subject: String, class: &'static str },

    #[error("Enum member {class}::{name} is not cloneable.")]
    CopyNotAllowed { class: &'static str, name: String },

    #[error("Enum member {class}::{name} is not serializable.")]
    PersistenceNotAllowed { class: &'static str, name: String },

    /// The backing declaration exists but failed to produce a value.
    #[error("failed to resolve {name} of {class}: {source}")]
    Resolution {
        class: &'static str,
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// A call-style lookup failed. Carries the same message as the
    /// underlying lookup error.
    #[error("{source}")]
    BadCall {
        #[source]
        source: Box<EnumError>,
    },
}

impl EnumError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnumError::UnknownMember { .. } => ErrorKind::UnknownMember,
            EnumError::InvalidMember { .. } => ErrorKind::InvalidMember,
            EnumError::CopyNotAllowed { .. } => ErrorKind::CopyNotAllowed,
            EnumError::PersistenceNotAllowed { .. } => ErrorKind::PersistenceNotAllowed,
            EnumError::Resolution { .. } => ErrorKind::Resolution,
            EnumError::BadCall { .. } => ErrorKind::BadCall,
        }
    }

    pub(crate) fn unknown(requested: &str, class: &'static str) -> Self {
        EnumError::UnknownMember {
            requested: requested.to_string(),
            class,
        }
    }

    pub(crate) fn invalid_name(name: &str, class: &'static str) -> Self {
        EnumError::InvalidMember {
            subject: name.to_string(),
            class,
        }
    }

    pub(crate) fn foreign_instance(class: &'static str) -> Self {
        EnumError::InvalidMember {
            subject: "Instance".to_string(),
            class,
        }
    }

    /// Wrap a lookup failure as a call-style failure.
    pub(crate) fn into_bad_call(self) -> Self {
        match self {
            err @ (EnumError::UnknownMember { .. } | EnumError::InvalidMember { .. }) => {
                EnumError::BadCall {
                    source: Box::new(err),
                }
            }
            other => other,
        }
    }
}
