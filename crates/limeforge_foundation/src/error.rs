//! Error types for the Limeforge pipeline.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use thiserror::Error;

use crate::entity::EntityKey;

/// Result alias for Limeforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Limeforge operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown class error.
    #[must_use]
    pub fn unknown_class(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownClass(name.into()))
    }

    /// Creates a duplicate class registration error.
    #[must_use]
    pub fn duplicate_class(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateClass(name.into()))
    }

    /// Creates an unknown node kind error.
    #[must_use]
    pub fn unknown_kind(class: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownKind(class.into()))
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(key: EntityKey) -> Self {
        Self::new(ErrorKind::EntityNotFound(key))
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(class: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingField {
            class: class.into(),
            field: field.into(),
        })
    }

    /// Creates a missing required reference error.
    #[must_use]
    pub fn missing_reference(class: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingReference {
            class: class.into(),
            field: field.into(),
        })
    }

    /// Creates a parent rewire error.
    #[must_use]
    pub fn parent_rewire(class: impl Into<String>, field: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParentRewire {
            class: class.into(),
            field: field.into(),
        })
    }

    /// Creates an unhandled node kind error.
    #[must_use]
    pub fn unhandled_kind(kind: impl Into<String>, visitor: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnhandledKind {
            kind: kind.into(),
            visitor: visitor.into(),
        })
    }

    /// Creates an unsupported body kind error.
    #[must_use]
    pub fn unsupported_body_kind(kind: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedBodyKind(kind.into()))
    }

    /// Creates an invalid signature error.
    #[must_use]
    pub fn invalid_signature(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSignature(detail.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Class name is not present in the schema registry.
    #[error("unknown class: {0}")]
    UnknownClass(String),

    /// Class name was registered twice.
    #[error("duplicate class registration: {0}")]
    DuplicateClass(String),

    /// Class name has no corresponding IR node kind.
    #[error("no node kind for class: {0}")]
    UnknownKind(String),

    /// Entity was not found in the graph.
    #[error("entity not found: {0:?}")]
    EntityNotFound(EntityKey),

    /// Expected field is absent from a node or entity.
    #[error("missing field: {field} on {class}")]
    MissingField {
        /// The class or node kind that was queried.
        class: String,
        /// The field name that was not found.
        field: String,
    },

    /// Required reference field is unset.
    #[error("missing required reference: {field} on {class}")]
    MissingReference {
        /// The class or node kind owning the reference.
        class: String,
        /// The unset reference field.
        field: String,
    },

    /// Attempt to rewire a parent back-reference after insertion.
    ///
    /// Parent fields drive children indexing and must be supplied when the
    /// entity is inserted.
    #[error("cannot rewire parent field {field} on {class}")]
    ParentRewire {
        /// The class owning the parent field.
        class: String,
        /// The parent back-reference field.
        field: String,
    },

    /// A visitor received a node kind it has no handler for.
    ///
    /// Surfaced by the dispatcher's default handler; treated as a
    /// configuration defect, never silently dropped.
    #[error("{visitor} has no handler for node kind {kind}")]
    UnhandledKind {
        /// The unrecognized node kind.
        kind: String,
        /// The visitor that rejected it.
        visitor: String,
    },

    /// Method body kind other than `raw`.
    #[error("unsupported body kind: {0}")]
    UnsupportedBodyKind(String),

    /// Method signature is not an ordered list of parameter names.
    #[error("invalid method signature: {0}")]
    InvalidSignature(String),
}
