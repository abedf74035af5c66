// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

// Error types for metadata tree operations

use crate::schema::EntityKind;
use crate::value::ValueType;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the metadata store.
///
/// Absence of a node or a value is never an error: it is reported as `None`.
/// Only the root type guard fires on the typed accessor paths; the remaining
/// variants are caller mistakes on the untyped `get_field`/`set_field` API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("This metadata store accepts root nodes of type {expected}, got {found}")]
    RootTypeMismatch {
        expected: EntityKind,
        found: EntityKind,
    },

    #[error("{kind} needs {expected} index(es), got {found}")]
    PathArity {
        kind: EntityKind,
        expected: usize,
        found: usize,
    },

    #[error("{field} holds {expected} values, got {found}")]
    ValueType {
        field: String,
        expected: ValueType,
        found: ValueType,
    },

    #[error("{field} is not a reference field")]
    NotAReference { field: String },

    #[error("Unknown field {name} on {kind}")]
    UnknownField { kind: EntityKind, name: String },

    #[error("Unknown entity type: {0}")]
    UnknownEntity(String),

    #[error("Unknown schema version: {0}")]
    UnknownVersion(String),

    #[error("Invalid store configuration: {0}")]
    Config(#[from] serde_yaml_ng::Error),
}

impl Error {
    pub fn root_type_mismatch(found: EntityKind) -> Self {
        Error::RootTypeMismatch {
            expected: EntityKind::Ome,
            found,
        }
    }

    pub fn path_arity(kind: EntityKind, found: usize) -> Self {
        Error::PathArity {
            kind,
            expected: kind.depth(),
            found,
        }
    }

    pub fn unknown_field<S: AsRef<str>>(kind: EntityKind, name: S) -> Self {
        Error::UnknownField {
            kind,
            name: name.as_ref().into(),
        }
    }
}
