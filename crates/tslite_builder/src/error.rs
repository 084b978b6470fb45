//! Errors raised while assembling the tree.

use thiserror::Error;
use tslite_ast::NodeKind;
use tslite_diagnostics::{messages, Diagnostic};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("missing required name for {node}")]
    MissingName { node: NodeKind },

    #[error("object entry is missing its key")]
    MissingKey,

    #[error("classic for header has both an update expression and an increment/decrement")]
    ConflictingForUpdate,

    #[error("classic for header has no update")]
    MissingForUpdate,

    #[error("a {found} semantic value cannot build {expected}")]
    UnexpectedValue { expected: NodeKind, found: &'static str },

    #[error("union type with no members")]
    EmptyUnion,

    #[error("parse aborted: {0}")]
    Aborted(String),
}

impl BuildError {
    /// The diagnostic reported for this error.
    pub fn diagnostic(&self) -> Diagnostic {
        match self {
            BuildError::MissingName { node } => {
                Diagnostic::new(&messages::MISSING_NAME_FOR_0, &[node.name()])
            }
            BuildError::MissingKey => Diagnostic::new(&messages::MISSING_KEY_FOR_OBJECT_ENTRY, &[]),
            BuildError::ConflictingForUpdate => {
                Diagnostic::new(&messages::CLASSIC_FOR_HAS_TWO_UPDATES, &[])
            }
            BuildError::MissingForUpdate => {
                Diagnostic::new(&messages::CLASSIC_FOR_HAS_NO_UPDATE, &[])
            }
            BuildError::UnexpectedValue { expected, found } => Diagnostic::new(
                &messages::UNEXPECTED_SEMANTIC_VALUE_0_FOR_1,
                &[*found, expected.name()],
            ),
            BuildError::EmptyUnion => Diagnostic::new(&messages::UNION_TYPE_REQUIRES_MEMBERS, &[]),
            BuildError::Aborted(reason) => {
                Diagnostic::new(&messages::PARSE_ABORTED_0, &[reason.as_str()])
            }
        }
    }
}

pub type BuildResult<T> = Result<T, BuildError>;
