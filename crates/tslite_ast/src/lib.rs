//! tslite_ast: Abstract Syntax Tree definitions for the tslite front end.
//!
//! This crate defines the node model, the generic [`Chain`] every sequence
//! is built from, the type tags recorded on bindings, and the teardown layer
//! ([`Releaser`]) that takes owned subtrees apart.

pub mod chain;
pub mod fragment;
pub mod generated;
pub mod node;
pub mod node_kind;
pub mod release;
pub mod types;
pub mod visitor;

// Re-export key types
pub use chain::{Chain, Link};
pub use fragment::Fragment;
pub use generated::{ExpressionKind, FactorKind, InitializerKind};
pub use node::*;
pub use node_kind::{NodeKind, StatementKind};
pub use release::{ReleaseLedger, Releaser};
pub use types::*;
pub use visitor::AstVisitor;
