//! tslite_builder: assembles the AST from grammar reductions.
//!
//! [`AstBuilder`] exposes one semantic action per node kind. A
//! [`Grammar`] implementation drives it over a token stream, and
//! [`CompilationUnit`] ties a grammar run to program finalization and the
//! diagnostics it produced.

pub mod builder;
mod declarations;
pub mod error;
mod expressions;
mod statements;
pub mod unit;

pub use builder::{AstBuilder, FinalizedProgram};
pub use error::{BuildError, BuildResult};
pub use unit::{CompilationUnit, FrontendOutcome, Grammar};
