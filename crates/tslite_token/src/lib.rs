//! tslite_token: the token stream contract between the tokenizer and the
//! grammar engine.
//!
//! The tokenizer itself lives outside this workspace. This crate defines what
//! it produces (classified [`Token`]s carrying a [`SemanticValue`]), how raw
//! lexeme text becomes a token, and the [`TokenSource`] / [`ContextDepth`]
//! traits a grammar engine consumes.

pub mod source;
pub mod token;

pub use source::{ContextDepth, TokenBuffer, TokenSource};
pub use token::{type_tag_from_lexeme, SemanticValue, Token, TokenError, TokenKind};
