//! Discriminant helpers for the tagged AST nodes.

use crate::node::*;
use crate::node_kind::{NodeKind, StatementKind};

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Declaration(_) => StatementKind::Declaration,
            Statement::Variable(_) => StatementKind::Variable,
            Statement::Assignment(_) => StatementKind::Assignment,
            Statement::Expression(_) => StatementKind::Expression,
            Statement::IncDec(_) => StatementKind::IncDec,
            Statement::If(_) => StatementKind::If,
            Statement::For(_) => StatementKind::For,
            Statement::While(_) => StatementKind::While,
            Statement::Switch(_) => StatementKind::Switch,
            Statement::FunctionCall(_) => StatementKind::FunctionCall,
            Statement::FunctionDeclaration(_) => StatementKind::FunctionDeclaration,
            Statement::ArrowFunction(_) => StatementKind::ArrowFunction,
            Statement::AsyncFunction(_) => StatementKind::AsyncFunction,
            Statement::TypeDeclaration(_) => StatementKind::TypeDeclaration,
            Statement::Return(_) => StatementKind::Return,
        }
    }

    /// The node kind of the wrapped payload.
    pub fn payload_kind(&self) -> NodeKind {
        self.kind().node_kind()
    }
}

/// The discriminant of an [`Expression`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    Binary,
    Unary,
    Factor,
}

impl Expression {
    pub fn kind(&self) -> ExpressionKind {
        match self {
            Expression::Binary(_) => ExpressionKind::Binary,
            Expression::Unary(_) => ExpressionKind::Unary,
            Expression::Factor(_) => ExpressionKind::Factor,
        }
    }

    pub fn as_factor(&self) -> Option<&Factor> {
        match self {
            Expression::Factor(f) => Some(f),
            _ => None,
        }
    }

    /// Number of direct sub-expressions.
    pub fn arity(&self) -> usize {
        match self {
            Expression::Binary(_) => 2,
            Expression::Unary(_) => 1,
            Expression::Factor(_) => 0,
        }
    }
}

/// The discriminant of a [`Factor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    Constant,
    Identifier,
    Parenthesized,
    Call,
}

impl Factor {
    pub fn kind(&self) -> FactorKind {
        match self {
            Factor::Constant(_) => FactorKind::Constant,
            Factor::Identifier(_) => FactorKind::Identifier,
            Factor::Parenthesized(_) => FactorKind::Parenthesized,
            Factor::Call(_) => FactorKind::Call,
        }
    }
}

/// The discriminant of an [`Initializer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitializerKind {
    Expression,
    Array,
    Object,
    Call,
    Arrow,
    Uninitialized,
}

impl Initializer {
    pub fn kind(&self) -> InitializerKind {
        match self {
            Initializer::Expression(_) => InitializerKind::Expression,
            Initializer::Array(_) => InitializerKind::Array,
            Initializer::Object(_) => InitializerKind::Object,
            Initializer::Call(_) => InitializerKind::Call,
            Initializer::Arrow(_) => InitializerKind::Arrow,
            Initializer::Uninitialized => InitializerKind::Uninitialized,
        }
    }
}

impl ParamsFor {
    pub fn is_for_of(&self) -> bool {
        matches!(self, ParamsFor::ForOf(_))
    }

    /// The declaration introduced by the loop header.
    pub fn binding(&self) -> &Declaration {
        match self {
            ParamsFor::Classic(c) => &c.init,
            ParamsFor::ForOf(f) => &f.binding,
        }
    }
}
