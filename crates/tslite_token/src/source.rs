//! The tokenizer side of the front end, seen from the grammar engine.

use std::collections::VecDeque;

use crate::token::Token;

/// Reports the tokenizer's nested-context depth. Only meaningful once the
/// token stream is exhausted; a balanced input ends at depth 0.
pub trait ContextDepth {
    fn current_context_depth(&self) -> u32;
}

/// A pull-based token stream.
pub trait TokenSource: Iterator<Item = Token> + ContextDepth {}

impl<T: Iterator<Item = Token> + ContextDepth> TokenSource for T {}

/// Replays a recorded token stream.
#[derive(Debug, Clone, Default)]
pub struct TokenBuffer {
    tokens: VecDeque<Token>,
    final_depth: u32,
}

impl TokenBuffer {
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
            final_depth: 0,
        }
    }

    /// The depth reported once every token has been consumed.
    pub fn with_context_depth(mut self, depth: u32) -> Self {
        self.final_depth = depth;
        self
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Iterator for TokenBuffer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tokens.len(), Some(self.tokens.len()))
    }
}

impl ContextDepth for TokenBuffer {
    fn current_context_depth(&self) -> u32 {
        if !self.is_exhausted() {
            log::warn!(
                "context depth queried with {} token(s) still pending",
                self.tokens.len()
            );
        }
        self.final_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{SemanticValue, TokenKind};

    #[test]
    fn test_replays_in_order() {
        let mut buf = TokenBuffer::new(vec![
            Token::punct(TokenKind::Let, "let"),
            Token::new(TokenKind::Identifier, SemanticValue::Lexeme("x".to_string())),
        ]);
        assert_eq!(buf.remaining(), 2);
        assert_eq!(buf.next().map(|t| t.kind), Some(TokenKind::Let));
        assert_eq!(buf.peek().map(|t| t.kind), Some(TokenKind::Identifier));
        assert_eq!(buf.next().map(|t| t.kind), Some(TokenKind::Identifier));
        assert!(buf.next().is_none());
        assert!(buf.is_exhausted());
    }

    #[test]
    fn test_context_depth() {
        let buf = TokenBuffer::new(Vec::new()).with_context_depth(2);
        assert_eq!(buf.current_context_depth(), 2);
        assert_eq!(TokenBuffer::default().current_context_depth(), 0);
    }

    #[test]
    fn test_usable_as_dyn_source() {
        let mut buf = TokenBuffer::new(vec![Token::punct(TokenKind::Semicolon, ";")]);
        let source: &mut dyn TokenSource = &mut buf;
        assert_eq!(source.count(), 1);
    }
}
