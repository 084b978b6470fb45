//! Tokens handed to the grammar engine by the tokenizer.

use std::fmt;

use thiserror::Error;
use tslite_ast::types::{resolve_data_type, TypeTag};
use tslite_ast::{AssignOperator, BinaryOperator};

/// The kind of a classified lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    Integer,
    Float,
    String,
    Boolean,

    // Names
    Identifier,
    TypeName,

    // Keywords
    Let,
    Const,
    Var,
    Function,
    Async,
    Await,
    Return,
    If,
    Else,
    For,
    Of,
    While,
    Switch,
    Case,
    Default,
    Type,
    Interface,
    Enum,
    Promise,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    StarStar,
    EqualsEquals,
    EqualsEqualsEquals,
    ExclamationEquals,
    ExclamationEqualsEquals,
    LessThan,
    LessThanEquals,
    GreaterThan,
    GreaterThanEquals,
    AmpersandAmpersand,
    BarBar,
    Exclamation,
    PlusPlus,
    MinusMinus,
    Equals,
    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    Arrow,

    // Delimiters
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Colon,
    Semicolon,
    Bar,
    Dot,

    Unknown,
}

impl TokenKind {
    /// Map a reserved word to its keyword kind.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        Some(match text {
            "let" => TokenKind::Let,
            "const" => TokenKind::Const,
            "var" => TokenKind::Var,
            "function" => TokenKind::Function,
            "async" => TokenKind::Async,
            "await" => TokenKind::Await,
            "return" => TokenKind::Return,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "for" => TokenKind::For,
            "of" => TokenKind::Of,
            "while" => TokenKind::While,
            "switch" => TokenKind::Switch,
            "case" => TokenKind::Case,
            "default" => TokenKind::Default,
            "type" => TokenKind::Type,
            "interface" => TokenKind::Interface,
            "enum" => TokenKind::Enum,
            "Promise" => TokenKind::Promise,
            _ => return None,
        })
    }

    pub fn binary_operator(self) -> Option<BinaryOperator> {
        Some(match self {
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Minus => BinaryOperator::Sub,
            TokenKind::Star => BinaryOperator::Mul,
            TokenKind::Slash => BinaryOperator::Div,
            TokenKind::Percent => BinaryOperator::Mod,
            TokenKind::StarStar => BinaryOperator::Pow,
            TokenKind::EqualsEquals => BinaryOperator::Equal,
            TokenKind::EqualsEqualsEquals => BinaryOperator::StrictEqual,
            TokenKind::ExclamationEquals => BinaryOperator::NotEqual,
            TokenKind::ExclamationEqualsEquals => BinaryOperator::StrictNotEqual,
            TokenKind::LessThan => BinaryOperator::LessThan,
            TokenKind::LessThanEquals => BinaryOperator::LessThanEqual,
            TokenKind::GreaterThan => BinaryOperator::GreaterThan,
            TokenKind::GreaterThanEquals => BinaryOperator::GreaterThanEqual,
            TokenKind::AmpersandAmpersand => BinaryOperator::And,
            TokenKind::BarBar => BinaryOperator::Or,
            _ => return None,
        })
    }

    pub fn assign_operator(self) -> Option<AssignOperator> {
        Some(match self {
            TokenKind::Equals => AssignOperator::Assign,
            TokenKind::PlusEquals => AssignOperator::AddAssign,
            TokenKind::MinusEquals => AssignOperator::SubAssign,
            TokenKind::StarEquals => AssignOperator::MulAssign,
            TokenKind::SlashEquals => AssignOperator::DivAssign,
            _ => return None,
        })
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Float | TokenKind::String | TokenKind::Boolean
        )
    }
}

/// The value the tokenizer attaches to a lexeme.
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Type(TypeTag),
    Lexeme(String),
}

impl SemanticValue {
    /// A short name of the variant, used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            SemanticValue::Integer(_) => "integer",
            SemanticValue::Float(_) => "float",
            SemanticValue::String(_) => "string",
            SemanticValue::Boolean(_) => "boolean",
            SemanticValue::Type(_) => "type",
            SemanticValue::Lexeme(_) => "lexeme",
        }
    }

    pub fn as_lexeme(&self) -> Option<&str> {
        match self {
            SemanticValue::Lexeme(s) => Some(s),
            _ => None,
        }
    }

    /// Take the raw lexeme text, for identifiers and names.
    pub fn into_lexeme(self) -> Option<String> {
        match self {
            SemanticValue::Lexeme(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for SemanticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticValue::Integer(n) => write!(f, "{}", n),
            SemanticValue::Float(n) => write!(f, "{}", n),
            SemanticValue::String(s) => write!(f, "{:?}", s),
            SemanticValue::Boolean(b) => write!(f, "{}", b),
            SemanticValue::Type(t) => write!(f, "{}", t),
            SemanticValue::Lexeme(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid numeric literal '{text}' on line {line}")]
    InvalidNumber { text: String, line: u32 },
    #[error("invalid boolean literal '{text}' on line {line}")]
    InvalidBoolean { text: String, line: u32 },
    #[error("unterminated string literal on line {line}")]
    UnterminatedString { line: u32 },
}

/// A classified lexeme with its semantic value.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: SemanticValue,
    /// 1-based source line, or 0 when unknown.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, value: SemanticValue) -> Self {
        Self { kind, value, line: 0 }
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Punctuation and keywords carry their own spelling as the value.
    pub fn punct(kind: TokenKind, text: &str) -> Self {
        Self::new(kind, SemanticValue::Lexeme(text.to_string()))
    }

    /// Convert raw lexeme text into a token, parsing literal payloads.
    pub fn from_lexeme(kind: TokenKind, text: &str, line: u32) -> Result<Token, TokenError> {
        let value = match kind {
            TokenKind::Integer => text
                .parse::<i64>()
                .map(SemanticValue::Integer)
                .map_err(|_| TokenError::InvalidNumber { text: text.to_string(), line })?,
            TokenKind::Float => text
                .parse::<f64>()
                .map(SemanticValue::Float)
                .map_err(|_| TokenError::InvalidNumber { text: text.to_string(), line })?,
            TokenKind::String => {
                let unquoted = unquote(text).ok_or(TokenError::UnterminatedString { line })?;
                SemanticValue::String(unquoted)
            }
            TokenKind::Boolean => match text {
                "true" => SemanticValue::Boolean(true),
                "false" => SemanticValue::Boolean(false),
                _ => return Err(TokenError::InvalidBoolean { text: text.to_string(), line }),
            },
            TokenKind::TypeName => SemanticValue::Type(type_tag_from_lexeme(text)),
            _ => SemanticValue::Lexeme(text.to_string()),
        };
        Ok(Token { kind, value, line })
    }
}

fn unquote(text: &str) -> Option<String> {
    let quote = text.chars().next().filter(|c| matches!(c, '"' | '\'' | '`'))?;
    let inner = text[1..].strip_suffix(quote)?;
    Some(inner.to_string())
}

/// `number` or `number[]`. Unknown names resolve to `any`.
pub fn type_tag_from_lexeme(text: &str) -> TypeTag {
    match text.trim().strip_suffix("[]") {
        Some(element) => TypeTag::Array(resolve_data_type(Some(element.trim_end()))),
        None => TypeTag::Primitive(resolve_data_type(Some(text.trim()))),
    }
}
