//! Compilation unit tests.
//!
//! A small recursive-descent grammar stands in for the real parsing engine:
//!
//! ```text
//! program   := statement*
//! statement := (let|const|var) IDENT (':' TYPE)? ('=' expr)? ';'
//!            | IDENT '(' (expr (',' expr)*)? ')' ';'
//! expr      := factor (binop factor)*
//! factor    := literal | IDENT | IDENT '(' args ')' | '(' expr ')'
//! ```

use std::iter::Peekable;

use tslite_ast::*;
use tslite_builder::{AstBuilder, BuildError, BuildResult, CompilationUnit, Grammar};
use tslite_diagnostics::messages;
use tslite_options::FrontendOptions;
use tslite_token::{Token, TokenBuffer, TokenKind, TokenSource};

// ============================================================================
// Grammar
// ============================================================================

struct StatementGrammar;

fn aborted(token: Option<Token>) -> BuildError {
    match token {
        Some(token) => {
            BuildError::Aborted(format!("unexpected {:?} on line {}", token.kind, token.line))
        }
        None => BuildError::Aborted("unexpected end of input".to_string()),
    }
}

fn expect<I: Iterator<Item = Token>>(
    tokens: &mut Peekable<I>,
    kind: TokenKind,
) -> BuildResult<Token> {
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        other => Err(aborted(other)),
    }
}

fn parse_factor<I: Iterator<Item = Token>>(
    tokens: &mut Peekable<I>,
    b: &mut AstBuilder,
) -> BuildResult<Expression> {
    let token = tokens.next();
    let factor = match token {
        Some(token) if token.kind.is_literal() => {
            let constant = b.constant_from_value(token.value)?;
            b.constant_factor(constant)
        }
        Some(token) if token.kind == TokenKind::Identifier => {
            let name = token.value.into_lexeme();
            if tokens.peek().map(|t| t.kind) == Some(TokenKind::OpenParen) {
                tokens.next();
                let arguments = parse_arguments(tokens, b)?;
                let call = b.function_call(name, arguments)?;
                b.call_factor(call)
            } else {
                b.identifier_factor(name)?
            }
        }
        Some(token) if token.kind == TokenKind::OpenParen => {
            let inner = parse_expression(tokens, b)?;
            if let Err(error) = expect(tokens, TokenKind::CloseParen) {
                b.abandon([Fragment::from(inner)]);
                return Err(error);
            }
            b.parenthesized_factor(inner)
        }
        other => return Err(aborted(other)),
    };
    Ok(b.factor_expression(factor))
}

fn parse_expression<I: Iterator<Item = Token>>(
    tokens: &mut Peekable<I>,
    b: &mut AstBuilder,
) -> BuildResult<Expression> {
    let mut left = parse_factor(tokens, b)?;
    while let Some(operator) = tokens.peek().and_then(|t| t.kind.binary_operator()) {
        tokens.next();
        let right = match parse_factor(tokens, b) {
            Ok(right) => right,
            Err(error) => {
                b.abandon([Fragment::from(left)]);
                return Err(error);
            }
        };
        left = b.binary_expression(operator, left, right);
    }
    Ok(left)
}

/// Arguments after `(`, through the closing `)`.
fn parse_arguments<I: Iterator<Item = Token>>(
    tokens: &mut Peekable<I>,
    b: &mut AstBuilder,
) -> BuildResult<ArgumentList> {
    let mut arguments = Vec::new();
    if tokens.peek().map(|t| t.kind) == Some(TokenKind::CloseParen) {
        tokens.next();
        return Ok(ArgumentList::empty());
    }
    loop {
        match parse_expression(tokens, b) {
            Ok(argument) => arguments.push(argument),
            Err(error) => {
                b.abandon(arguments.into_iter().map(Fragment::from));
                return Err(error);
            }
        }
        match tokens.next() {
            Some(t) if t.kind == TokenKind::Comma => continue,
            Some(t) if t.kind == TokenKind::CloseParen => break,
            other => {
                b.abandon(arguments.into_iter().map(Fragment::from));
                return Err(aborted(other));
            }
        }
    }
    let mut list = ArgumentList::empty();
    for argument in arguments.into_iter().rev() {
        list = b.argument_list(argument, list);
    }
    Ok(list)
}

fn parse_declaration<I: Iterator<Item = Token>>(
    tokens: &mut Peekable<I>,
    b: &mut AstBuilder,
    mutability: Mutability,
) -> BuildResult<Statement> {
    let name = expect(tokens, TokenKind::Identifier)?.value.into_lexeme();
    let tag = if tokens.peek().map(|t| t.kind) == Some(TokenKind::Colon) {
        tokens.next();
        let type_token = expect(tokens, TokenKind::TypeName)?;
        b.type_tag_from_value(type_token.value)?
    } else {
        b.type_tag(None)
    };
    let annotation = b.single_type(tag);
    let binding = b.variable_type(name, annotation)?;
    let declaration = if tokens.peek().map(|t| t.kind) == Some(TokenKind::Equals) {
        tokens.next();
        let value = match parse_expression(tokens, b) {
            Ok(value) => value,
            Err(error) => {
                b.abandon([Fragment::from(binding)]);
                return Err(error);
            }
        };
        b.expression_declaration(mutability, binding, value)
    } else {
        b.uninitialized_declaration(mutability, binding)
    };
    if let Err(error) = expect(tokens, TokenKind::Semicolon) {
        b.abandon([Fragment::from(declaration)]);
        return Err(error);
    }
    Ok(declaration.into())
}

fn parse_statement<I: Iterator<Item = Token>>(
    tokens: &mut Peekable<I>,
    b: &mut AstBuilder,
) -> BuildResult<Statement> {
    match tokens.peek().map(|t| t.kind) {
        Some(TokenKind::Let) => {
            tokens.next();
            parse_declaration(tokens, b, Mutability::Let)
        }
        Some(TokenKind::Const) => {
            tokens.next();
            parse_declaration(tokens, b, Mutability::Const)
        }
        Some(TokenKind::Var) => {
            tokens.next();
            parse_declaration(tokens, b, Mutability::Var)
        }
        Some(TokenKind::Identifier) => {
            let callee = tokens.next().and_then(|t| t.value.into_lexeme());
            expect(tokens, TokenKind::OpenParen)?;
            let arguments = parse_arguments(tokens, b)?;
            let call = b.function_call(callee, arguments)?;
            if let Err(error) = expect(tokens, TokenKind::Semicolon) {
                b.abandon([Fragment::from(call)]);
                return Err(error);
            }
            Ok(call.into())
        }
        _ => Err(aborted(tokens.next())),
    }
}

impl Grammar for StatementGrammar {
    fn parse(
        &mut self,
        tokens: &mut dyn TokenSource,
        builder: &mut AstBuilder,
    ) -> BuildResult<Code> {
        let mut tokens = tokens.peekable();
        let mut statements = Vec::new();
        while tokens.peek().is_some() {
            match parse_statement(&mut tokens, builder) {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    builder.abandon(statements.into_iter().map(Fragment::from));
                    return Err(error);
                }
            }
        }
        let mut code = Code::empty();
        for statement in statements.into_iter().rev() {
            code = builder.code(statement, code);
        }
        Ok(code)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn lex(source: &[(TokenKind, &str)]) -> TokenBuffer {
    TokenBuffer::new(
        source
            .iter()
            .map(|(kind, text)| Token::from_lexeme(*kind, text, 1).unwrap()),
    )
}

fn let_x_then_print() -> Vec<(TokenKind, &'static str)> {
    use TokenKind::*;
    vec![
        (Let, "let"),
        (Identifier, "x"),
        (Colon, ":"),
        (TypeName, "number"),
        (Equals, "="),
        (Integer, "1"),
        (Plus, "+"),
        (Integer, "2"),
        (Semicolon, ";"),
        (Identifier, "print"),
        (OpenParen, "("),
        (Identifier, "x"),
        (CloseParen, ")"),
        (Semicolon, ";"),
    ]
}

fn compile(source: &[(TokenKind, &str)], depth: u32) -> tslite_builder::FrontendOutcome {
    let mut tokens = lex(source).with_context_depth(depth);
    CompilationUnit::default().compile(&mut StatementGrammar, &mut tokens)
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_compile_program() {
    let outcome = compile(&let_x_then_print(), 0);
    assert!(outcome.succeeded);
    assert!(outcome.diagnostics.is_empty());
    assert!(outcome.ledger.is_empty());

    let program = outcome.program.unwrap();
    let kinds: Vec<_> = program.statements().map(Statement::kind).collect();
    assert_eq!(kinds, vec![StatementKind::Declaration, StatementKind::FunctionCall]);
}

#[test]
fn test_unbalanced_context_still_yields_program() {
    let outcome = compile(&let_x_then_print(), 2);
    assert!(!outcome.succeeded);
    assert!(outcome.has_errors());
    assert!(outcome
        .diagnostics
        .iter()
        .any(|d| d.code == messages::FINAL_CONTEXT_IS_NOT_DEFAULT_0.code));
    assert_eq!(outcome.program.map(|p| p.code.len()), Some(2));
}

#[test]
fn test_abort_releases_completed_statements() {
    use TokenKind::*;
    let source = [
        (Const, "const"),
        (Identifier, "a"),
        (Equals, "="),
        (Integer, "1"),
        (Semicolon, ";"),
        (Let, "let"),
        (Identifier, "x"),
        (Equals, "="),
        (Semicolon, ";"),
    ];
    let outcome = compile(&source, 0);
    assert!(!outcome.succeeded);
    assert!(outcome.program.is_none());
    assert!(outcome
        .diagnostics
        .iter()
        .any(|d| d.code == messages::PARSE_ABORTED_0.code));
    assert_eq!(outcome.ledger.count(NodeKind::Declaration), 1);
    assert_eq!(outcome.ledger.count(NodeKind::Constant), 1);
    // the binding of the unfinished declaration
    assert_eq!(outcome.ledger.count(NodeKind::VariableType), 2);
}

#[test]
fn test_abort_inside_expression_releases_left_operand() {
    use TokenKind::*;
    let source = [
        (Identifier, "f"),
        (OpenParen, "("),
        (Integer, "1"),
        (Star, "*"),
        (CloseParen, ")"),
        (Semicolon, ";"),
    ];
    let outcome = compile(&source, 0);
    assert!(!outcome.succeeded);
    assert_eq!(outcome.ledger.count(NodeKind::Constant), 1);
    assert_eq!(outcome.ledger.count(NodeKind::Expression), 1);
    assert_eq!(outcome.ledger.count(NodeKind::FunctionCall), 0);
}

#[test]
fn test_unknown_type_warns_when_enabled() {
    let source = [
        (TokenKind::Let, "let"),
        (TokenKind::Identifier, "w"),
        (TokenKind::Colon, ":"),
        (TokenKind::Identifier, "Widget"),
        (TokenKind::Semicolon, ";"),
    ];
    // `Widget` arrives as an identifier, which the grammar rejects in type position.
    let outcome = compile(&source, 0);
    assert!(!outcome.succeeded);

    let mut builder = AstBuilder::new(FrontendOptions {
        warn_unknown_types: Some(true),
        ..Default::default()
    });
    let tag = builder.type_tag(Some("Widget"));
    assert_eq!(tag, TypeTag::Primitive(DataType::Any));
    assert_eq!(builder.diagnostics().len(), 1);
    assert!(!builder.diagnostics().has_errors());
}

#[test]
fn test_literal_kinds() {
    use TokenKind::*;
    let source = [
        (Var, "var"),
        (Identifier, "s"),
        (Colon, ":"),
        (TypeName, "string[]"),
        (Equals, "="),
        (OpenParen, "("),
        (String, "\"a\""),
        (BarBar, "||"),
        (Boolean, "false"),
        (CloseParen, ")"),
        (Semicolon, ";"),
    ];
    let outcome = compile(&source, 0);
    assert!(outcome.succeeded, "{:?}", outcome.diagnostics);
    let program = outcome.program.unwrap();
    let Some(Statement::Declaration(decl)) = program.code.first() else {
        panic!("expected a declaration");
    };
    assert_eq!(decl.mutability, Mutability::Var);
    assert_eq!(
        decl.variable.binding.annotation,
        TypeAnnotation::Single(TypeTag::Array(DataType::String))
    );
    let Initializer::Expression(init) = &decl.variable.initializer else {
        panic!("expected an expression initializer");
    };
    assert_eq!(init.as_factor().map(Factor::kind), Some(FactorKind::Parenthesized));
}
