//! Builders for literals, factors, expressions and calls.

use tslite_ast::*;
use tslite_token::SemanticValue;

use crate::builder::AstBuilder;
use crate::error::{BuildError, BuildResult};

impl AstBuilder {
    // ========================================================================
    // Constants
    // ========================================================================

    pub fn integer_constant(&mut self, value: i64) -> Constant {
        self.action("IntegerConstant");
        Constant {
            value: ConstantValue::Integer(value),
        }
    }

    pub fn float_constant(&mut self, value: f64) -> Constant {
        self.action("FloatConstant");
        Constant {
            value: ConstantValue::Float(value),
        }
    }

    pub fn string_constant(&mut self, value: String) -> Constant {
        self.action("StringConstant");
        Constant {
            value: ConstantValue::String(value),
        }
    }

    pub fn boolean_constant(&mut self, value: bool) -> Constant {
        self.action("BooleanConstant");
        Constant {
            value: ConstantValue::Boolean(value),
        }
    }

    /// Build a constant from a literal token's value.
    pub fn constant_from_value(&mut self, value: SemanticValue) -> BuildResult<Constant> {
        match value {
            SemanticValue::Integer(n) => Ok(self.integer_constant(n)),
            SemanticValue::Float(n) => Ok(self.float_constant(n)),
            SemanticValue::String(s) => Ok(self.string_constant(s)),
            SemanticValue::Boolean(b) => Ok(self.boolean_constant(b)),
            other => Err(self.fail(BuildError::UnexpectedValue {
                expected: NodeKind::Constant,
                found: other.describe(),
            })),
        }
    }

    // ========================================================================
    // Factors
    // ========================================================================

    pub fn constant_factor(&mut self, constant: Constant) -> Factor {
        self.action("ConstantFactor");
        Factor::Constant(constant)
    }

    pub fn identifier_factor(&mut self, name: Option<String>) -> BuildResult<Factor> {
        self.action("IdentifierFactor");
        match name {
            Some(name) => Ok(Factor::Identifier(name)),
            None => Err(self.fail(BuildError::MissingName { node: NodeKind::Factor })),
        }
    }

    pub fn parenthesized_factor(&mut self, inner: Expression) -> Factor {
        self.action("ParenthesizedFactor");
        Factor::Parenthesized(Box::new(inner))
    }

    pub fn call_factor(&mut self, call: FunctionCall) -> Factor {
        self.action("CallFactor");
        Factor::Call(call)
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn factor_expression(&mut self, factor: Factor) -> Expression {
        self.action("FactorExpression");
        Expression::Factor(factor)
    }

    pub fn binary_expression(
        &mut self,
        operator: BinaryOperator,
        left: Expression,
        right: Expression,
    ) -> Expression {
        self.action("BinaryExpression");
        Expression::Binary(BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn not_expression(&mut self, operand: Expression) -> Expression {
        self.action("NotExpression");
        Expression::Unary(UnaryExpression {
            operator: UnaryOperator::Not,
            operand: Box::new(operand),
        })
    }

    pub fn await_expression(&mut self, operand: Expression) -> Expression {
        self.action("AwaitExpression");
        Expression::Unary(UnaryExpression {
            operator: UnaryOperator::Await,
            operand: Box::new(operand),
        })
    }

    pub fn inc_dec(
        &mut self,
        operand: Expression,
        operator: IncDecOperator,
        fixity: Fixity,
    ) -> IncDec {
        self.action("IncDec");
        IncDec {
            operand: Box::new(operand),
            operator,
            fixity,
        }
    }

    // ========================================================================
    // Calls
    // ========================================================================

    /// Prepend `argument` to the arguments that follow it.
    pub fn argument_list(&mut self, argument: Expression, rest: ArgumentList) -> ArgumentList {
        self.action("ArgumentList");
        rest.cons(argument)
    }

    pub fn function_call(
        &mut self,
        callee: Option<String>,
        arguments: ArgumentList,
    ) -> BuildResult<FunctionCall> {
        self.action("FunctionCall");
        match callee {
            Some(callee) => Ok(FunctionCall { callee, arguments }),
            None => {
                self.releaser.release_argument_list(arguments);
                Err(self.fail(BuildError::MissingName {
                    node: NodeKind::FunctionCall,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_from_value() {
        let mut b = AstBuilder::default();
        let c = b.constant_from_value(SemanticValue::Float(1.5)).unwrap();
        assert_eq!(c.value, ConstantValue::Float(1.5));
        assert_eq!(c.data_type(), DataType::Number);

        let err = b
            .constant_from_value(SemanticValue::Lexeme("x".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::UnexpectedValue {
                expected: NodeKind::Constant,
                found: "lexeme"
            }
        );
        assert_eq!(b.diagnostics().error_count(), 1);
    }

    #[test]
    fn test_binary_keeps_operand_order() {
        let mut b = AstBuilder::default();
        let one = b.integer_constant(1);
        let one = b.constant_factor(one);
        let left = b.factor_expression(one);
        let x = b.identifier_factor(Some("x".to_string())).unwrap();
        let right = b.factor_expression(x);
        let expr = b.binary_expression(BinaryOperator::Sub, left, right);
        let Expression::Binary(bin) = expr else {
            panic!("expected a binary expression");
        };
        assert_eq!(bin.operator, BinaryOperator::Sub);
        assert_eq!(bin.left.as_factor().map(Factor::kind), Some(FactorKind::Constant));
        assert_eq!(bin.right.as_factor().map(Factor::kind), Some(FactorKind::Identifier));
    }

    #[test]
    fn test_unary_has_one_child() {
        let mut b = AstBuilder::default();
        let t = b.boolean_constant(true);
        let t = b.constant_factor(t);
        let t = b.factor_expression(t);
        let not = b.not_expression(t);
        assert_eq!(not.kind(), ExpressionKind::Unary);
        assert_eq!(not.arity(), 1);
        let awaited = b.await_expression(not);
        assert!(matches!(
            awaited,
            Expression::Unary(UnaryExpression {
                operator: UnaryOperator::Await,
                ..
            })
        ));
    }

    #[test]
    fn test_call_without_callee_releases_arguments() {
        let mut b = AstBuilder::default();
        let s = b.string_constant("hi".to_string());
        let s = b.constant_factor(s);
        let arg = b.factor_expression(s);
        let args = b.argument_list(arg, ArgumentList::empty());
        let err = b.function_call(None, args).unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingName {
                node: NodeKind::FunctionCall
            }
        );
        assert_eq!(b.ledger().count(NodeKind::ArgumentList), 1);
        assert_eq!(b.ledger().count(NodeKind::Constant), 1);
    }

    #[test]
    fn test_missing_identifier() {
        let mut b = AstBuilder::default();
        assert!(b.identifier_factor(None).is_err());
        assert!(b.diagnostics().has_errors());
    }
}
