//! Builders for control flow, callables and statement chains.

use tslite_ast::types::{PromiseReturnType, TypeAnnotation};
use tslite_ast::*;

use crate::builder::AstBuilder;
use crate::error::{BuildError, BuildResult};

impl AstBuilder {
    // ========================================================================
    // Statement chains
    // ========================================================================

    /// Prepend `statement` to the statements that follow it.
    pub fn code(&mut self, statement: impl Into<Statement>, rest: Code) -> Code {
        self.action("Code");
        rest.cons(statement.into())
    }

    pub fn return_statement(&mut self, value: Option<Expression>) -> ReturnStatement {
        self.action("ReturnStatement");
        ReturnStatement {
            value: value.map(Box::new),
        }
    }

    // ========================================================================
    // Conditionals and loops
    // ========================================================================

    pub fn if_statement(
        &mut self,
        condition: Expression,
        then_body: Code,
        else_body: Option<Code>,
    ) -> IfStatement {
        self.action("IfStatement");
        IfStatement {
            condition: Box::new(condition),
            then_body,
            else_body,
        }
    }

    /// `for (init; condition; update)`. Exactly one of `update` and
    /// `inc_dec` must be given.
    pub fn classic_for_params(
        &mut self,
        init: Declaration,
        condition: Expression,
        update: Option<Expression>,
        inc_dec: Option<IncDec>,
    ) -> BuildResult<ParamsFor> {
        self.action("ClassicForParams");
        let update = match (update, inc_dec) {
            (Some(expr), None) => ForUpdate::Expression(Box::new(expr)),
            (None, Some(inc_dec)) => ForUpdate::IncDec(inc_dec),
            (update, inc_dec) => {
                let error = if update.is_some() {
                    BuildError::ConflictingForUpdate
                } else {
                    BuildError::MissingForUpdate
                };
                self.releaser.release_declaration(init);
                self.releaser.release_expression(condition);
                self.releaser.release_expression(update);
                self.releaser.release_inc_dec(inc_dec);
                return Err(self.fail(error));
            }
        };
        Ok(ParamsFor::Classic(ClassicFor {
            init,
            condition: Box::new(condition),
            update,
        }))
    }

    /// `for (binding of iterable)`
    pub fn for_of_params(&mut self, binding: Declaration, iterable: IterableVariable) -> ParamsFor {
        self.action("ForOfParams");
        ParamsFor::ForOf(ForOf { binding, iterable })
    }

    pub fn identifier_iterable(&mut self, name: Option<String>) -> BuildResult<IterableVariable> {
        self.action("IdentifierIterable");
        match name {
            Some(name) => Ok(IterableVariable::Identifier(name)),
            None => Err(self.fail(BuildError::MissingName {
                node: NodeKind::IterableVariable,
            })),
        }
    }

    pub fn call_iterable(&mut self, call: FunctionCall) -> IterableVariable {
        self.action("CallIterable");
        IterableVariable::Call(call)
    }

    pub fn array_iterable(&mut self, items: ArrayContent) -> IterableVariable {
        self.action("ArrayIterable");
        IterableVariable::Array(items)
    }

    pub fn object_iterable(&mut self, entries: ObjectContent) -> IterableVariable {
        self.action("ObjectIterable");
        IterableVariable::Object(entries)
    }

    pub fn for_loop(&mut self, params: ParamsFor, body: Code) -> ForLoop {
        self.action("ForLoop");
        ForLoop { params, body }
    }

    pub fn while_loop(&mut self, condition: Expression, body: Code) -> WhileLoop {
        self.action("WhileLoop");
        WhileLoop {
            condition: Box::new(condition),
            body,
        }
    }

    // ========================================================================
    // Switch
    // ========================================================================

    pub fn switch_case(&mut self, case: Expression, body: Code) -> SwitchCase {
        self.action("SwitchCase");
        SwitchCase {
            case: Box::new(case),
            body,
        }
    }

    pub fn switch_content(&mut self, case: SwitchCase, rest: SwitchContent) -> SwitchContent {
        self.action("SwitchContent");
        rest.cons(case)
    }

    pub fn switch_statement(
        &mut self,
        discriminant: Expression,
        cases: SwitchContent,
        default_body: Option<Code>,
    ) -> SwitchStatement {
        self.action("SwitchStatement");
        SwitchStatement {
            discriminant: Box::new(discriminant),
            cases,
            default_body,
        }
    }

    // ========================================================================
    // Callables
    // ========================================================================

    /// A body is never absent. Missing statements become an empty chain.
    pub fn function_body(
        &mut self,
        statements: Option<Code>,
        return_value: Option<Expression>,
    ) -> FunctionBody {
        self.action("FunctionBody");
        FunctionBody {
            statements: statements.unwrap_or_default(),
            return_value: return_value.map(Box::new),
        }
    }

    pub fn function_declaration(
        &mut self,
        name: Option<String>,
        parameters: VariableTypeList,
        return_type: TypeAnnotation,
        body: FunctionBody,
    ) -> BuildResult<FunctionDeclaration> {
        self.action("FunctionDeclaration");
        let Some(name) = name else {
            self.releaser.release_variable_type_list(parameters);
            self.releaser.release_function_body(body);
            return Err(self.fail(BuildError::MissingName {
                node: NodeKind::FunctionDeclaration,
            }));
        };
        Ok(FunctionDeclaration {
            name,
            parameters,
            return_type,
            body,
        })
    }

    pub fn arrow_function(
        &mut self,
        parameters: VariableTypeList,
        return_type: TypeAnnotation,
        body: FunctionBody,
    ) -> ArrowFunction {
        self.action("ArrowFunction");
        ArrowFunction {
            parameters,
            return_type,
            body,
        }
    }

    pub fn async_function(
        &mut self,
        name: Option<String>,
        parameters: VariableTypeList,
        return_type: PromiseReturnType,
        body: FunctionBody,
    ) -> BuildResult<AsyncFunction> {
        self.action("AsyncFunction");
        let Some(name) = name else {
            self.releaser.release_variable_type_list(parameters);
            self.releaser.release_function_body(body);
            return Err(self.fail(BuildError::MissingName {
                node: NodeKind::AsyncFunction,
            }));
        };
        Ok(AsyncFunction {
            name,
            parameters,
            return_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(b: &mut AstBuilder, name: &str) -> Expression {
        let f = b.identifier_factor(Some(name.to_string())).unwrap();
        b.factor_expression(f)
    }

    fn counter(b: &mut AstBuilder) -> Declaration {
        let tag = b.type_tag(Some("number"));
        let annotation = b.single_type(tag);
        let binding = b.variable_type(Some("i".to_string()), annotation).unwrap();
        let zero = b.integer_constant(0);
        let zero = b.constant_factor(zero);
        let zero = b.factor_expression(zero);
        b.expression_declaration(Mutability::Let, binding, zero)
    }

    #[test]
    fn test_classic_for_accepts_exactly_one_update() {
        let mut b = AstBuilder::default();
        let init = counter(&mut b);
        let cond = ident(&mut b, "ok");
        let i = ident(&mut b, "i");
        let step = b.inc_dec(i, IncDecOperator::Increment, Fixity::Postfix);
        let params = b.classic_for_params(init, cond, None, Some(step)).unwrap();
        assert!(!params.is_for_of());
        assert_eq!(params.binding().variable.name(), "i");
        assert!(b.diagnostics().is_empty());
    }

    #[test]
    fn test_classic_for_rejects_both_updates() {
        let mut b = AstBuilder::default();
        let init = counter(&mut b);
        let cond = ident(&mut b, "ok");
        let update = ident(&mut b, "j");
        let i = ident(&mut b, "i");
        let step = b.inc_dec(i, IncDecOperator::Decrement, Fixity::Prefix);
        let err = b.classic_for_params(init, cond, Some(update), Some(step)).unwrap_err();
        assert_eq!(err, BuildError::ConflictingForUpdate);
        assert_eq!(b.ledger().count(NodeKind::Declaration), 1);
        assert_eq!(b.ledger().count(NodeKind::IncDec), 1);
        // init value, condition, update, inc/dec operand
        assert_eq!(b.ledger().count(NodeKind::Expression), 4);
    }

    #[test]
    fn test_classic_for_rejects_missing_update() {
        let mut b = AstBuilder::default();
        let init = counter(&mut b);
        let cond = ident(&mut b, "ok");
        let err = b.classic_for_params(init, cond, None, None).unwrap_err();
        assert_eq!(err, BuildError::MissingForUpdate);
        assert_eq!(b.diagnostics().error_count(), 1);
    }

    #[test]
    fn test_function_body_is_never_absent() {
        let mut b = AstBuilder::default();
        let body = b.function_body(None, None);
        assert!(body.is_empty());
        let arrow = b.arrow_function(VariableTypeList::empty(), TypeAnnotation::default(), body);
        assert!(arrow.body.statements.is_empty());
    }

    #[test]
    fn test_function_without_name_releases_children() {
        let mut b = AstBuilder::default();
        let ret = ident(&mut b, "x");
        let body = b.function_body(None, Some(ret));
        let err = b
            .function_declaration(None, VariableTypeList::empty(), TypeAnnotation::default(), body)
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingName {
                node: NodeKind::FunctionDeclaration
            }
        );
        assert_eq!(b.ledger().count(NodeKind::FunctionBody), 1);
        assert_eq!(b.ledger().count(NodeKind::Expression), 1);
    }

    #[test]
    fn test_async_function() {
        let mut b = AstBuilder::default();
        let tag = b.type_tag(Some("string"));
        let resolved = b.single_type(tag);
        let promise = b.promise_return_type(resolved);
        let body = b.function_body(None, None);
        let f = b
            .async_function(Some("load".to_string()), VariableTypeList::empty(), promise, body)
            .unwrap();
        assert_eq!(f.return_type.to_string(), "Promise<string>");
        assert_eq!(Statement::from(f).kind(), StatementKind::AsyncFunction);
    }

    #[test]
    fn test_switch_preserves_case_order() {
        let mut b = AstBuilder::default();
        let mut cases = SwitchContent::empty();
        for n in [3, 2, 1] {
            let c = b.integer_constant(n);
            let c = b.constant_factor(c);
            let c = b.factor_expression(c);
            let case = b.switch_case(c, Code::empty());
            cases = b.switch_content(case, cases);
        }
        let x = ident(&mut b, "x");
        let ret = b.return_statement(None);
        let default_body = b.code(ret, Code::empty());
        let switch = b.switch_statement(x, cases, Some(default_body));
        let order: Vec<_> = switch
            .cases
            .iter()
            .map(|case| match case.case.as_factor() {
                Some(Factor::Constant(Constant {
                    value: ConstantValue::Integer(n),
                })) => *n,
                _ => -1,
            })
            .collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert!(switch.default_body.is_some());
    }
}
