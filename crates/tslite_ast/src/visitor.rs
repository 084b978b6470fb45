//! AST visitor trait for traversing the syntax tree.
//!
//! Default implementations walk into children in source order, so an
//! implementor only overrides the nodes it cares about and calls the
//! matching `walk_*` function to keep descending.

use crate::node::*;

/// A visitor over a borrowed tree.
pub trait AstVisitor {
    fn visit_program(&mut self, node: &Program) {
        self.visit_code(&node.code);
    }

    fn visit_code(&mut self, code: &Code) {
        for stmt in code {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    // -- Statements --

    fn visit_declaration(&mut self, node: &Declaration) {
        self.visit_variable(&node.variable);
    }

    fn visit_variable(&mut self, node: &Variable) {
        self.visit_variable_type(&node.binding);
        walk_initializer(self, &node.initializer);
    }

    fn visit_variable_type(&mut self, _node: &VariableType) {}

    fn visit_assignment(&mut self, node: &Assignment) {
        self.visit_expression(&node.value);
    }

    fn visit_inc_dec(&mut self, node: &IncDec) {
        self.visit_expression(&node.operand);
    }

    fn visit_if_statement(&mut self, node: &IfStatement) {
        self.visit_expression(&node.condition);
        self.visit_code(&node.then_body);
        if let Some(else_body) = &node.else_body {
            self.visit_code(else_body);
        }
    }

    fn visit_for_loop(&mut self, node: &ForLoop) {
        match &node.params {
            ParamsFor::Classic(c) => {
                self.visit_declaration(&c.init);
                self.visit_expression(&c.condition);
                match &c.update {
                    ForUpdate::Expression(e) => self.visit_expression(e),
                    ForUpdate::IncDec(i) => self.visit_inc_dec(i),
                }
            }
            ParamsFor::ForOf(f) => {
                self.visit_declaration(&f.binding);
                match &f.iterable {
                    IterableVariable::Identifier(name) => self.visit_identifier(name),
                    IterableVariable::Call(call) => self.visit_function_call(call),
                    IterableVariable::Array(items) => self.visit_array_content(items),
                    IterableVariable::Object(entries) => self.visit_object_content(entries),
                }
            }
        }
        self.visit_code(&node.body);
    }

    fn visit_while_loop(&mut self, node: &WhileLoop) {
        self.visit_expression(&node.condition);
        self.visit_code(&node.body);
    }

    fn visit_switch_statement(&mut self, node: &SwitchStatement) {
        self.visit_expression(&node.discriminant);
        for case in &node.cases {
            self.visit_expression(&case.case);
            self.visit_code(&case.body);
        }
        if let Some(default_body) = &node.default_body {
            self.visit_code(default_body);
        }
    }

    fn visit_function_declaration(&mut self, node: &FunctionDeclaration) {
        for param in &node.parameters {
            self.visit_variable_type(param);
        }
        self.visit_function_body(&node.body);
    }

    fn visit_arrow_function(&mut self, node: &ArrowFunction) {
        for param in &node.parameters {
            self.visit_variable_type(param);
        }
        self.visit_function_body(&node.body);
    }

    fn visit_async_function(&mut self, node: &AsyncFunction) {
        for param in &node.parameters {
            self.visit_variable_type(param);
        }
        self.visit_function_body(&node.body);
    }

    fn visit_function_body(&mut self, node: &FunctionBody) {
        self.visit_code(&node.statements);
        if let Some(value) = &node.return_value {
            self.visit_expression(value);
        }
    }

    fn visit_type_declaration(&mut self, node: &TypeDeclaration) {
        match &node.shape {
            TypeShape::Object(entries) => self.visit_object_content(entries),
            TypeShape::Array(items) => self.visit_array_content(items),
            TypeShape::Interface(members) => {
                for member in members {
                    self.visit_variable_type(member);
                }
            }
            TypeShape::Enum(values) => {
                for value in values {
                    self.visit_variable(value);
                }
            }
            TypeShape::Alias(expr) => self.visit_expression(expr),
        }
    }

    fn visit_return_statement(&mut self, node: &ReturnStatement) {
        if let Some(value) = &node.value {
            self.visit_expression(value);
        }
    }

    // -- Expressions --

    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    fn visit_factor(&mut self, factor: &Factor) {
        match factor {
            Factor::Constant(c) => self.visit_constant(c),
            Factor::Identifier(name) => self.visit_identifier(name),
            Factor::Parenthesized(e) => self.visit_expression(e),
            Factor::Call(call) => self.visit_function_call(call),
        }
    }

    fn visit_constant(&mut self, _node: &Constant) {}

    fn visit_identifier(&mut self, _name: &str) {}

    fn visit_function_call(&mut self, node: &FunctionCall) {
        for arg in &node.arguments {
            self.visit_expression(arg);
        }
    }

    fn visit_array_content(&mut self, items: &ArrayContent) {
        for item in items {
            self.visit_expression(item);
        }
    }

    fn visit_object_content(&mut self, entries: &ObjectContent) {
        for entry in entries {
            self.visit_expression(&entry.value);
        }
    }
}

/// Dispatch a statement to the visitor method for its payload.
pub fn walk_statement<V: AstVisitor + ?Sized>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::Declaration(n) => visitor.visit_declaration(n),
        Statement::Variable(n) => visitor.visit_variable(n),
        Statement::Assignment(n) => visitor.visit_assignment(n),
        Statement::Expression(n) => visitor.visit_expression(n),
        Statement::IncDec(n) => visitor.visit_inc_dec(n),
        Statement::If(n) => visitor.visit_if_statement(n),
        Statement::For(n) => visitor.visit_for_loop(n),
        Statement::While(n) => visitor.visit_while_loop(n),
        Statement::Switch(n) => visitor.visit_switch_statement(n),
        Statement::FunctionCall(n) => visitor.visit_function_call(n),
        Statement::FunctionDeclaration(n) => visitor.visit_function_declaration(n),
        Statement::ArrowFunction(n) => visitor.visit_arrow_function(n),
        Statement::AsyncFunction(n) => visitor.visit_async_function(n),
        Statement::TypeDeclaration(n) => visitor.visit_type_declaration(n),
        Statement::Return(n) => visitor.visit_return_statement(n),
    }
}

pub fn walk_expression<V: AstVisitor + ?Sized>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::Binary(b) => {
            visitor.visit_expression(&b.left);
            visitor.visit_expression(&b.right);
        }
        Expression::Unary(u) => visitor.visit_expression(&u.operand),
        Expression::Factor(f) => visitor.visit_factor(f),
    }
}

pub fn walk_initializer<V: AstVisitor + ?Sized>(visitor: &mut V, init: &Initializer) {
    match init {
        Initializer::Expression(e) => visitor.visit_expression(e),
        Initializer::Array(items) => visitor.visit_array_content(items),
        Initializer::Object(entries) => visitor.visit_object_content(entries),
        Initializer::Call(call) => visitor.visit_function_call(call),
        Initializer::Arrow(arrow) => visitor.visit_arrow_function(arrow),
        Initializer::Uninitialized => {}
    }
}
