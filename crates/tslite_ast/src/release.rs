//! Teardown of owned subtrees.
//!
//! Dropping a node frees it, so the `Releaser` exists to make teardown
//! observable: it takes a subtree apart bottom-up, children before their
//! parent, and records one entry per released node in a [`ReleaseLedger`].
//! Every `release_*` method accepts an absent node and does nothing with it.
//!
//! Chains are released tail first and iteratively. Recursion depth follows
//! nesting depth of the tree, never the length of a sequence.

use rustc_hash::FxHashMap;

use crate::chain::Chain;
use crate::fragment::Fragment;
use crate::node::*;
use crate::node_kind::NodeKind;

/// Per-kind count of released nodes.
#[derive(Debug, Clone)]
pub struct ReleaseLedger {
    counts: FxHashMap<NodeKind, usize>,
}

impl ReleaseLedger {
    pub fn new() -> Self {
        let mut counts = FxHashMap::default();
        counts.reserve(NodeKind::COUNT);
        for kind in NodeKind::ALL {
            counts.insert(kind, 0);
        }
        Self { counts }
    }

    pub fn record(&mut self, kind: NodeKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Kinds with a non-zero count, in `NodeKind` order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeKind, usize)> + '_ {
        NodeKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|(_, n)| *n > 0)
    }

    pub fn merge(&mut self, other: &ReleaseLedger) {
        for (kind, n) in other.iter() {
            *self.counts.entry(kind).or_insert(0) += n;
        }
    }

    pub fn clear(&mut self) {
        for n in self.counts.values_mut() {
            *n = 0;
        }
    }
}

impl Default for ReleaseLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ReleaseLedger {
    fn eq(&self, other: &Self) -> bool {
        NodeKind::ALL
            .into_iter()
            .all(|kind| self.count(kind) == other.count(kind))
    }
}

impl Eq for ReleaseLedger {}

/// Releases subtrees and keeps the ledger.
#[derive(Debug, Default)]
pub struct Releaser {
    ledger: ReleaseLedger,
    trace: bool,
}

impl Releaser {
    pub fn new() -> Self {
        Self {
            ledger: ReleaseLedger::new(),
            trace: false,
        }
    }

    /// Emit a `trace` record for every released node.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn ledger(&self) -> &ReleaseLedger {
        &self.ledger
    }

    pub fn take_ledger(&mut self) -> ReleaseLedger {
        std::mem::take(&mut self.ledger)
    }

    fn note(&mut self, kind: NodeKind) {
        self.ledger.record(kind);
        if self.trace {
            log::trace!("released {}", kind);
        }
    }

    fn release_chain<T>(
        &mut self,
        chain: Chain<T>,
        kind: NodeKind,
        mut release_item: impl FnMut(&mut Self, T),
    ) {
        let mut items = chain.into_items();
        while let Some(item) = items.pop() {
            release_item(self, item);
            self.note(kind);
        }
    }

    // ========================================================================
    // Root and statements
    // ========================================================================

    pub fn release_program(&mut self, node: impl Into<Option<Program>>) {
        let Some(program) = node.into() else { return };
        self.release_code(program.code);
        self.note(NodeKind::Program);
    }

    pub fn release_code(&mut self, node: impl Into<Option<Code>>) {
        let Some(code) = node.into() else { return };
        self.release_chain(code, NodeKind::Code, |r, stmt| r.release_statement(stmt));
    }

    /// Release the payload of a statement. The statement wrapper itself has
    /// no kind; it is counted through its `Code` link.
    pub fn release_statement(&mut self, node: impl Into<Option<Statement>>) {
        let Some(stmt) = node.into() else { return };
        match stmt {
            Statement::Declaration(n) => self.release_declaration(n),
            Statement::Variable(n) => self.release_variable(n),
            Statement::Assignment(n) => self.release_assignment(n),
            Statement::Expression(n) => self.release_expression(*n),
            Statement::IncDec(n) => self.release_inc_dec(n),
            Statement::If(n) => self.release_if_statement(n),
            Statement::For(n) => self.release_for_loop(n),
            Statement::While(n) => self.release_while_loop(n),
            Statement::Switch(n) => self.release_switch_statement(n),
            Statement::FunctionCall(n) => self.release_function_call(n),
            Statement::FunctionDeclaration(n) => self.release_function_declaration(n),
            Statement::ArrowFunction(n) => self.release_arrow_function(n),
            Statement::AsyncFunction(n) => self.release_async_function(n),
            Statement::TypeDeclaration(n) => self.release_type_declaration(n),
            Statement::Return(n) => self.release_return_statement(n),
        }
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    pub fn release_constant(&mut self, node: impl Into<Option<Constant>>) {
        if node.into().is_some() {
            self.note(NodeKind::Constant);
        }
    }

    pub fn release_expression(&mut self, node: impl Into<Option<Expression>>) {
        let Some(expr) = node.into() else { return };
        match expr {
            Expression::Binary(b) => {
                self.release_expression(*b.left);
                self.release_expression(*b.right);
            }
            Expression::Unary(u) => self.release_expression(*u.operand),
            Expression::Factor(f) => self.release_factor(f),
        }
        self.note(NodeKind::Expression);
    }

    pub fn release_factor(&mut self, node: impl Into<Option<Factor>>) {
        let Some(factor) = node.into() else { return };
        match factor {
            Factor::Constant(c) => self.release_constant(c),
            Factor::Identifier(_) => {}
            Factor::Parenthesized(e) => self.release_expression(*e),
            Factor::Call(call) => self.release_function_call(call),
        }
        self.note(NodeKind::Factor);
    }

    pub fn release_inc_dec(&mut self, node: impl Into<Option<IncDec>>) {
        let Some(inc_dec) = node.into() else { return };
        self.release_expression(*inc_dec.operand);
        self.note(NodeKind::IncDec);
    }

    pub fn release_function_call(&mut self, node: impl Into<Option<FunctionCall>>) {
        let Some(call) = node.into() else { return };
        self.release_argument_list(call.arguments);
        self.note(NodeKind::FunctionCall);
    }

    pub fn release_argument_list(&mut self, node: impl Into<Option<ArgumentList>>) {
        let Some(args) = node.into() else { return };
        self.release_chain(args, NodeKind::ArgumentList, |r, e| r.release_expression(e));
    }

    pub fn release_array_content(&mut self, node: impl Into<Option<ArrayContent>>) {
        let Some(items) = node.into() else { return };
        self.release_chain(items, NodeKind::ArrayContent, |r, e| r.release_expression(e));
    }

    pub fn release_object_content(&mut self, node: impl Into<Option<ObjectContent>>) {
        let Some(entries) = node.into() else { return };
        self.release_chain(entries, NodeKind::ObjectContent, |r, entry| {
            r.release_expression(entry.value)
        });
    }

    // ========================================================================
    // Bindings and declarations
    // ========================================================================

    pub fn release_variable_type(&mut self, node: impl Into<Option<VariableType>>) {
        if node.into().is_some() {
            self.note(NodeKind::VariableType);
        }
    }

    pub fn release_variable_type_list(&mut self, node: impl Into<Option<VariableTypeList>>) {
        let Some(list) = node.into() else { return };
        self.release_chain(list, NodeKind::VariableTypeList, |r, v| r.release_variable_type(v));
    }

    pub fn release_variable(&mut self, node: impl Into<Option<Variable>>) {
        let Some(variable) = node.into() else { return };
        self.release_variable_type(variable.binding);
        match variable.initializer {
            Initializer::Expression(e) => self.release_expression(*e),
            Initializer::Array(items) => self.release_array_content(items),
            Initializer::Object(entries) => self.release_object_content(entries),
            Initializer::Call(call) => self.release_function_call(call),
            Initializer::Arrow(arrow) => self.release_arrow_function(*arrow),
            Initializer::Uninitialized => {}
        }
        self.note(NodeKind::Variable);
    }

    pub fn release_variable_list(&mut self, node: impl Into<Option<VariableList>>) {
        let Some(list) = node.into() else { return };
        self.release_chain(list, NodeKind::VariableList, |r, v| r.release_variable(v));
    }

    pub fn release_declaration(&mut self, node: impl Into<Option<Declaration>>) {
        let Some(decl) = node.into() else { return };
        self.release_variable(decl.variable);
        self.note(NodeKind::Declaration);
    }

    pub fn release_assignment(&mut self, node: impl Into<Option<Assignment>>) {
        let Some(assignment) = node.into() else { return };
        self.release_expression(*assignment.value);
        self.note(NodeKind::Assignment);
    }

    pub fn release_type_declaration(&mut self, node: impl Into<Option<TypeDeclaration>>) {
        let Some(decl) = node.into() else { return };
        match decl.shape {
            TypeShape::Object(entries) => self.release_object_content(entries),
            TypeShape::Array(items) => self.release_array_content(items),
            TypeShape::Interface(members) => self.release_variable_type_list(members),
            TypeShape::Enum(values) => self.release_variable_list(values),
            TypeShape::Alias(e) => self.release_expression(*e),
        }
        self.note(NodeKind::TypeDeclaration);
    }

    // ========================================================================
    // Callables
    // ========================================================================

    pub fn release_function_body(&mut self, node: impl Into<Option<FunctionBody>>) {
        let Some(body) = node.into() else { return };
        self.release_code(body.statements);
        self.release_expression(body.return_value.map(|e| *e));
        self.note(NodeKind::FunctionBody);
    }

    pub fn release_function_declaration(&mut self, node: impl Into<Option<FunctionDeclaration>>) {
        let Some(decl) = node.into() else { return };
        self.release_variable_type_list(decl.parameters);
        self.release_function_body(decl.body);
        self.note(NodeKind::FunctionDeclaration);
    }

    pub fn release_arrow_function(&mut self, node: impl Into<Option<ArrowFunction>>) {
        let Some(arrow) = node.into() else { return };
        self.release_variable_type_list(arrow.parameters);
        self.release_function_body(arrow.body);
        self.note(NodeKind::ArrowFunction);
    }

    pub fn release_async_function(&mut self, node: impl Into<Option<AsyncFunction>>) {
        let Some(func) = node.into() else { return };
        self.release_variable_type_list(func.parameters);
        self.release_function_body(func.body);
        self.note(NodeKind::AsyncFunction);
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    pub fn release_if_statement(&mut self, node: impl Into<Option<IfStatement>>) {
        let Some(stmt) = node.into() else { return };
        self.release_expression(*stmt.condition);
        self.release_code(stmt.then_body);
        self.release_code(stmt.else_body);
        self.note(NodeKind::IfStatement);
    }

    pub fn release_params_for(&mut self, node: impl Into<Option<ParamsFor>>) {
        let Some(params) = node.into() else { return };
        match params {
            ParamsFor::Classic(c) => {
                self.release_declaration(c.init);
                self.release_expression(*c.condition);
                match c.update {
                    ForUpdate::Expression(e) => self.release_expression(*e),
                    ForUpdate::IncDec(i) => self.release_inc_dec(i),
                }
            }
            ParamsFor::ForOf(f) => {
                self.release_declaration(f.binding);
                self.release_iterable_variable(f.iterable);
            }
        }
        self.note(NodeKind::ParamsFor);
    }

    pub fn release_iterable_variable(&mut self, node: impl Into<Option<IterableVariable>>) {
        let Some(iterable) = node.into() else { return };
        match iterable {
            IterableVariable::Identifier(_) => {}
            IterableVariable::Call(call) => self.release_function_call(call),
            IterableVariable::Array(items) => self.release_array_content(items),
            IterableVariable::Object(entries) => self.release_object_content(entries),
        }
        self.note(NodeKind::IterableVariable);
    }

    pub fn release_for_loop(&mut self, node: impl Into<Option<ForLoop>>) {
        let Some(for_loop) = node.into() else { return };
        self.release_params_for(for_loop.params);
        self.release_code(for_loop.body);
        self.note(NodeKind::ForLoop);
    }

    pub fn release_while_loop(&mut self, node: impl Into<Option<WhileLoop>>) {
        let Some(while_loop) = node.into() else { return };
        self.release_expression(*while_loop.condition);
        self.release_code(while_loop.body);
        self.note(NodeKind::WhileLoop);
    }

    pub fn release_switch_content(&mut self, node: impl Into<Option<SwitchContent>>) {
        let Some(cases) = node.into() else { return };
        self.release_chain(cases, NodeKind::SwitchContent, |r, case| {
            r.release_expression(*case.case);
            r.release_code(case.body);
        });
    }

    pub fn release_switch_statement(&mut self, node: impl Into<Option<SwitchStatement>>) {
        let Some(switch) = node.into() else { return };
        self.release_expression(*switch.discriminant);
        self.release_switch_content(switch.cases);
        self.release_code(switch.default_body);
        self.note(NodeKind::SwitchStatement);
    }

    pub fn release_return_statement(&mut self, node: impl Into<Option<ReturnStatement>>) {
        let Some(ret) = node.into() else { return };
        self.release_expression(ret.value.map(|e| *e));
        self.note(NodeKind::ReturnStatement);
    }

    // ========================================================================
    // Fragments
    // ========================================================================

    /// Release whatever node a fragment holds.
    pub fn release_fragment(&mut self, node: impl Into<Option<Fragment>>) {
        let Some(fragment) = node.into() else { return };
        match fragment {
            Fragment::Constant(n) => self.release_constant(n),
            Fragment::Factor(n) => self.release_factor(n),
            Fragment::Expression(n) => self.release_expression(n),
            Fragment::IncDec(n) => self.release_inc_dec(n),
            Fragment::FunctionCall(n) => self.release_function_call(n),
            Fragment::ArgumentList(n) => self.release_argument_list(n),
            Fragment::ArrayContent(n) => self.release_array_content(n),
            Fragment::ObjectContent(n) => self.release_object_content(n),
            Fragment::VariableTypeList(n) => self.release_variable_type_list(n),
            Fragment::VariableList(n) => self.release_variable_list(n),
            Fragment::SwitchContent(n) => self.release_switch_content(n),
            Fragment::Code(n) => self.release_code(n),
            Fragment::VariableType(n) => self.release_variable_type(n),
            Fragment::Variable(n) => self.release_variable(n),
            Fragment::Declaration(n) => self.release_declaration(n),
            Fragment::Assignment(n) => self.release_assignment(n),
            Fragment::TypeDeclaration(n) => self.release_type_declaration(n),
            Fragment::FunctionBody(n) => self.release_function_body(n),
            Fragment::FunctionDeclaration(n) => self.release_function_declaration(n),
            Fragment::ArrowFunction(n) => self.release_arrow_function(n),
            Fragment::AsyncFunction(n) => self.release_async_function(n),
            Fragment::IfStatement(n) => self.release_if_statement(n),
            Fragment::ParamsFor(n) => self.release_params_for(n),
            Fragment::IterableVariable(n) => self.release_iterable_variable(n),
            Fragment::ForLoop(n) => self.release_for_loop(n),
            Fragment::WhileLoop(n) => self.release_while_loop(n),
            Fragment::SwitchStatement(n) => self.release_switch_statement(n),
            Fragment::ReturnStatement(n) => self.release_return_statement(n),
            Fragment::Statement(n) => self.release_statement(n),
            Fragment::Program(n) => self.release_program(n),
            Fragment::Type(_) | Fragment::PromiseType(_) => {}
        }
    }
}
