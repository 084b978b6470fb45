//! Node kind tags.
//!
//! `NodeKind` names every node the teardown layer releases individually.
//! Chain kinds (`Code`, `ArrayContent`, ...) count one per link; the payload
//! of a link is counted under its own kind unless it is the link's private
//! entry struct (`ObjectEntry`, `SwitchCase`). Type tags and annotations are
//! plain values and have no kind.

use std::fmt;

/// The kind of a releasable AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum NodeKind {
    // ========================================================================
    // Expressions
    // ========================================================================
    Constant,
    Factor,
    Expression,
    IncDec,
    FunctionCall,

    // ========================================================================
    // Chains
    // ========================================================================
    ArgumentList,
    ArrayContent,
    ObjectContent,
    VariableTypeList,
    VariableList,
    SwitchContent,
    Code,

    // ========================================================================
    // Bindings and declarations
    // ========================================================================
    VariableType,
    Variable,
    Declaration,
    Assignment,
    TypeDeclaration,

    // ========================================================================
    // Callables
    // ========================================================================
    FunctionBody,
    FunctionDeclaration,
    ArrowFunction,
    AsyncFunction,

    // ========================================================================
    // Control flow
    // ========================================================================
    IfStatement,
    ParamsFor,
    IterableVariable,
    ForLoop,
    WhileLoop,
    SwitchStatement,
    ReturnStatement,

    // Root
    Program,
}

impl NodeKind {
    pub const COUNT: usize = NodeKind::Program as usize + 1;

    pub const ALL: [NodeKind; NodeKind::COUNT] = [
        NodeKind::Constant,
        NodeKind::Factor,
        NodeKind::Expression,
        NodeKind::IncDec,
        NodeKind::FunctionCall,
        NodeKind::ArgumentList,
        NodeKind::ArrayContent,
        NodeKind::ObjectContent,
        NodeKind::VariableTypeList,
        NodeKind::VariableList,
        NodeKind::SwitchContent,
        NodeKind::Code,
        NodeKind::VariableType,
        NodeKind::Variable,
        NodeKind::Declaration,
        NodeKind::Assignment,
        NodeKind::TypeDeclaration,
        NodeKind::FunctionBody,
        NodeKind::FunctionDeclaration,
        NodeKind::ArrowFunction,
        NodeKind::AsyncFunction,
        NodeKind::IfStatement,
        NodeKind::ParamsFor,
        NodeKind::IterableVariable,
        NodeKind::ForLoop,
        NodeKind::WhileLoop,
        NodeKind::SwitchStatement,
        NodeKind::ReturnStatement,
        NodeKind::Program,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Constant => "Constant",
            NodeKind::Factor => "Factor",
            NodeKind::Expression => "Expression",
            NodeKind::IncDec => "IncDec",
            NodeKind::FunctionCall => "FunctionCall",
            NodeKind::ArgumentList => "ArgumentList",
            NodeKind::ArrayContent => "ArrayContent",
            NodeKind::ObjectContent => "ObjectContent",
            NodeKind::VariableTypeList => "VariableTypeList",
            NodeKind::VariableList => "VariableList",
            NodeKind::SwitchContent => "SwitchContent",
            NodeKind::Code => "Code",
            NodeKind::VariableType => "VariableType",
            NodeKind::Variable => "Variable",
            NodeKind::Declaration => "Declaration",
            NodeKind::Assignment => "Assignment",
            NodeKind::TypeDeclaration => "TypeDeclaration",
            NodeKind::FunctionBody => "FunctionBody",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::ArrowFunction => "ArrowFunction",
            NodeKind::AsyncFunction => "AsyncFunction",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::ParamsFor => "ParamsFor",
            NodeKind::IterableVariable => "IterableVariable",
            NodeKind::ForLoop => "ForLoop",
            NodeKind::WhileLoop => "WhileLoop",
            NodeKind::SwitchStatement => "SwitchStatement",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::Program => "Program",
        }
    }

    /// Whether nodes of this kind are links of a chain.
    pub fn is_chain(self) -> bool {
        matches!(
            self,
            NodeKind::ArgumentList
                | NodeKind::ArrayContent
                | NodeKind::ObjectContent
                | NodeKind::VariableTypeList
                | NodeKind::VariableList
                | NodeKind::SwitchContent
                | NodeKind::Code
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The discriminant of a [`Statement`](crate::Statement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StatementKind {
    Declaration,
    Variable,
    Assignment,
    Expression,
    IncDec,
    If,
    For,
    While,
    Switch,
    FunctionCall,
    FunctionDeclaration,
    ArrowFunction,
    AsyncFunction,
    TypeDeclaration,
    Return,
}

impl StatementKind {
    pub const COUNT: usize = StatementKind::Return as usize + 1;

    pub fn name(self) -> &'static str {
        match self {
            StatementKind::Declaration => "Declaration",
            StatementKind::Variable => "Variable",
            StatementKind::Assignment => "Assignment",
            StatementKind::Expression => "Expression",
            StatementKind::IncDec => "IncDec",
            StatementKind::If => "If",
            StatementKind::For => "For",
            StatementKind::While => "While",
            StatementKind::Switch => "Switch",
            StatementKind::FunctionCall => "FunctionCall",
            StatementKind::FunctionDeclaration => "FunctionDeclaration",
            StatementKind::ArrowFunction => "ArrowFunction",
            StatementKind::AsyncFunction => "AsyncFunction",
            StatementKind::TypeDeclaration => "TypeDeclaration",
            StatementKind::Return => "Return",
        }
    }

    /// The node kind the statement payload is released as.
    pub fn node_kind(self) -> NodeKind {
        match self {
            StatementKind::Declaration => NodeKind::Declaration,
            StatementKind::Variable => NodeKind::Variable,
            StatementKind::Assignment => NodeKind::Assignment,
            StatementKind::Expression => NodeKind::Expression,
            StatementKind::IncDec => NodeKind::IncDec,
            StatementKind::If => NodeKind::IfStatement,
            StatementKind::For => NodeKind::ForLoop,
            StatementKind::While => NodeKind::WhileLoop,
            StatementKind::Switch => NodeKind::SwitchStatement,
            StatementKind::FunctionCall => NodeKind::FunctionCall,
            StatementKind::FunctionDeclaration => NodeKind::FunctionDeclaration,
            StatementKind::ArrowFunction => NodeKind::ArrowFunction,
            StatementKind::AsyncFunction => NodeKind::AsyncFunction,
            StatementKind::TypeDeclaration => NodeKind::TypeDeclaration,
            StatementKind::Return => NodeKind::ReturnStatement,
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_discriminant_order() {
        for (i, kind) in NodeKind::ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i, "{kind} out of order");
        }
    }

    #[test]
    fn test_chain_kinds() {
        let chains: Vec<_> = NodeKind::ALL.iter().filter(|k| k.is_chain()).collect();
        assert_eq!(chains.len(), 7);
        assert!(!NodeKind::Program.is_chain());
    }

    #[test]
    fn test_statement_kind_count() {
        assert_eq!(StatementKind::COUNT, 15);
    }
}
