//! Partially built subtrees.
//!
//! A grammar engine keeps the values of pending reductions on a stack. When
//! it aborts, whatever is still on that stack has no parent and has to be
//! released explicitly. `Fragment` is the value type such a stack holds: any
//! node kind, or a type annotation.

use crate::node::*;
use crate::node_kind::NodeKind;
use crate::types::{PromiseReturnType, TypeAnnotation};

#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Constant(Constant),
    Factor(Factor),
    Expression(Expression),
    IncDec(IncDec),
    FunctionCall(FunctionCall),
    ArgumentList(ArgumentList),
    ArrayContent(ArrayContent),
    ObjectContent(ObjectContent),
    VariableTypeList(VariableTypeList),
    VariableList(VariableList),
    SwitchContent(SwitchContent),
    Code(Code),
    VariableType(VariableType),
    Variable(Variable),
    Declaration(Declaration),
    Assignment(Assignment),
    TypeDeclaration(TypeDeclaration),
    FunctionBody(FunctionBody),
    FunctionDeclaration(FunctionDeclaration),
    ArrowFunction(ArrowFunction),
    AsyncFunction(AsyncFunction),
    IfStatement(IfStatement),
    ParamsFor(ParamsFor),
    IterableVariable(IterableVariable),
    ForLoop(ForLoop),
    WhileLoop(WhileLoop),
    SwitchStatement(SwitchStatement),
    ReturnStatement(ReturnStatement),
    Statement(Statement),
    Program(Program),
    Type(TypeAnnotation),
    PromiseType(PromiseReturnType),
}

impl Fragment {
    /// The node kind at the root of this fragment. A statement reports the
    /// kind of its payload, since the wrapper itself is never counted. Type
    /// annotations are not nodes and report `None`.
    pub fn node_kind(&self) -> Option<NodeKind> {
        Some(match self {
            Fragment::Constant(_) => NodeKind::Constant,
            Fragment::Factor(_) => NodeKind::Factor,
            Fragment::Expression(_) => NodeKind::Expression,
            Fragment::IncDec(_) => NodeKind::IncDec,
            Fragment::FunctionCall(_) => NodeKind::FunctionCall,
            Fragment::ArgumentList(_) => NodeKind::ArgumentList,
            Fragment::ArrayContent(_) => NodeKind::ArrayContent,
            Fragment::ObjectContent(_) => NodeKind::ObjectContent,
            Fragment::VariableTypeList(_) => NodeKind::VariableTypeList,
            Fragment::VariableList(_) => NodeKind::VariableList,
            Fragment::SwitchContent(_) => NodeKind::SwitchContent,
            Fragment::Code(_) => NodeKind::Code,
            Fragment::VariableType(_) => NodeKind::VariableType,
            Fragment::Variable(_) => NodeKind::Variable,
            Fragment::Declaration(_) => NodeKind::Declaration,
            Fragment::Assignment(_) => NodeKind::Assignment,
            Fragment::TypeDeclaration(_) => NodeKind::TypeDeclaration,
            Fragment::FunctionBody(_) => NodeKind::FunctionBody,
            Fragment::FunctionDeclaration(_) => NodeKind::FunctionDeclaration,
            Fragment::ArrowFunction(_) => NodeKind::ArrowFunction,
            Fragment::AsyncFunction(_) => NodeKind::AsyncFunction,
            Fragment::IfStatement(_) => NodeKind::IfStatement,
            Fragment::ParamsFor(_) => NodeKind::ParamsFor,
            Fragment::IterableVariable(_) => NodeKind::IterableVariable,
            Fragment::ForLoop(_) => NodeKind::ForLoop,
            Fragment::WhileLoop(_) => NodeKind::WhileLoop,
            Fragment::SwitchStatement(_) => NodeKind::SwitchStatement,
            Fragment::ReturnStatement(_) => NodeKind::ReturnStatement,
            Fragment::Statement(s) => s.payload_kind(),
            Fragment::Program(_) => NodeKind::Program,
            Fragment::Type(_) | Fragment::PromiseType(_) => return None,
        })
    }
}

macro_rules! impl_fragment_from {
    ($($node:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Fragment {
                fn from(node: $node) -> Self {
                    Fragment::$variant(node)
                }
            }
        )*
    };
}

// Chain aliases share one type, so they are wrapped explicitly.
impl_fragment_from! {
    Constant => Constant,
    Factor => Factor,
    Expression => Expression,
    IncDec => IncDec,
    FunctionCall => FunctionCall,
    VariableType => VariableType,
    Variable => Variable,
    Declaration => Declaration,
    Assignment => Assignment,
    TypeDeclaration => TypeDeclaration,
    FunctionBody => FunctionBody,
    FunctionDeclaration => FunctionDeclaration,
    ArrowFunction => ArrowFunction,
    AsyncFunction => AsyncFunction,
    IfStatement => IfStatement,
    ParamsFor => ParamsFor,
    IterableVariable => IterableVariable,
    ForLoop => ForLoop,
    WhileLoop => WhileLoop,
    SwitchStatement => SwitchStatement,
    ReturnStatement => ReturnStatement,
    Statement => Statement,
    Program => Program,
    TypeAnnotation => Type,
    PromiseReturnType => PromiseType,
}
