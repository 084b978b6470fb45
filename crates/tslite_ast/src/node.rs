//! AST node definitions.
//!
//! Every node exclusively owns its children. Recursive edges are boxed, list
//! edges are [`Chain`]s, and every node that can take one of several shapes
//! is an enum, so the populated field always agrees with the discriminant.

use crate::chain::Chain;
use crate::types::*;

// ============================================================================
// Chains
// ============================================================================

/// An ordered statement sequence: a function body or the whole program.
pub type Code = Chain<Statement>;
/// Elements of an array literal.
pub type ArrayContent = Chain<Expression>;
/// Entries of an object literal.
pub type ObjectContent = Chain<ObjectEntry>;
/// Arguments of a function call.
pub type ArgumentList = Chain<Expression>;
/// Parameters and interface members.
pub type VariableTypeList = Chain<VariableType>;
/// Enum values.
pub type VariableList = Chain<Variable>;
/// The case arms of a switch.
pub type SwitchContent = Chain<SwitchCase>;

// ============================================================================
// Literals
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    pub value: ConstantValue,
}

impl Constant {
    pub fn data_type(&self) -> DataType {
        match self.value {
            ConstantValue::Integer(_) | ConstantValue::Float(_) => DataType::Number,
            ConstantValue::String(_) => DataType::String,
            ConstantValue::Boolean(_) => DataType::Boolean,
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    Equal,
    StrictEqual,
    NotEqual,
    StrictNotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    And,
    Or,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Mod => "%",
            BinaryOperator::Pow => "**",
            BinaryOperator::Equal => "==",
            BinaryOperator::StrictEqual => "===",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::StrictNotEqual => "!==",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanEqual => ">=",
            BinaryOperator::And => "&&",
            BinaryOperator::Or => "||",
        }
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            BinaryOperator::Add
                | BinaryOperator::Sub
                | BinaryOperator::Mul
                | BinaryOperator::Div
                | BinaryOperator::Mod
                | BinaryOperator::Pow
        )
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOperator::And | BinaryOperator::Or)
    }

    pub fn is_comparison(self) -> bool {
        !self.is_arithmetic() && !self.is_logical()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Not,
    Await,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Binary(BinaryExpression),
    Unary(UnaryExpression),
    Factor(Factor),
}

/// An atomic operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Factor {
    Constant(Constant),
    /// A reference to a binding declared elsewhere. Owns only the name.
    Identifier(String),
    Parenthesized(Box<Expression>),
    Call(FunctionCall),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub callee: String,
    pub arguments: ArgumentList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncDecOperator {
    Increment,
    Decrement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Prefix,
    Postfix,
}

/// `++x`, `x++`, `--x`, `x--`.
#[derive(Debug, Clone, PartialEq)]
pub struct IncDec {
    pub operand: Box<Expression>,
    pub operator: IncDecOperator,
    pub fixity: Fixity,
}

// ============================================================================
// Bindings and declarations
// ============================================================================

/// A name with its type annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableType {
    pub name: String,
    pub annotation: TypeAnnotation,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Initializer {
    Expression(Box<Expression>),
    Array(ArrayContent),
    Object(ObjectContent),
    Call(FunctionCall),
    Arrow(Box<ArrowFunction>),
    Uninitialized,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub binding: VariableType,
    pub initializer: Initializer,
}

impl Variable {
    pub fn name(&self) -> &str {
        &self.binding.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    Let,
    Const,
    Var,
}

impl Mutability {
    pub fn keyword(self) -> &'static str {
        match self {
            Mutability::Let => "let",
            Mutability::Const => "const",
            Mutability::Var => "var",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub mutability: Mutability,
    pub variable: Variable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectEntry {
    pub key: String,
    pub value: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignOperator {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
}

impl AssignOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            AssignOperator::Assign => "=",
            AssignOperator::AddAssign => "+=",
            AssignOperator::SubAssign => "-=",
            AssignOperator::MulAssign => "*=",
            AssignOperator::DivAssign => "/=",
        }
    }
}

/// `target op= value;` on an existing binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: String,
    pub operator: AssignOperator,
    pub value: Box<Expression>,
}

// ============================================================================
// Type declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TypeShape {
    /// `type T = { k: v }`
    Object(ObjectContent),
    /// `type T = [a, b]`
    Array(ArrayContent),
    Interface(VariableTypeList),
    Enum(VariableList),
    Alias(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub name: String,
    pub shape: TypeShape,
}

impl TypeDeclaration {
    pub fn user_type(&self) -> UserType {
        match self.shape {
            TypeShape::Object(_) => UserType::Object,
            TypeShape::Array(_) => UserType::Array,
            TypeShape::Interface(_) => UserType::Interface,
            TypeShape::Enum(_) => UserType::Enum,
            TypeShape::Alias(_) => UserType::Alias,
        }
    }
}

// ============================================================================
// Callables
// ============================================================================

/// Statements plus an optional trailing `return` value. Never absent; an
/// empty body has neither.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionBody {
    pub statements: Code,
    pub return_value: Option<Box<Expression>>,
}

impl FunctionBody {
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty() && self.return_value.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDeclaration {
    pub name: String,
    pub parameters: VariableTypeList,
    pub return_type: TypeAnnotation,
    pub body: FunctionBody,
}

/// Always anonymous.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunction {
    pub parameters: VariableTypeList,
    pub return_type: TypeAnnotation,
    pub body: FunctionBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsyncFunction {
    pub name: String,
    pub parameters: VariableTypeList,
    pub return_type: PromiseReturnType,
    pub body: FunctionBody,
}

// ============================================================================
// Control flow
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Box<Expression>,
    pub then_body: Code,
    pub else_body: Option<Code>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForUpdate {
    Expression(Box<Expression>),
    IncDec(IncDec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassicFor {
    pub init: Declaration,
    pub condition: Box<Expression>,
    pub update: ForUpdate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum IterableVariable {
    Identifier(String),
    Call(FunctionCall),
    Array(ArrayContent),
    Object(ObjectContent),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForOf {
    pub binding: Declaration,
    pub iterable: IterableVariable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParamsFor {
    Classic(ClassicFor),
    ForOf(ForOf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    pub params: ParamsFor,
    pub body: Code,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    pub condition: Box<Expression>,
    pub body: Code,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub case: Box<Expression>,
    pub body: Code,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub discriminant: Box<Expression>,
    pub cases: SwitchContent,
    pub default_body: Option<Code>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReturnStatement {
    pub value: Option<Box<Expression>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Declaration(Declaration),
    Variable(Variable),
    Assignment(Assignment),
    Expression(Box<Expression>),
    IncDec(IncDec),
    If(IfStatement),
    For(ForLoop),
    While(WhileLoop),
    Switch(SwitchStatement),
    FunctionCall(FunctionCall),
    FunctionDeclaration(FunctionDeclaration),
    ArrowFunction(ArrowFunction),
    AsyncFunction(AsyncFunction),
    TypeDeclaration(TypeDeclaration),
    Return(ReturnStatement),
}

macro_rules! impl_statement_from {
    ($($node:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Statement {
                fn from(node: $node) -> Self {
                    Statement::$variant(node)
                }
            }
        )*
    };
}

impl_statement_from! {
    Declaration => Declaration,
    Variable => Variable,
    Assignment => Assignment,
    IncDec => IncDec,
    IfStatement => If,
    ForLoop => For,
    WhileLoop => While,
    SwitchStatement => Switch,
    FunctionCall => FunctionCall,
    FunctionDeclaration => FunctionDeclaration,
    ArrowFunction => ArrowFunction,
    AsyncFunction => AsyncFunction,
    TypeDeclaration => TypeDeclaration,
    ReturnStatement => Return,
}

impl From<Expression> for Statement {
    fn from(node: Expression) -> Self {
        Statement::Expression(Box::new(node))
    }
}

/// The root of a compilation unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub code: Code,
}

impl Program {
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.code.iter()
    }
}
