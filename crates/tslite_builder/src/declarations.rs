//! Builders for bindings, declarations, aggregate literals, assignments and
//! type declarations.

use tslite_ast::*;

use crate::builder::AstBuilder;
use crate::error::{BuildError, BuildResult};

impl AstBuilder {
    // ========================================================================
    // Bindings
    // ========================================================================

    pub fn variable_type(
        &mut self,
        name: Option<String>,
        annotation: TypeAnnotation,
    ) -> BuildResult<VariableType> {
        self.action("VariableType");
        match name {
            Some(name) => Ok(VariableType { name, annotation }),
            None => Err(self.fail(BuildError::MissingName {
                node: NodeKind::VariableType,
            })),
        }
    }

    pub fn variable_type_list(
        &mut self,
        binding: VariableType,
        rest: VariableTypeList,
    ) -> VariableTypeList {
        self.action("VariableTypeList");
        rest.cons(binding)
    }

    pub fn variable(&mut self, binding: VariableType, initializer: Initializer) -> Variable {
        self.action("Variable");
        Variable { binding, initializer }
    }

    pub fn variable_list(&mut self, variable: Variable, rest: VariableList) -> VariableList {
        self.action("VariableList");
        rest.cons(variable)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    pub fn declaration(&mut self, mutability: Mutability, variable: Variable) -> Declaration {
        self.action("Declaration");
        Declaration { mutability, variable }
    }

    /// `let x: T = expr;`
    pub fn expression_declaration(
        &mut self,
        mutability: Mutability,
        binding: VariableType,
        value: Expression,
    ) -> Declaration {
        let variable = self.variable(binding, Initializer::Expression(Box::new(value)));
        self.declaration(mutability, variable)
    }

    /// `let x: T[] = [a, b];`
    pub fn array_declaration(
        &mut self,
        mutability: Mutability,
        binding: VariableType,
        items: ArrayContent,
    ) -> Declaration {
        let variable = self.variable(binding, Initializer::Array(items));
        self.declaration(mutability, variable)
    }

    /// `let x = { k: v };`
    pub fn object_declaration(
        &mut self,
        mutability: Mutability,
        binding: VariableType,
        entries: ObjectContent,
    ) -> Declaration {
        let variable = self.variable(binding, Initializer::Object(entries));
        self.declaration(mutability, variable)
    }

    /// `let x: T = f(a);`
    pub fn call_declaration(
        &mut self,
        mutability: Mutability,
        binding: VariableType,
        call: FunctionCall,
    ) -> Declaration {
        let variable = self.variable(binding, Initializer::Call(call));
        self.declaration(mutability, variable)
    }

    /// `const f = (a: T): R => { ... };`
    pub fn closure_declaration(
        &mut self,
        mutability: Mutability,
        binding: VariableType,
        arrow: ArrowFunction,
    ) -> Declaration {
        let variable = self.variable(binding, Initializer::Arrow(Box::new(arrow)));
        self.declaration(mutability, variable)
    }

    /// `let x: T;`
    pub fn uninitialized_declaration(
        &mut self,
        mutability: Mutability,
        binding: VariableType,
    ) -> Declaration {
        let variable = self.variable(binding, Initializer::Uninitialized);
        self.declaration(mutability, variable)
    }

    // ========================================================================
    // Aggregate literals
    // ========================================================================

    pub fn array_content(&mut self, item: Expression, rest: ArrayContent) -> ArrayContent {
        self.action("ArrayContent");
        rest.cons(item)
    }

    pub fn object_content(
        &mut self,
        key: Option<String>,
        value: Expression,
        rest: ObjectContent,
    ) -> BuildResult<ObjectContent> {
        self.action("ObjectContent");
        match key {
            Some(key) => Ok(rest.cons(ObjectEntry { key, value })),
            None => {
                self.releaser.release_expression(value);
                self.releaser.release_object_content(rest);
                Err(self.fail(BuildError::MissingKey))
            }
        }
    }

    // ========================================================================
    // Assignment
    // ========================================================================

    pub fn assignment(
        &mut self,
        target: Option<String>,
        operator: AssignOperator,
        value: Expression,
    ) -> BuildResult<Assignment> {
        self.action("Assignment");
        match target {
            Some(target) => Ok(Assignment {
                target,
                operator,
                value: Box::new(value),
            }),
            None => {
                self.releaser.release_expression(value);
                Err(self.fail(BuildError::MissingName {
                    node: NodeKind::Assignment,
                }))
            }
        }
    }

    // ========================================================================
    // Type declarations
    // ========================================================================

    /// One enum member, optionally with an explicit value.
    pub fn enum_value(
        &mut self,
        name: Option<String>,
        value: Option<Expression>,
    ) -> BuildResult<Variable> {
        self.action("EnumValue");
        let Some(name) = name else {
            self.releaser.release_expression(value);
            return Err(self.fail(BuildError::MissingName { node: NodeKind::Variable }));
        };
        let initializer = match value {
            Some(value) => Initializer::Expression(Box::new(value)),
            None => Initializer::Uninitialized,
        };
        Ok(Variable {
            binding: VariableType {
                name,
                annotation: TypeAnnotation::default(),
            },
            initializer,
        })
    }

    fn type_declaration(
        &mut self,
        name: Option<String>,
        shape: TypeShape,
    ) -> BuildResult<TypeDeclaration> {
        match name {
            Some(name) => Ok(TypeDeclaration { name, shape }),
            None => {
                let releaser = &mut self.releaser;
                match shape {
                    TypeShape::Object(entries) => releaser.release_object_content(entries),
                    TypeShape::Array(items) => releaser.release_array_content(items),
                    TypeShape::Interface(members) => releaser.release_variable_type_list(members),
                    TypeShape::Enum(values) => releaser.release_variable_list(values),
                    TypeShape::Alias(expr) => releaser.release_expression(*expr),
                }
                Err(self.fail(BuildError::MissingName {
                    node: NodeKind::TypeDeclaration,
                }))
            }
        }
    }

    /// `type T = { k: v };`
    pub fn object_type_declaration(
        &mut self,
        name: Option<String>,
        entries: ObjectContent,
    ) -> BuildResult<TypeDeclaration> {
        self.action("ObjectTypeDeclaration");
        self.type_declaration(name, TypeShape::Object(entries))
    }

    /// `type T = [a, b];`
    pub fn array_type_declaration(
        &mut self,
        name: Option<String>,
        items: ArrayContent,
    ) -> BuildResult<TypeDeclaration> {
        self.action("ArrayTypeDeclaration");
        self.type_declaration(name, TypeShape::Array(items))
    }

    pub fn interface_declaration(
        &mut self,
        name: Option<String>,
        members: VariableTypeList,
    ) -> BuildResult<TypeDeclaration> {
        self.action("InterfaceDeclaration");
        self.type_declaration(name, TypeShape::Interface(members))
    }

    pub fn enum_declaration(
        &mut self,
        name: Option<String>,
        values: VariableList,
    ) -> BuildResult<TypeDeclaration> {
        self.action("EnumDeclaration");
        self.type_declaration(name, TypeShape::Enum(values))
    }

    /// `type T = expr;`
    pub fn alias_declaration(
        &mut self,
        name: Option<String>,
        aliased: Expression,
    ) -> BuildResult<TypeDeclaration> {
        self.action("AliasDeclaration");
        self.type_declaration(name, TypeShape::Alias(Box::new(aliased)))
    }
}
