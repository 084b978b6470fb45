//! Type tags recorded on bindings, parameters and return positions.
//!
//! Types are raw enumerated tags only. Nothing here checks that a value
//! actually has the type it is annotated with.

use std::fmt;

use crate::chain::Chain;

/// A primitive data type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Number,
    String,
    Boolean,
    Any,
    Undefined,
    Void,
    Never,
    Unknown,
}

impl DataType {
    pub const ALL: [DataType; 8] = [
        DataType::Number,
        DataType::String,
        DataType::Boolean,
        DataType::Any,
        DataType::Undefined,
        DataType::Void,
        DataType::Never,
        DataType::Unknown,
    ];

    /// Look up a primitive by its source spelling.
    pub fn from_name(name: &str) -> Option<DataType> {
        match name {
            "number" => Some(DataType::Number),
            "string" => Some(DataType::String),
            "boolean" => Some(DataType::Boolean),
            "any" => Some(DataType::Any),
            "undefined" => Some(DataType::Undefined),
            "void" => Some(DataType::Void),
            "never" => Some(DataType::Never),
            "unknown" => Some(DataType::Unknown),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DataType::Number => "number",
            DataType::String => "string",
            DataType::Boolean => "boolean",
            DataType::Any => "any",
            DataType::Undefined => "undefined",
            DataType::Void => "void",
            DataType::Never => "never",
            DataType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve an optional type name. Absent and unrecognized names become `any`.
pub fn resolve_data_type(name: Option<&str>) -> DataType {
    name.and_then(DataType::from_name).unwrap_or(DataType::Any)
}

/// A primitive or its array form (`number` / `number[]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Primitive(DataType),
    Array(DataType),
}

impl TypeTag {
    pub fn element(self) -> DataType {
        match self {
            TypeTag::Primitive(t) | TypeTag::Array(t) => t,
        }
    }

    pub fn is_array(self) -> bool {
        matches!(self, TypeTag::Array(_))
    }
}

impl Default for TypeTag {
    fn default() -> Self {
        TypeTag::Primitive(DataType::Any)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeTag::Primitive(t) => write!(f, "{}", t),
            TypeTag::Array(t) => write!(f, "{}[]", t),
        }
    }
}

/// The ordered members of a union type.
pub type TypeList = Chain<TypeTag>;

/// The annotation attached to a binding or a return position.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeAnnotation {
    Single(TypeTag),
    Union(TypeList),
}

impl TypeAnnotation {
    /// Iterate the member tags; a single tag yields itself.
    pub fn tags(&self) -> Vec<TypeTag> {
        match self {
            TypeAnnotation::Single(tag) => vec![*tag],
            TypeAnnotation::Union(list) => list.iter().copied().collect(),
        }
    }
}

impl Default for TypeAnnotation {
    fn default() -> Self {
        TypeAnnotation::Single(TypeTag::default())
    }
}

impl From<TypeTag> for TypeAnnotation {
    fn from(tag: TypeTag) -> Self {
        TypeAnnotation::Single(tag)
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeAnnotation::Single(tag) => write!(f, "{}", tag),
            TypeAnnotation::Union(list) => {
                for (i, tag) in list.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", tag)?;
                }
                Ok(())
            }
        }
    }
}

/// `Promise<T>` around the declared return of an async function.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PromiseReturnType {
    pub resolved: TypeAnnotation,
}

impl fmt::Display for PromiseReturnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Promise<{}>", self.resolved)
    }
}

/// Which shape a user type declaration introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserType {
    Object,
    Array,
    Interface,
    Enum,
    Alias,
}
