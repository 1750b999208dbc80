//! Structural runtime types.
//!
//! Rust has no reflection over host types, so fixture arguments carry an
//! explicit `TypeRef` and everything the engine needs to know about a named
//! type (generic parameters, interfaces, base type, members) lives in a
//! [`TypeRegistry`].

pub mod parse;
pub mod registry;

pub use parse::{parse_pattern, parse_type, parse_type_with_params};
pub use registry::{Accessor, Binding, MemberDef, MemberKind, TypeDef, TypeRegistry};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    Int,
    Float,
    Str,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "string",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bool" => Some(Self::Bool),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "string" => Some(Self::Str),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Root of every hierarchy; anything is assignable to it.
    Object,
    Primitive(Primitive),
    Array(Box<TypeRef>),
    Named { name: String, args: Vec<TypeRef> },
    /// Positional fixture type parameter, bound by the fixture's type arguments.
    Param(usize),
}

impl TypeRef {
    pub fn bool() -> Self {
        Self::Primitive(Primitive::Bool)
    }

    pub fn int() -> Self {
        Self::Primitive(Primitive::Int)
    }

    pub fn float() -> Self {
        Self::Primitive(Primitive::Float)
    }

    pub fn string() -> Self {
        Self::Primitive(Primitive::Str)
    }

    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self::Named {
            name: name.into(),
            args,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Replaces every `Param(i)` with `args[i]`. Unbound parameters are kept.
    pub fn substitute(&self, args: &[TypeRef]) -> TypeRef {
        match self {
            Self::Param(index) => args.get(*index).cloned().unwrap_or(Self::Param(*index)),
            Self::Array(element) => Self::Array(Box::new(element.substitute(args))),
            Self::Named { name, args: inner } => Self::Named {
                name: name.clone(),
                args: inner.iter().map(|arg| arg.substitute(args)).collect(),
            },
            other => other.clone(),
        }
    }

    pub fn has_params(&self) -> bool {
        match self {
            Self::Param(_) => true,
            Self::Array(element) => element.has_params(),
            Self::Named { args, .. } => args.iter().any(TypeRef::has_params),
            _ => false,
        }
    }

    /// Highest `Param(i)` index mentioned anywhere in the type.
    pub fn max_param(&self) -> Option<usize> {
        match self {
            Self::Param(index) => Some(*index),
            Self::Array(element) => element.max_param(),
            Self::Named { args, .. } => args.iter().filter_map(TypeRef::max_param).max(),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object => write!(f, "object"),
            Self::Primitive(primitive) => write!(f, "{}", primitive.as_str()),
            Self::Array(element) => write!(f, "{element}[]"),
            Self::Named { name, args } if args.is_empty() => write!(f, "{name}"),
            Self::Named { name, args } => {
                write!(f, "{name}<")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ">")
            }
            Self::Param(index) => write!(f, "#{index}"),
        }
    }
}

/// Owning-type selector for indirect lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypePattern {
    Exact(TypeRef),
    /// Open generic definition such as `TestData<,>`, matched by name and arity.
    Generic { name: String, arity: usize },
}

impl TypePattern {
    pub fn matches(&self, ty: &TypeRef) -> bool {
        match self {
            Self::Exact(expected) => expected == ty,
            Self::Generic { name, arity } => match ty {
                TypeRef::Named { name: actual, args } => actual == name && args.len() == *arity,
                _ => false,
            },
        }
    }
}

impl fmt::Display for TypePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(ty) => write!(f, "{ty}"),
            Self::Generic { name, arity } => {
                write!(f, "{name}<{}>", ",".repeat(arity.saturating_sub(1)))
            }
        }
    }
}
