//! Catalogue of host types standing in for runtime reflection.
//!
//! Each registered type records its generic parameters, interfaces, base type
//! and members. Its full supertype list is linearized once, at registration,
//! so element-type inference and assignability never walk the hierarchy
//! again.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::{Primitive, TypeRef};
use crate::engine::Value;

pub type InstanceFn = Arc<dyn Fn(&Value) -> Value + Send + Sync>;
pub type StaticFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Getter behind a property or a zero-argument method.
#[derive(Clone)]
pub enum Accessor {
    Instance(InstanceFn),
    Static(StaticFn),
}

impl Accessor {
    pub fn instance(f: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Self::Instance(Arc::new(f))
    }

    pub fn shared(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self::Static(Arc::new(f))
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }

    /// Static accessors ignore `instance`.
    pub fn call(&self, instance: &Value) -> Value {
        match self {
            Self::Instance(f) => f(instance),
            Self::Static(f) => f(),
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance(_) => write!(f, "Accessor::Instance(..)"),
            Self::Static(_) => write!(f, "Accessor::Static(..)"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Binding {
    /// Read from the record's own field storage.
    Instance,
    Static(Value),
}

#[derive(Debug, Clone)]
pub enum MemberKind {
    Field(Binding),
    Property(Accessor),
    Method { arity: usize, body: Accessor },
    Event,
    NestedType,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Field(_) => "field",
            Self::Property(_) => "property",
            Self::Method { .. } => "method",
            Self::Event => "event",
            Self::NestedType => "nested_type",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemberDef {
    pub name: String,
    pub kind: MemberKind,
}

impl MemberDef {
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn event(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Event)
    }

    pub fn nested_type(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::NestedType)
    }

    pub fn method_with_arity(name: impl Into<String>, arity: usize, body: Accessor) -> Self {
        Self::new(name, MemberKind::Method { arity, body })
    }
}

#[derive(Debug, Clone)]
pub struct TypeDef {
    pub name: String,
    /// Generic parameter names; interfaces and base refer to them as `Param(i)`.
    pub params: Vec<String>,
    pub interfaces: Vec<TypeRef>,
    pub base: Option<TypeRef>,
    pub members: Vec<MemberDef>,
}

impl TypeDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            interfaces: Vec::new(),
            base: None,
            members: Vec::new(),
        }
    }

    pub fn with_params<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn implements(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn extends(mut self, base: TypeRef) -> Self {
        self.base = Some(base);
        self
    }

    pub fn member(mut self, member: MemberDef) -> Self {
        self.members.push(member);
        self
    }

    pub fn field(self, name: impl Into<String>) -> Self {
        self.member(MemberDef::new(name, MemberKind::Field(Binding::Instance)))
    }

    pub fn static_field(self, name: impl Into<String>, value: Value) -> Self {
        self.member(MemberDef::new(name, MemberKind::Field(Binding::Static(value))))
    }

    pub fn property(
        self,
        name: impl Into<String>,
        getter: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.member(MemberDef::new(
            name,
            MemberKind::Property(Accessor::instance(getter)),
        ))
    }

    pub fn static_property(
        self,
        name: impl Into<String>,
        getter: impl Fn() -> Value + Send + Sync + 'static,
    ) -> Self {
        self.member(MemberDef::new(
            name,
            MemberKind::Property(Accessor::shared(getter)),
        ))
    }

    pub fn method(
        self,
        name: impl Into<String>,
        body: impl Fn(&Value) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.member(MemberDef::method_with_arity(
            name,
            0,
            Accessor::instance(body),
        ))
    }

    pub fn static_method(
        self,
        name: impl Into<String>,
        body: impl Fn() -> Value + Send + Sync + 'static,
    ) -> Self {
        self.member(MemberDef::method_with_arity(name, 0, Accessor::shared(body)))
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

#[derive(Debug)]
struct RegisteredType {
    def: TypeDef,
    /// Depth-first, interfaces before the base chain, in terms of `def.params`.
    supertypes: Vec<TypeRef>,
}

#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<String, RegisteredType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the standard collection interfaces:
    /// `Iterable<T>`, `Collection<T>`, `List<T>`, `Set<T>`, `Pair<K, V>` and
    /// `Map<K, V>`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let t = || TypeRef::Param(0);
        registry.register(TypeDef::new("Iterable").with_params(["T"]));
        registry.register(
            TypeDef::new("Collection")
                .with_params(["T"])
                .implements(TypeRef::generic("Iterable", vec![t()])),
        );
        registry.register(
            TypeDef::new("List")
                .with_params(["T"])
                .implements(TypeRef::generic("Collection", vec![t()])),
        );
        registry.register(
            TypeDef::new("Set")
                .with_params(["T"])
                .implements(TypeRef::generic("Collection", vec![t()])),
        );
        registry.register(TypeDef::new("Pair").with_params(["K", "V"]));
        registry.register(
            TypeDef::new("Map").with_params(["K", "V"]).implements(TypeRef::generic(
                "Collection",
                vec![TypeRef::generic(
                    "Pair",
                    vec![TypeRef::Param(0), TypeRef::Param(1)],
                )],
            )),
        );
        registry
    }

    /// Registers `def`, replacing any previous type of the same name.
    ///
    /// Supertypes must be registered first; an unknown supertype contributes
    /// only itself to the linearization.
    pub fn register(&mut self, def: TypeDef) {
        let mut supertypes = Vec::new();
        for interface in &def.interfaces {
            supertypes.push(interface.clone());
            supertypes.extend(self.supertypes_of(interface));
        }
        if let Some(base) = def.base.as_ref().filter(|base| **base != TypeRef::Object) {
            supertypes.push(base.clone());
            supertypes.extend(self.supertypes_of(base));
        }

        debug!(
            name = %def.name,
            arity = def.arity(),
            supertypes = supertypes.len(),
            "registered type"
        );
        self.types
            .insert(def.name.clone(), RegisteredType { def, supertypes });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name).map(|registered| &registered.def)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Every supertype of `ty` with its generic arguments substituted.
    pub fn supertypes_of(&self, ty: &TypeRef) -> Vec<TypeRef> {
        match ty {
            TypeRef::Named { name, args } => self
                .types
                .get(name)
                .map(|registered| {
                    registered
                        .supertypes
                        .iter()
                        .map(|supertype| supertype.substitute(args))
                        .collect()
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Element type of `ty` when it behaves as a homogeneous collection.
    ///
    /// The first generic argument is the element position by convention, so
    /// `Map<K, V>` yields `K`. When several supertypes qualify, the first in
    /// declaration order wins.
    pub fn element_type_of(&self, ty: &TypeRef) -> Option<TypeRef> {
        let element = match ty {
            TypeRef::Primitive(Primitive::Str) => None,
            TypeRef::Array(element) => Some((**element).clone()),
            TypeRef::Named { args, .. } if !args.is_empty() => Some(args[0].clone()),
            TypeRef::Named { .. } => self
                .supertypes_of(ty)
                .into_iter()
                .find_map(|supertype| direct_element(&supertype)),
            _ => None,
        };
        trace!(ty = %ty, element = ?element.as_ref().map(ToString::to_string), "element type");
        element
    }

    /// Whether a value of type `source` can be used where `target` is expected.
    pub fn is_assignable(&self, target: &TypeRef, source: &TypeRef) -> bool {
        if target == source || *target == TypeRef::Object {
            return true;
        }
        // Arrays are covariant over reference elements only.
        if let (TypeRef::Array(target), TypeRef::Array(source)) = (target, source) {
            return !matches!(**source, TypeRef::Primitive(_)) && self.is_assignable(target, source);
        }
        self.supertypes_of(source).iter().any(|s| s == target)
    }

    /// Looks `name` up on `ty` and then along its base chain.
    pub fn find_member(&self, ty: &TypeRef, name: &str) -> Option<&MemberDef> {
        let mut visited = HashSet::new();
        let mut current = ty.name();
        while let Some(type_name) = current {
            if !visited.insert(type_name) {
                trace!(ty = %ty, at = type_name, "base chain cycle");
                return None;
            }
            let registered = self.types.get(type_name)?;
            if let Some(member) = registered.def.members.iter().find(|m| m.name == name) {
                return Some(member);
            }
            current = registered.def.base.as_ref().and_then(TypeRef::name);
        }
        None
    }
}

fn direct_element(ty: &TypeRef) -> Option<TypeRef> {
    match ty {
        TypeRef::Array(element) => Some((**element).clone()),
        TypeRef::Named { args, .. } => args.first().cloned(),
        _ => None,
    }
}
