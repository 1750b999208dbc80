use crate::engine::Value;
use crate::fixture::FixtureParameters;
use crate::types::{TypePattern, TypeRef, TypeRegistry};

/// Resolution context for one fixture instance.
///
/// Gives the provider access to:
/// - The type registry describing every host type
/// - The fixture's arguments, in the order the host supplied them
/// - The fixture's explicit type arguments, used to bind `#i` placeholders
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    registry: &'a TypeRegistry,
    arguments: &'a [Value],
    type_args: &'a [TypeRef],
}

impl<'a> Context<'a> {
    pub fn new(registry: &'a TypeRegistry, arguments: &'a [Value], type_args: &'a [TypeRef]) -> Self {
        Self {
            registry,
            arguments,
            type_args,
        }
    }

    pub fn for_fixture(registry: &'a TypeRegistry, fixture: &'a FixtureParameters) -> Self {
        Self::new(registry, &fixture.arguments, &fixture.type_args)
    }

    pub fn registry(&self) -> &'a TypeRegistry {
        self.registry
    }

    /// Fixture arguments in host order
    pub fn arguments(&self) -> &'a [Value] {
        self.arguments
    }

    /// Binds fixture type parameters in `ty`
    pub fn bind(&self, ty: &TypeRef) -> TypeRef {
        ty.substitute(self.type_args)
    }

    pub fn bind_pattern(&self, pattern: &TypePattern) -> TypePattern {
        match pattern {
            TypePattern::Exact(ty) => TypePattern::Exact(self.bind(ty)),
            generic => generic.clone(),
        }
    }
}
