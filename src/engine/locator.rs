//! Finds the fixture argument that supplies data for a parameter.
//!
//! Arguments are scanned in host order and the first match wins, so argument
//! order disambiguates between candidates that would both qualify.

use tracing::trace;

use crate::engine::Value;
use crate::types::{TypePattern, TypeRef, TypeRegistry};

/// First argument that is a sequence whose element type is assignable to
/// `desired`. Arguments with no inferable element type are skipped.
pub fn locate_by_element_type<'a>(
    registry: &TypeRegistry,
    arguments: &'a [Value],
    desired: &TypeRef,
) -> Option<&'a Value> {
    arguments.iter().enumerate().find_map(|(index, argument)| {
        let ty = argument.type_of()?;
        let element = registry.element_type_of(&ty)?;
        let accepted = registry.is_assignable(desired, &element) && argument.is_enumerable();
        trace!(
            index,
            argument = %ty,
            element = %element,
            desired = %desired,
            accepted,
            "element type candidate"
        );
        accepted.then_some(argument)
    })
}

/// First argument whose runtime type, or one of its supertypes, matches
/// `pattern`.
pub fn locate_by_owner<'a>(
    registry: &TypeRegistry,
    arguments: &'a [Value],
    pattern: &TypePattern,
) -> Option<&'a Value> {
    arguments.iter().find(|argument| {
        argument.type_of().is_some_and(|ty| {
            pattern.matches(&ty)
                || registry
                    .supertypes_of(&ty)
                    .iter()
                    .any(|supertype| pattern.matches(supertype))
        })
    })
}
