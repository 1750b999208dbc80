//! Uniform member access over fields, properties and parameterless methods.

use tracing::trace;

use crate::engine::Value;
use crate::error::BindingError;
use crate::types::{Binding, MemberDef, MemberKind, TypeRegistry};

/// Reads `member` off `instance`. Static members ignore `instance`.
///
/// An instance field missing from the record reads as `Null`, the value of a
/// field that was never assigned.
pub fn member_value(member: &MemberDef, instance: &Value) -> Result<Value, BindingError> {
    match &member.kind {
        MemberKind::Field(Binding::Static(value)) => Ok(value.clone()),
        MemberKind::Field(Binding::Instance) => Ok(instance
            .as_record()
            .and_then(|record| record.field(&member.name))
            .cloned()
            .unwrap_or_default()),
        MemberKind::Property(getter) => Ok(getter.call(instance)),
        MemberKind::Method { arity: 0, body } => Ok(body.call(instance)),
        MemberKind::Method { arity, .. } => Err(BindingError::unsupported_member_kind(
            owner_name(instance),
            &member.name,
            format!("method with {arity} parameters"),
        )),
        kind @ (MemberKind::Event | MemberKind::NestedType) => Err(
            BindingError::unsupported_member_kind(owner_name(instance), &member.name, kind.as_str()),
        ),
    }
}

/// Finds `name` on the runtime type of `instance` (or its bases) and reads it.
///
/// Record fields the registry does not declare are still readable.
pub fn resolve_member(
    registry: &TypeRegistry,
    instance: &Value,
    name: &str,
) -> Result<Value, BindingError> {
    let declared = instance
        .type_of()
        .and_then(|ty| registry.find_member(&ty, name));
    if let Some(member) = declared {
        trace!(owner = %owner_name(instance), member = name, kind = member.kind.as_str(), "member");
        return member_value(member, instance);
    }

    instance
        .as_record()
        .and_then(|record| record.field(name))
        .cloned()
        .ok_or_else(|| BindingError::member_not_found(owner_name(instance), name))
}

fn owner_name(instance: &Value) -> String {
    instance
        .type_of()
        .map(|ty| ty.to_string())
        .unwrap_or_else(|| "null".to_string())
}
