//! Indirect binding: a parameter takes the items of a member of the first
//! fixture argument whose type matches an owner pattern.

use pretty_assertions::assert_eq;

use fixture_dependent::engine::Record;
use fixture_dependent::error::BindingError;
use fixture_dependent::types::{Accessor, MemberDef};
use fixture_dependent::{
    DataSource, FixtureParameters, ParameterDescriptor, TestMethod, TypeDef, TypePattern, TypeRef,
    TypeRegistry, Value,
};

use super::test_utils::{column, open_generic, Harness};

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::with_builtins();
    registry.register(
        TypeDef::new("TestData")
            .with_params(["T", "K"])
            .field("tParams")
            .field("kParams")
            .field("otherParam")
            .field("unset")
            .static_field("Shared", Value::ints([7, 8]))
            .static_property("SharedProperty", || Value::strs(["p"]))
            .property("Doubled", |instance| {
                let items = instance
                    .as_record()
                    .and_then(|record| record.field("tParams"))
                    .and_then(Value::as_items)
                    .unwrap_or_default();
                Value::array(
                    TypeRef::int(),
                    items
                        .iter()
                        .map(|item| match item {
                            Value::Int(i) => Value::Int(i * 2),
                            other => other.clone(),
                        })
                        .collect(),
                )
            })
            .method("Reversed", |instance| {
                let mut items = instance
                    .as_record()
                    .and_then(|record| record.field("tParams"))
                    .and_then(|value| value.clone().into_items())
                    .unwrap_or_default();
                items.reverse();
                Value::array(TypeRef::int(), items)
            })
            .member(MemberDef::event("Changed"))
            .member(MemberDef::nested_type("Inner"))
            .member(MemberDef::method_with_arity(
                "Take",
                1,
                Accessor::instance(|_| Value::Null),
            )),
    );
    registry
}

fn test_data() -> Value {
    Record::new(TypeRef::generic(
        "TestData",
        vec![TypeRef::int(), TypeRef::string()],
    ))
    .with_field("tParams", Value::ints([25, 100, -90]))
    .with_field("kParams", Value::strs(["a", "b", "c"]))
    .with_field("otherParam", Value::str("nyaa"))
    .with_field("undeclared", Value::bools([true]))
    .into()
}

fn harness() -> Harness {
    Harness::new(
        registry(),
        FixtureParameters::construct(test_data(), vec![TypeRef::int(), TypeRef::string()]),
    )
}

fn member_method(member: &str) -> TestMethod {
    TestMethod::new("TestMethod").with_parameter(ParameterDescriptor::indirect(
        "a",
        TypeRef::Param(0),
        open_generic("TestData", 2),
        member,
    ))
}

fn first_column(member: &str) -> Vec<Option<Value>> {
    column(&harness().build(&member_method(member)).unwrap(), 0)
}

#[test]
fn test_open_generic_owner_and_field() {
    let method = member_method("tParams").with_parameter(ParameterDescriptor::indirect(
        "b",
        TypeRef::Param(1),
        open_generic("TestData", 2),
        "kParams",
    ));
    let cases = harness().build(&method).unwrap();

    assert_eq!(cases.len(), 3);
    assert_eq!(
        cases[2].display_name("TestMethod"),
        "TestMethod(-90, \"c\")"
    );
}

#[test]
fn test_property_and_method_members() {
    assert_eq!(
        first_column("Doubled"),
        vec![Some(Value::Int(50)), Some(Value::Int(200)), Some(Value::Int(-180))]
    );
    assert_eq!(first_column("Reversed")[0], Some(Value::Int(-90)));
}

#[test]
fn test_static_members() {
    assert_eq!(
        first_column("Shared"),
        vec![Some(Value::Int(7)), Some(Value::Int(8))]
    );
    assert_eq!(first_column("SharedProperty"), vec![Some(Value::str("p"))]);
}

#[test]
fn test_undeclared_record_field_is_readable() {
    assert_eq!(first_column("undeclared"), vec![Some(Value::Bool(true))]);
}

#[test]
fn test_unsupported_member_kinds() {
    for (member, kind) in [
        ("Changed", "event"),
        ("Inner", "nested_type"),
        ("Take", "method with 1 parameters"),
    ] {
        let err = harness().build(&member_method(member)).unwrap_err();
        assert_eq!(
            err,
            BindingError::unsupported_member_kind("TestData<int, string>", member, kind)
        );
    }
}

#[test]
fn test_member_not_found() {
    let err = harness().build(&member_method("missing")).unwrap_err();
    assert_eq!(
        err,
        BindingError::member_not_found("TestData<int, string>", "missing")
    );
}

#[test]
fn test_non_sequence_members_fail() {
    let err = harness().build(&member_method("otherParam")).unwrap_err();
    assert_eq!(
        err,
        BindingError::not_enumerable("TestData<int, string>", "otherParam", "string")
    );

    let err = harness().build(&member_method("unset")).unwrap_err();
    assert_eq!(
        err,
        BindingError::not_enumerable("TestData<int, string>", "unset", "null")
    );
}

#[test]
fn test_missing_owner_fails() {
    let harness = Harness::with_arguments(vec![Value::ints([1])], vec![TypeRef::int()]);
    let err = harness.build(&member_method("tParams")).unwrap_err();
    assert_eq!(err, BindingError::missing_data_source("a", "TestData<,>"));
}

#[test]
fn test_inherited_member_and_base_owner() {
    let mut registry = TypeRegistry::with_builtins();
    registry.register(TypeDef::new("Base").field("items"));
    registry.register(TypeDef::new("Derived").extends(TypeRef::named("Base")));

    let derived = Record::new(TypeRef::named("Derived")).with_field("items", Value::ints([1, 2]));
    let harness = Harness::new(registry, FixtureParameters::new(vec![derived.into()]));
    let method = TestMethod::new("TestMethod").with_parameter(ParameterDescriptor::indirect(
        "n",
        TypeRef::int(),
        TypePattern::Exact(TypeRef::named("Base")),
        "items",
    ));

    let cases = harness.build(&method).unwrap();
    assert_eq!(
        column(&cases, 0),
        vec![Some(Value::Int(1)), Some(Value::Int(2))]
    );
}

#[test]
fn test_dependent_sources_come_before_inline_values() {
    let method = TestMethod::new("TestMethod").with_parameter(
        ParameterDescriptor::new("a", TypeRef::Param(0))
            .with_source(DataSource::Values(vec![Value::Int(0)]))
            .with_source(DataSource::indirect(open_generic("TestData", 2), "tParams")),
    );
    let cases = harness().build(&method).unwrap();

    assert_eq!(
        column(&cases, 0),
        vec![
            Some(Value::Int(25)),
            Some(Value::Int(100)),
            Some(Value::Int(-90)),
            Some(Value::Int(0)),
        ]
    );
}
