//! Direct binding: a parameter takes the items of the first fixture argument
//! whose element type fits it.

use pretty_assertions::assert_eq;

use fixture_dependent::engine::{locate_by_element_type, TestCase};
use fixture_dependent::error::BindingError;
use fixture_dependent::{
    FixtureParameters, ParameterDescriptor, TestMethod, TypeDef, TypeRef, TypeRegistry, Value,
};

use super::test_utils::{column, direct_method, Harness};

#[test]
fn test_arrays_feed_parameters_in_order() {
    let harness = Harness::with_arguments(
        vec![Value::ints([25, 100, -90]), Value::strs(["a", "b", "c"])],
        vec![],
    );
    let cases = harness
        .build(&direct_method(&[TypeRef::int(), TypeRef::string()]))
        .unwrap();

    assert_eq!(
        cases,
        vec![
            TestCase::new(vec![Some(Value::Int(25)), Some(Value::str("a"))]),
            TestCase::new(vec![Some(Value::Int(100)), Some(Value::str("b"))]),
            TestCase::new(vec![Some(Value::Int(-90)), Some(Value::str("c"))]),
        ]
    );
}

#[test]
fn test_first_qualifying_argument_wins() {
    let registry = TypeRegistry::with_builtins();
    let arguments = vec![Value::strs(["first"]), Value::strs(["second"])];

    let found = locate_by_element_type(&registry, &arguments, &TypeRef::string());
    assert_eq!(found, Some(&arguments[0]));

    let harness = Harness::with_arguments(arguments, vec![]);
    let cases = harness.build(&direct_method(&[TypeRef::string()])).unwrap();
    assert_eq!(column(&cases, 0), vec![Some(Value::str("first"))]);
}

#[test]
fn test_type_parameters_bind_to_fixture_type_args() {
    let harness = Harness::with_arguments(
        vec![Value::floats([33.0, f64::INFINITY, 0.01]), Value::bools([true, false, true])],
        vec![TypeRef::float(), TypeRef::bool()],
    );
    let cases = harness
        .build(&direct_method(&[TypeRef::Param(0), TypeRef::Param(1)]))
        .unwrap();

    assert_eq!(cases.len(), 3);
    assert_eq!(cases[1].get(0), Some(&Value::Float(f64::INFINITY)));
    assert_eq!(cases[1].get(1), Some(&Value::Bool(false)));
}

#[test]
fn test_missing_argument_fails() {
    let harness = Harness::with_arguments(vec![Value::ints([1, 2])], vec![]);
    let err = harness
        .build(&direct_method(&[TypeRef::int(), TypeRef::bool()]))
        .unwrap_err();

    assert_eq!(err, BindingError::missing_data_source("p1", "bool"));
}

#[test]
fn test_plain_string_is_not_a_sequence() {
    let harness = Harness::with_arguments(
        vec![Value::str("abc"), Value::strs(["x", "y"])],
        vec![],
    );
    let cases = harness.build(&direct_method(&[TypeRef::string()])).unwrap();
    assert_eq!(
        column(&cases, 0),
        vec![Some(Value::str("x")), Some(Value::str("y"))]
    );
}

#[test]
fn test_records_are_skipped_even_with_matching_type_args() {
    let data = fixture_dependent::engine::Record::new(TypeRef::generic(
        "TestData",
        vec![TypeRef::int(), TypeRef::string()],
    ));
    let harness = Harness::with_arguments(vec![data.into(), Value::ints([7])], vec![]);
    let cases = harness.build(&direct_method(&[TypeRef::int()])).unwrap();
    assert_eq!(column(&cases, 0), vec![Some(Value::Int(7))]);
}

#[test]
fn test_generic_collection_argument() {
    let harness = Harness::with_arguments(
        vec![Value::list(TypeRef::bool(), vec![Value::Bool(true), Value::Bool(false)])],
        vec![],
    );
    let cases = harness.build(&direct_method(&[TypeRef::bool()])).unwrap();
    assert_eq!(
        column(&cases, 0),
        vec![Some(Value::Bool(true)), Some(Value::Bool(false))]
    );
}

#[test]
fn test_non_generic_collection_uses_its_interfaces() {
    let mut registry = TypeRegistry::with_builtins();
    registry.register(
        TypeDef::new("IntBag").implements(TypeRef::generic("Collection", vec![TypeRef::int()])),
    );
    let bag = Value::collection(TypeRef::named("IntBag"), vec![Value::Int(4), Value::Int(5)]);
    let harness = Harness::new(registry, FixtureParameters::new(vec![bag]));

    let cases = harness.build(&direct_method(&[TypeRef::int()])).unwrap();
    assert_eq!(
        column(&cases, 0),
        vec![Some(Value::Int(4)), Some(Value::Int(5))]
    );
}

#[test]
fn test_element_assignable_through_supertype() {
    let lists = Value::array(
        TypeRef::generic("List", vec![TypeRef::string()]),
        vec![
            Value::list(TypeRef::string(), vec![Value::str("a"), Value::str("b")]),
            Value::list(TypeRef::string(), vec![Value::str("c")]),
        ],
    );
    let harness = Harness::with_arguments(vec![lists], vec![TypeRef::string()]);
    let method = TestMethod::new("TestMethod").with_parameter(ParameterDescriptor::direct(
        "b",
        TypeRef::generic("Collection", vec![TypeRef::Param(0)]),
    ));

    let cases = harness.build(&method).unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(
        cases[1].get(0),
        Some(&Value::list(TypeRef::string(), vec![Value::str("c")]))
    );
}

#[test]
fn test_object_parameter_takes_first_sequence() {
    let harness = Harness::with_arguments(
        vec![Value::Int(3), Value::bools([true]), Value::ints([1])],
        vec![],
    );
    let cases = harness.build(&direct_method(&[TypeRef::Object])).unwrap();
    assert_eq!(column(&cases, 0), vec![Some(Value::Bool(true))]);
}
