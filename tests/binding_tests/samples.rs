//! The generic fixture samples, assembled in code.

use pretty_assertions::assert_eq;

use fixture_dependent::engine::Record;
use fixture_dependent::{
    FixtureParameters, ParameterDescriptor, TestMethod, TypeDef, TypeRef, TypeRegistry, Value,
};

use super::test_utils::{open_generic, Harness};

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::with_builtins();
    registry.register(
        TypeDef::new("TestData")
            .with_params(["T", "K"])
            .field("keys")
            .field("values"),
    );
    registry
}

fn key_value_method() -> TestMethod {
    TestMethod::new("TestMethod")
        .with_parameter(ParameterDescriptor::indirect(
            "key",
            TypeRef::Param(0),
            open_generic("TestData", 2),
            "keys",
        ))
        .with_parameter(ParameterDescriptor::indirect(
            "value",
            TypeRef::Param(1),
            open_generic("TestData", 2),
            "values",
        ))
}

fn key_value_fixture(keys: Value, values: Value, type_args: Vec<TypeRef>) -> FixtureParameters {
    let data = Record::new(TypeRef::generic("TestData", type_args[..2].to_vec()))
        .with_field("keys", keys)
        .with_field("values", values);
    FixtureParameters::construct(data.into(), type_args)
}

#[test]
fn test_int_string_dictionary_fixture() {
    let fixture = key_value_fixture(
        Value::ints([25, 100, -90]),
        Value::strs(["aaaa", "b", "c"]),
        vec![
            TypeRef::int(),
            TypeRef::string(),
            TypeRef::generic("Map", vec![TypeRef::int(), TypeRef::string()]),
        ],
    );
    assert_eq!(
        fixture.display_name("GenericTestFixture"),
        "GenericTestFixture<int, string, Map<int, string>>"
    );

    let cases = Harness::new(registry(), fixture)
        .build(&key_value_method())
        .unwrap();
    let names: Vec<String> = cases
        .iter()
        .map(|case| case.display_name("TestMethod"))
        .collect();
    assert_eq!(
        names,
        vec![
            "TestMethod(25, \"aaaa\")",
            "TestMethod(100, \"b\")",
            "TestMethod(-90, \"c\")",
        ]
    );
}

#[test]
fn test_float_bool_fixture_keeps_nan() {
    let fixture = key_value_fixture(
        Value::floats([32.0, f64::NAN, -900.0]),
        Value::bools([false, false, true]),
        vec![
            TypeRef::float(),
            TypeRef::bool(),
            TypeRef::generic("Map", vec![TypeRef::float(), TypeRef::bool()]),
        ],
    );
    let cases = Harness::new(registry(), fixture)
        .build(&key_value_method())
        .unwrap();

    assert_eq!(cases.len(), 3);
    assert!(!cases.iter().any(|case| case.is_padded()));
    assert!(matches!(cases[1].get(0), Some(Value::Float(f)) if f.is_nan()));
    assert_eq!(cases[2].display_name("TestMethod"), "TestMethod(-900.0, true)");
}

#[test]
fn test_fixture_type_args_can_be_overridden() {
    let fixture = FixtureParameters::new(vec![Value::ints([1]), Value::strs(["a"])])
        .with_type_args(vec![TypeRef::string(), TypeRef::int()]);
    let method = TestMethod::new("TestMethod")
        .with_parameter(ParameterDescriptor::direct("a", TypeRef::Param(0)))
        .with_parameter(ParameterDescriptor::direct("b", TypeRef::Param(1)));

    let cases = Harness::new(registry(), fixture).build(&method).unwrap();
    assert_eq!(cases[0].get(0), Some(&Value::str("a")));
    assert_eq!(cases[0].get(1), Some(&Value::Int(1)));
}
