//! Sequential combination of per-parameter data.

use pretty_assertions::assert_eq;

use fixture_dependent::engine::strategies::CombineState;
use fixture_dependent::engine::DataSequence;
use fixture_dependent::{
    CombiningPolicy, CombiningStrategy, SequentialDependentStrategy, TestCase, TypeRef, Value,
};

use super::test_utils::{direct_method, Harness};

fn source(values: &[i64]) -> DataSequence<'static> {
    DataSequence::owned(values.iter().copied().map(Value::Int).collect())
}

fn uneven() -> Vec<DataSequence<'static>> {
    vec![source(&[1, 2, 3]), source(&[10])]
}

#[test]
fn test_pad_emits_longest_length() {
    let cases = SequentialDependentStrategy::new(false).test_cases(uneven());

    assert_eq!(cases.len(), 3);
    assert_eq!(
        cases[0],
        TestCase::new(vec![Some(Value::Int(1)), Some(Value::Int(10))])
    );
    assert!(cases[1].is_absent(1));
    assert!(cases[2].is_absent(1));
    assert_eq!(cases[2].get(0), Some(&Value::Int(3)));
}

#[test]
fn test_stop_at_shortest_emits_one() {
    let strategy = SequentialDependentStrategy::new(true);
    let mut cases = strategy.cases(uneven());

    assert_eq!(
        cases.next(),
        Some(TestCase::new(vec![Some(Value::Int(1)), Some(Value::Int(10))]))
    );
    assert_eq!(cases.next(), None);
    assert_eq!(cases.state(), CombineState::StoppedShort);
    assert_eq!(cases.next(), None);
    assert_eq!(cases.emitted(), 1);
}

#[test]
fn test_equal_lengths_are_stable_across_runs() {
    let strategy = SequentialDependentStrategy::new(false);
    let run = || strategy.test_cases(vec![source(&[1, 2, 3]), source(&[4, 5, 6])]);

    let first = run();
    assert_eq!(first.len(), 3);
    assert!(first.iter().all(|case| !case.is_padded()));
    assert_eq!(
        first[2],
        TestCase::new(vec![Some(Value::Int(3)), Some(Value::Int(6))])
    );
    assert_eq!(first, run());
}

#[test]
fn test_empty_sources_emit_nothing() {
    for stop in [false, true] {
        let strategy = SequentialDependentStrategy::new(stop);
        let mut cases = strategy.cases(vec![source(&[]), source(&[])]);
        assert_eq!(cases.next(), None);
        assert_eq!(cases.state(), CombineState::Exhausted);

        assert!(strategy.test_cases(Vec::new()).is_empty());
    }
}

#[test]
fn test_absent_is_distinct_from_null_and_nan() {
    let sources = vec![
        DataSequence::owned(vec![Value::Null, Value::Float(f64::NAN)]),
        DataSequence::owned(vec![Value::Null]),
    ];
    let cases = SequentialDependentStrategy::new(false).test_cases(sources);

    assert_eq!(cases[0].get(1), Some(&Value::Null));
    assert!(!cases[0].is_absent(1));
    assert!(matches!(cases[1].get(0), Some(Value::Float(f)) if f.is_nan()));
    assert!(cases[1].is_absent(1));
    assert_eq!(cases[1].get(1), None);
}

#[test]
fn test_method_policy_drives_builder() {
    let harness = Harness::with_arguments(
        vec![Value::ints([1, 2, 3]), Value::strs(["only"])],
        vec![],
    );
    let method = direct_method(&[TypeRef::int(), TypeRef::string()]);

    let padded = harness.build(&method).unwrap();
    assert_eq!(padded.len(), 3);
    assert_eq!(
        padded[1].display_name("TestMethod"),
        "TestMethod(2, <absent>)"
    );

    let shortest = harness
        .build(&method.with_policy(CombiningPolicy::stop_at_shortest()))
        .unwrap();
    assert_eq!(shortest.len(), 1);
}

#[test]
fn test_inline_values_concatenate() {
    use fixture_dependent::{DataSource, ParameterDescriptor, TestMethod};

    let harness = Harness::with_arguments(vec![Value::ints([1])], vec![]);
    let method = TestMethod::new("TestMethod").with_parameter(
        ParameterDescriptor::direct("n", TypeRef::int())
            .with_source(DataSource::Values(vec![Value::Int(2)]))
            .with_source(DataSource::Values(vec![Value::Int(3)])),
    );

    let cases = harness.build(&method).unwrap();
    let values: Vec<_> = cases.iter().map(|case| case.get(0).cloned()).collect();
    assert_eq!(
        values,
        vec![
            Some(Value::Int(1)),
            Some(Value::Int(2)),
            Some(Value::Int(3))
        ]
    );
}
