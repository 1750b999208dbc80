//! Suites bundle the host world the engine needs: registered types, fixture
//! instances and parametrized test methods. They are usually loaded from
//! suite documents (see [`schema`]).

pub mod loader;
pub mod schema;

pub use loader::{discover_suite_files, load_suite_file, load_suites};
pub use schema::SuiteDocument;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::engine::{
    CombiningPolicy, Context, DataSource, ParameterDescriptor, Record, TestCase, TestCaseBuilder,
    TestMethod, Value,
};
use crate::error::SuiteError;
use crate::fixture::FixtureParameters;
use crate::types::{
    parse_pattern, parse_type, parse_type_with_params, Primitive, TypeDef, TypeRef, TypeRegistry,
};
use schema::{
    CompositeDocument, FixtureDocument, MethodDocument, ParameterDocument, SourceDocument,
    TypeDocument, ValueDocument,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NamedFixture {
    pub name: String,
    pub parameters: FixtureParameters,
}

impl NamedFixture {
    pub fn label(&self) -> String {
        self.parameters.display_name(&self.name)
    }
}

/// Cases generated for one method of one fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRun {
    pub suite: String,
    pub fixture: String,
    pub method: String,
    pub cases: Vec<TestCase>,
}

#[derive(Debug)]
pub struct Suite {
    pub name: String,
    pub registry: TypeRegistry,
    pub fixtures: Vec<NamedFixture>,
    pub methods: Vec<TestMethod>,
    pub source: Option<PathBuf>,
}

impl Suite {
    pub fn new(name: impl Into<String>, registry: TypeRegistry) -> Self {
        Self {
            name: name.into(),
            registry,
            fixtures: Vec::new(),
            methods: Vec::new(),
            source: None,
        }
    }

    pub fn with_fixture(mut self, name: impl Into<String>, parameters: FixtureParameters) -> Self {
        self.fixtures.push(NamedFixture {
            name: name.into(),
            parameters,
        });
        self
    }

    pub fn with_method(mut self, method: TestMethod) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Applies `policy` to every method, replacing what they declared.
    pub fn with_policy(mut self, policy: CombiningPolicy) -> Self {
        for method in &mut self.methods {
            method.policy = policy;
        }
        self
    }

    pub fn from_document(doc: SuiteDocument) -> Result<Self, SuiteError> {
        let mut registry = TypeRegistry::with_builtins();
        for ty in &doc.types {
            let def = convert_type(ty, &registry)?;
            registry.register(def);
        }

        let mut suite = Suite::new(&doc.name, TypeRegistry::new());
        for (index, fixture) in doc.fixtures.iter().enumerate() {
            let parameters = convert_fixture(fixture, &doc.type_params, &registry, index)?;
            let name = fixture
                .name
                .clone()
                .unwrap_or_else(|| format!("fixture{index}"));
            suite = suite.with_fixture(name, parameters);
        }
        for method in &doc.methods {
            suite = suite.with_method(convert_method(method, &doc.type_params, &registry)?);
        }
        suite.registry = registry;

        debug!(
            suite = %suite.name,
            types = doc.types.len(),
            fixtures = suite.fixtures.len(),
            methods = suite.methods.len(),
            "built suite"
        );
        Ok(suite)
    }

    pub fn run(&self) -> Result<Vec<MethodRun>, SuiteError> {
        self.run_with(&TestCaseBuilder::new())
    }

    /// Generates cases for every runnable fixture and method, in document
    /// order. Fixtures that are not runnable are skipped.
    pub fn run_with(&self, builder: &TestCaseBuilder) -> Result<Vec<MethodRun>, SuiteError> {
        let mut runs = Vec::new();
        for fixture in &self.fixtures {
            let label = fixture.label();
            if !fixture.parameters.run_state.is_runnable() {
                info!(
                    suite = %self.name,
                    fixture = %label,
                    run_state = fixture.parameters.run_state.as_str(),
                    "skipping fixture"
                );
                continue;
            }

            let ctx = Context::for_fixture(&self.registry, &fixture.parameters);
            for method in &self.methods {
                let cases = builder
                    .build(method, &ctx)
                    .map_err(|source| SuiteError::Binding {
                        fixture: label.clone(),
                        method: method.name.clone(),
                        source,
                    })?;
                runs.push(MethodRun {
                    suite: self.name.clone(),
                    fixture: label.clone(),
                    method: method.name.clone(),
                    cases,
                });
            }
        }
        Ok(runs)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn convert_type(doc: &TypeDocument, registry: &TypeRegistry) -> Result<TypeDef, SuiteError> {
    let mut def = TypeDef::new(&doc.name).with_params(doc.params.iter().cloned());
    for interface in &doc.implements {
        def = def.implements(parse_type_with_params(interface, &doc.params)?);
    }
    if let Some(base) = &doc.extends {
        def = def.extends(parse_type_with_params(base, &doc.params)?);
    }
    for field in &doc.fields {
        def = def.field(field);
    }
    for (name, value) in &doc.static_fields {
        def = def.static_field(name, convert_value(value, None, registry)?);
    }
    Ok(def)
}

fn convert_fixture(
    doc: &FixtureDocument,
    type_params: &[String],
    registry: &TypeRegistry,
    index: usize,
) -> Result<FixtureParameters, SuiteError> {
    if doc.type_args.len() != type_params.len() {
        return Err(SuiteError::TypeArgumentCount {
            fixture: doc.name.clone().unwrap_or_else(|| format!("fixture{index}")),
            expected: type_params.len(),
            found: doc.type_args.len(),
        });
    }

    let type_args = doc
        .type_args
        .iter()
        .map(|arg| parse_type(arg))
        .collect::<Result<Vec<_>, _>>()?;
    let arguments = doc
        .arguments
        .iter()
        .map(|arg| convert_value(arg, None, registry))
        .collect::<Result<Vec<_>, _>>()?;

    let mut parameters = FixtureParameters::new(arguments)
        .with_type_args(type_args)
        .with_run_state(doc.run_state);
    for (key, value) in &doc.properties {
        parameters
            .properties
            .add(key, convert_value(value, None, registry)?);
    }
    Ok(parameters)
}

fn convert_method(
    doc: &MethodDocument,
    type_params: &[String],
    registry: &TypeRegistry,
) -> Result<TestMethod, SuiteError> {
    let policy = if doc.stop_at_shortest_source {
        CombiningPolicy::stop_at_shortest()
    } else {
        CombiningPolicy::pad()
    };
    let mut method = TestMethod::new(&doc.name).with_policy(policy);
    for parameter in &doc.parameters {
        method = method.with_parameter(convert_parameter(parameter, type_params, registry)?);
    }
    Ok(method)
}

fn convert_parameter(
    doc: &ParameterDocument,
    type_params: &[String],
    registry: &TypeRegistry,
) -> Result<ParameterDescriptor, SuiteError> {
    let declared_type = parse_type_with_params(&doc.ty, type_params)?;
    if let Some(index) = declared_type.max_param().filter(|i| *i >= type_params.len()) {
        return Err(SuiteError::UnknownTypeParameter {
            expr: doc.ty.clone(),
            index,
            declared: type_params.len(),
        });
    }
    let mut parameter = ParameterDescriptor::new(&doc.name, declared_type.clone());
    for source in &doc.sources {
        let source = match source {
            SourceDocument::Direct => DataSource::Direct,
            SourceDocument::Indirect { owner, member } => {
                DataSource::indirect(parse_pattern(owner, type_params)?, member)
            }
            SourceDocument::Values { values } => DataSource::Values(
                values
                    .iter()
                    .map(|value| convert_value(value, Some(&declared_type), registry))
                    .collect::<Result<_, _>>()?,
            ),
        };
        parameter = parameter.with_source(source);
    }
    Ok(parameter)
}

/// Converts a document value. Integers become floats where a `float` is
/// expected.
fn convert_value(
    doc: &ValueDocument,
    expected: Option<&TypeRef>,
    registry: &TypeRegistry,
) -> Result<Value, SuiteError> {
    let value = match doc {
        ValueDocument::Null => Value::Null,
        ValueDocument::Bool(b) => Value::Bool(*b),
        ValueDocument::Int(i) if expected == Some(&TypeRef::Primitive(Primitive::Float)) => {
            Value::Float(*i as f64)
        }
        ValueDocument::Int(i) => Value::Int(*i),
        ValueDocument::Float(f) => Value::Float(*f),
        ValueDocument::Str(s) => Value::Str(s.clone()),
        ValueDocument::Composite(CompositeDocument::Array { element, items }) => {
            let element = parse_type(element)?;
            let items = convert_items(items, &element, registry)?;
            Value::array(element, items)
        }
        ValueDocument::Composite(CompositeDocument::Collection { ty, items }) => {
            let ty = parse_type(ty)?;
            let items = match registry.element_type_of(&ty) {
                Some(element) => convert_items(items, &element, registry)?,
                None => items
                    .iter()
                    .map(|item| convert_value(item, None, registry))
                    .collect::<Result<_, _>>()?,
            };
            Value::collection(ty, items)
        }
        ValueDocument::Composite(CompositeDocument::Record { ty, fields }) => {
            let mut record = Record::new(parse_type(ty)?);
            for (name, field) in fields {
                record = record.with_field(name, convert_value(field, None, registry)?);
            }
            Value::Record(record)
        }
    };
    Ok(value)
}

fn convert_items(
    items: &[ValueDocument],
    element: &TypeRef,
    registry: &TypeRegistry,
) -> Result<Vec<Value>, SuiteError> {
    items
        .iter()
        .map(|item| convert_value(item, Some(element), registry))
        .collect()
}
