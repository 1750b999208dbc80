//! Supplies the candidate values for a single test parameter.
//!
//! A parameter names one or more data sources. Dependent sources (direct and
//! indirect) read from the fixture's arguments; inline values come from the
//! parameter itself. Dependent sources are enumerated first, then inline
//! values, each group in declaration order.

use tracing::debug;

use crate::engine::locator::{locate_by_element_type, locate_by_owner};
use crate::engine::member::resolve_member;
use crate::engine::{Context, DataSequence, Value};
use crate::error::BindingError;
use crate::types::{TypePattern, TypeRef};

#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Fixture argument whose element type matches the parameter's type.
    Direct,
    /// Named member of the first fixture argument whose type matches `owner`.
    Indirect { owner: TypePattern, member: String },
    Values(Vec<Value>),
}

impl DataSource {
    pub fn indirect(owner: TypePattern, member: impl Into<String>) -> Self {
        Self::Indirect {
            owner,
            member: member.into(),
        }
    }

    pub fn is_dependent(&self) -> bool {
        !matches!(self, Self::Values(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Indirect { .. } => "indirect",
            Self::Values(_) => "values",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    pub name: String,
    pub declared_type: TypeRef,
    pub sources: Vec<DataSource>,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            declared_type,
            sources: Vec::new(),
        }
    }

    pub fn direct(name: impl Into<String>, declared_type: TypeRef) -> Self {
        Self::new(name, declared_type).with_source(DataSource::Direct)
    }

    pub fn indirect(
        name: impl Into<String>,
        declared_type: TypeRef,
        owner: TypePattern,
        member: impl Into<String>,
    ) -> Self {
        Self::new(name, declared_type).with_source(DataSource::indirect(owner, member))
    }

    pub fn with_source(mut self, source: DataSource) -> Self {
        self.sources.push(source);
        self
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ParameterDataProvider;

impl ParameterDataProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn has_data_for(&self, parameter: &ParameterDescriptor) -> bool {
        !parameter.sources.is_empty()
    }

    /// Builds a fresh sequence for `parameter`, independent of any other.
    pub fn data_for<'a>(
        &self,
        parameter: &ParameterDescriptor,
        ctx: &Context<'a>,
    ) -> Result<DataSequence<'a>, BindingError> {
        let dependent = parameter.sources.iter().filter(|s| s.is_dependent());
        let inline = parameter.sources.iter().filter(|s| !s.is_dependent());

        let mut sequence = DataSequence::empty();
        for source in dependent.chain(inline) {
            debug!(parameter = %parameter.name, source = source.as_str(), "resolving data source");
            let data = match source {
                DataSource::Direct => self.direct_data(parameter, ctx)?,
                DataSource::Indirect { owner, member } => {
                    self.indirect_data(parameter, owner, member, ctx)?
                }
                DataSource::Values(values) => {
                    DataSequence::owned(inline_values(values, &ctx.bind(&parameter.declared_type)))
                }
            };
            sequence = sequence.chain(data);
        }
        Ok(sequence)
    }

    fn direct_data<'a>(
        &self,
        parameter: &ParameterDescriptor,
        ctx: &Context<'a>,
    ) -> Result<DataSequence<'a>, BindingError> {
        let expected = ctx.bind(&parameter.declared_type);
        locate_by_element_type(ctx.registry(), ctx.arguments(), &expected)
            .and_then(|argument| argument.as_items())
            .map(DataSequence::borrowed)
            .ok_or_else(|| BindingError::missing_data_source(&parameter.name, expected.to_string()))
    }

    fn indirect_data<'a>(
        &self,
        parameter: &ParameterDescriptor,
        owner: &TypePattern,
        member: &str,
        ctx: &Context<'a>,
    ) -> Result<DataSequence<'a>, BindingError> {
        let owner = ctx.bind_pattern(owner);
        let instance = locate_by_owner(ctx.registry(), ctx.arguments(), &owner)
            .ok_or_else(|| BindingError::missing_data_source(&parameter.name, owner.to_string()))?;

        let value = resolve_member(ctx.registry(), instance, member)?;
        let found = value
            .type_of()
            .map(|ty| ty.to_string())
            .unwrap_or_else(|| "null".to_string());
        value.into_items().map(DataSequence::owned).ok_or_else(|| {
            let owner_type = instance
                .type_of()
                .map(|ty| ty.to_string())
                .unwrap_or_else(|| owner.to_string());
            BindingError::not_enumerable(owner_type, member, found)
        })
    }
}

/// Inline integers read as floats where the bound parameter type is `float`.
fn inline_values(values: &[Value], expected: &TypeRef) -> Vec<Value> {
    if *expected != TypeRef::float() {
        return values.to_vec();
    }
    values
        .iter()
        .map(|value| match value {
            Value::Int(i) => Value::Float(*i as f64),
            other => other.clone(),
        })
        .collect()
}
