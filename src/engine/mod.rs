pub mod case;
pub mod context;
pub mod locator;
pub mod member;
pub mod provider;
pub mod sequence;
pub mod strategies;
pub mod value;

pub use case::TestCase;
pub use context::Context;
pub use locator::{locate_by_element_type, locate_by_owner};
pub use member::{member_value, resolve_member};
pub use provider::{DataSource, ParameterDataProvider, ParameterDescriptor};
pub use sequence::DataSequence;
pub use strategies::{CombiningPolicy, CombiningStrategy, SequentialDependentStrategy};
pub use value::{Record, Value};

use tracing::debug;

use crate::error::BindingError;

/// A parametrized test method: its parameters in declaration order and the
/// policy used to combine their data.
#[derive(Debug, Clone, PartialEq)]
pub struct TestMethod {
    pub name: String,
    pub parameters: Vec<ParameterDescriptor>,
    pub policy: CombiningPolicy,
}

impl TestMethod {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            policy: CombiningPolicy::default(),
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterDescriptor) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_policy(mut self, policy: CombiningPolicy) -> Self {
        self.policy = policy;
        self
    }
}

pub struct TestCaseBuilder {
    provider: ParameterDataProvider,
    strategy: Option<Box<dyn CombiningStrategy>>,
}

impl TestCaseBuilder {
    pub fn new() -> Self {
        Self {
            provider: ParameterDataProvider::new(),
            strategy: None,
        }
    }

    /// Replaces the per-method sequential strategy with `strategy`.
    pub fn with_strategy<S: CombiningStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    pub fn strategy_name(&self, method: &TestMethod) -> &'static str {
        match &self.strategy {
            Some(strategy) => strategy.name(),
            None => SequentialDependentStrategy::from(method.policy).name(),
        }
    }

    /// Generates the test cases of `method` for the fixture behind `ctx`.
    ///
    /// Every sourced parameter is resolved before anything is combined, so a
    /// binding error yields no cases at all. Parameters without a source do
    /// not take part in the combination.
    pub fn build(
        &self,
        method: &TestMethod,
        ctx: &Context<'_>,
    ) -> Result<Vec<TestCase>, BindingError> {
        let sourced: Vec<&ParameterDescriptor> = method
            .parameters
            .iter()
            .filter(|parameter| self.provider.has_data_for(parameter))
            .collect();
        if sourced.len() < method.parameters.len() {
            debug!(
                method = %method.name,
                skipped = method.parameters.len() - sourced.len(),
                "parameters without a data source are not combined"
            );
        }

        let sources = sourced
            .iter()
            .map(|parameter| self.provider.data_for(parameter, ctx))
            .collect::<Result<Vec<_>, _>>()?;

        let cases = match &self.strategy {
            Some(strategy) => strategy.test_cases(sources),
            None => SequentialDependentStrategy::from(method.policy).test_cases(sources),
        };
        debug!(
            method = %method.name,
            strategy = self.strategy_name(method),
            policy = method.policy.as_str(),
            cases = cases.len(),
            "generated test cases"
        );
        Ok(cases)
    }
}

impl Default for TestCaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
