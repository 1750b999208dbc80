//! Fixture parameters in the shape a host runner needs to instantiate a
//! generic fixture.
//!
//! Hosts cannot infer the type arguments of a generic fixture from its
//! constructor arguments alone, so they are carried explicitly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::Value;
use crate::types::TypeRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    #[default]
    Runnable,
    NotRunnable,
    Explicit,
    Skipped,
    Ignored,
}

impl RunState {
    pub fn is_runnable(&self) -> bool {
        matches!(self, Self::Runnable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Runnable => "runnable",
            Self::NotRunnable => "not_runnable",
            Self::Explicit => "explicit",
            Self::Skipped => "skipped",
            Self::Ignored => "ignored",
        }
    }
}

/// Multi-valued string-keyed properties attached to a fixture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyBag {
    entries: BTreeMap<String, Vec<Value>>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: impl Into<String>, value: Value) {
        self.entries.entry(key.into()).or_default().push(value);
    }

    /// First value stored under `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).and_then(|values| values.first())
    }

    pub fn get_all(&self, key: &str) -> &[Value] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureParameters {
    pub arguments: Vec<Value>,
    pub properties: PropertyBag,
    pub run_state: RunState,
    pub type_args: Vec<TypeRef>,
    pub test_name: Option<String>,
}

impl FixtureParameters {
    /// Fixture built from several constructor arguments, with no type arguments.
    pub fn new(arguments: Vec<Value>) -> Self {
        Self {
            arguments,
            properties: PropertyBag::new(),
            run_state: RunState::Runnable,
            type_args: Vec::new(),
            test_name: None,
        }
    }

    /// Single-payload fixture with explicit type arguments.
    pub fn construct(payload: Value, type_args: Vec<TypeRef>) -> Self {
        Self::new(vec![payload]).with_type_args(type_args)
    }

    pub fn with_type_args(mut self, type_args: Vec<TypeRef>) -> Self {
        self.type_args = type_args;
        self
    }

    pub fn with_test_name(mut self, name: impl Into<String>) -> Self {
        self.test_name = Some(name.into());
        self
    }

    pub fn with_run_state(mut self, run_state: RunState) -> Self {
        self.run_state = run_state;
        self
    }

    /// `Name<int, string>` style label, using the test name when set.
    pub fn display_name(&self, fixture: &str) -> String {
        if let Some(name) = &self.test_name {
            return name.clone();
        }
        if self.type_args.is_empty() {
            return fixture.to_string();
        }
        let args: Vec<String> = self.type_args.iter().map(ToString::to_string).collect();
        format!("{fixture}<{}>", args.join(", "))
    }
}
