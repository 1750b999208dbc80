//! On-disk suite documents (YAML or JSON).
//!
//! ```yaml
//! name: simple
//! type_params: [T, K]
//! types:
//!   - name: TestData
//!     params: [T, K]
//!     fields: [tParams, kCollectionParams]
//! fixtures:
//!   - name: GenericTestFixture
//!     type_args: [int, string]
//!     arguments:
//!       - kind: record
//!         type: TestData<int, string>
//!         fields:
//!           tParams: { kind: array, element: int, items: [25, 100, -90] }
//! methods:
//!   - name: TestMethod
//!     parameters:
//!       - name: a
//!         type: T
//!         sources:
//!           - { kind: indirect, owner: "TestData<,>", member: tParams }
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::fixture::RunState;

#[derive(Debug, Clone, Deserialize)]
pub struct SuiteDocument {
    pub name: String,
    /// Names usable in parameter types, bound by each fixture's `type_args`.
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub types: Vec<TypeDocument>,
    #[serde(default)]
    pub fixtures: Vec<FixtureDocument>,
    #[serde(default)]
    pub methods: Vec<MethodDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeDocument {
    pub name: String,
    #[serde(default)]
    pub params: Vec<String>,
    #[serde(default)]
    pub implements: Vec<String>,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub static_fields: BTreeMap<String, ValueDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub type_args: Vec<String>,
    #[serde(default)]
    pub arguments: Vec<ValueDocument>,
    #[serde(default)]
    pub run_state: RunState,
    #[serde(default)]
    pub properties: BTreeMap<String, ValueDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MethodDocument {
    pub name: String,
    #[serde(default)]
    pub stop_at_shortest_source: bool,
    #[serde(default)]
    pub parameters: Vec<ParameterDocument>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParameterDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub sources: Vec<SourceDocument>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceDocument {
    Direct,
    Indirect { owner: String, member: String },
    Values { values: Vec<ValueDocument> },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueDocument {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Composite(CompositeDocument),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompositeDocument {
    Array {
        element: String,
        #[serde(default)]
        items: Vec<ValueDocument>,
    },
    Collection {
        #[serde(rename = "type")]
        ty: String,
        #[serde(default)]
        items: Vec<ValueDocument>,
    },
    Record {
        #[serde(rename = "type")]
        ty: String,
        #[serde(default)]
        fields: BTreeMap<String, ValueDocument>,
    },
}
