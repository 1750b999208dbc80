//! Fixture Dependent
//!
//! Generates parametrized test cases whose data comes from the constructor
//! arguments of a (possibly generic) test fixture. Parameters draw their data
//! either directly from a fixture argument of the right element type or
//! indirectly through a member of an argument, and the per-parameter
//! sequences are combined position by position.

pub mod cli;
pub mod engine;
pub mod error;
pub mod fixture;
pub mod logging;
pub mod output;
pub mod suite;
pub mod types;

pub use engine::{
    CombiningPolicy, CombiningStrategy, Context, DataSource, ParameterDataProvider,
    ParameterDescriptor, SequentialDependentStrategy, TestCase, TestCaseBuilder, TestMethod,
    Value,
};
pub use error::{Error, Result};
pub use fixture::{FixtureParameters, PropertyBag, RunState};
pub use suite::{MethodRun, Suite};
pub use types::{TypeDef, TypePattern, TypeRef, TypeRegistry};
