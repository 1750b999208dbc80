// Combining strategies turn one data sequence per parameter into test cases.
//
// Only the sequential-dependent strategy ships today. It zips the sources in
// lockstep and either pads ragged sources or stops at the shortest one.

pub mod sequential;
pub use sequential::{CombineState, SequentialCases, SequentialDependentStrategy};

use crate::engine::{DataSequence, TestCase};

pub trait CombiningStrategy: Send + Sync {
    fn name(&self) -> &'static str;
    fn test_cases<'a>(&self, sources: Vec<DataSequence<'a>>) -> Vec<TestCase>;
}

/// Edge policy for sources of unequal length. Padding is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombiningPolicy {
    pub stop_at_shortest_source: bool,
}

impl CombiningPolicy {
    pub fn pad() -> Self {
        Self {
            stop_at_shortest_source: false,
        }
    }

    pub fn stop_at_shortest() -> Self {
        Self {
            stop_at_shortest_source: true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        if self.stop_at_shortest_source {
            "stop_at_shortest"
        } else {
            "pad"
        }
    }
}

impl From<CombiningPolicy> for SequentialDependentStrategy {
    fn from(policy: CombiningPolicy) -> Self {
        SequentialDependentStrategy::new(policy.stop_at_shortest_source)
    }
}
