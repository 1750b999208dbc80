use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::engine::strategies::CombiningStrategy;
use crate::engine::{DataSequence, TestCase};

/// Builds test cases by advancing every parameter's source in parallel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequentialDependentStrategy {
    stop_at_shortest_source: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineState {
    Running,
    /// A source ran out under stop-at-shortest; the partial step was dropped.
    StoppedShort,
    Exhausted,
}

impl SequentialDependentStrategy {
    pub fn new(stop_at_shortest_source: bool) -> Self {
        Self {
            stop_at_shortest_source,
        }
    }

    pub fn stop_at_shortest_source(&self) -> bool {
        self.stop_at_shortest_source
    }

    /// Lazy form of [`CombiningStrategy::test_cases`].
    pub fn cases<'a>(&self, sources: Vec<DataSequence<'a>>) -> SequentialCases<'a> {
        SequentialCases {
            cursors: sources,
            stop_at_shortest_source: self.stop_at_shortest_source,
            state: CombineState::Running,
            emitted: 0,
        }
    }
}

impl CombiningStrategy for SequentialDependentStrategy {
    fn name(&self) -> &'static str {
        "sequential_dependent"
    }

    fn test_cases<'a>(&self, sources: Vec<DataSequence<'a>>) -> Vec<TestCase> {
        self.cases(sources).collect()
    }
}

pub struct SequentialCases<'a> {
    cursors: Vec<DataSequence<'a>>,
    stop_at_shortest_source: bool,
    state: CombineState,
    emitted: usize,
}

impl SequentialCases<'_> {
    pub fn state(&self) -> CombineState {
        self.state
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn halt(&mut self, state: CombineState) {
        self.state = state;
        debug!(state = ?state, emitted = self.emitted, "sequential combination finished");
    }
}

impl Iterator for SequentialCases<'_> {
    type Item = TestCase;

    fn next(&mut self) -> Option<TestCase> {
        if self.state != CombineState::Running {
            return None;
        }
        if self.cursors.is_empty() {
            self.halt(CombineState::Exhausted);
            return None;
        }

        let step: Vec<_> = self.cursors.iter_mut().map(DataSequence::try_next).collect();
        let exhausted = step.iter().filter(|value| value.is_none()).count();
        trace!(step = self.emitted, exhausted, "advanced cursors");

        if exhausted == step.len() {
            self.halt(CombineState::Exhausted);
            return None;
        }
        if exhausted > 0 && self.stop_at_shortest_source {
            self.halt(CombineState::StoppedShort);
            return None;
        }

        self.emitted += 1;
        Some(TestCase::new(step))
    }
}

impl FusedIterator for SequentialCases<'_> {}
