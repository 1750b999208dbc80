use std::fmt;

use crate::engine::Value;

/// Lazily produced candidate values for one parameter.
///
/// Each resolution builds a fresh sequence with its own cursor. Once a
/// sequence reports exhaustion it stays exhausted.
pub struct DataSequence<'a> {
    items: Box<dyn Iterator<Item = Value> + 'a>,
}

impl<'a> DataSequence<'a> {
    pub fn new(items: impl Iterator<Item = Value> + 'a) -> Self {
        Self {
            items: Box::new(items.fuse()),
        }
    }

    /// Clones items out of a fixture argument on demand.
    pub fn borrowed(items: &'a [Value]) -> Self {
        Self::new(items.iter().cloned())
    }

    pub fn owned(items: Vec<Value>) -> Self {
        Self::new(items.into_iter())
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }

    /// Yields `self` to the end, then `next`.
    pub fn chain(self, next: DataSequence<'a>) -> Self {
        Self::new(self.items.chain(next.items))
    }

    /// Advances the cursor; `None` once the source has no more values.
    pub fn try_next(&mut self) -> Option<Value> {
        self.items.next()
    }
}

impl Iterator for DataSequence<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.try_next()
    }
}

impl fmt::Debug for DataSequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSequence").finish_non_exhaustive()
    }
}
