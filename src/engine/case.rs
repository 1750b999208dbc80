use crate::engine::Value;

/// One generated set of arguments, in parameter declaration order.
///
/// `None` marks a slot whose source ran out while padding; it is distinct
/// from a legitimate `Value::Null` or `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub arguments: Vec<Option<Value>>,
}

impl TestCase {
    pub fn new(arguments: Vec<Option<Value>>) -> Self {
        Self { arguments }
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.arguments.get(index).and_then(Option::as_ref)
    }

    pub fn is_absent(&self, index: usize) -> bool {
        matches!(self.arguments.get(index), Some(None))
    }

    pub fn is_padded(&self) -> bool {
        self.arguments.iter().any(Option::is_none)
    }

    /// Name in the form `Method(25, "abc")`.
    pub fn display_name(&self, method: &str) -> String {
        let arguments: Vec<String> = self
            .arguments
            .iter()
            .map(|argument| match argument {
                Some(value) => value.display(),
                None => "<absent>".to_string(),
            })
            .collect();
        format!("{method}({})", arguments.join(", "))
    }
}
