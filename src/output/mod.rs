mod formatter;

pub use formatter::{CaseOutput, JsonOutput, MethodOutput, OutputFormatter};
