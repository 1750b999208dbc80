use anyhow::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::engine::TestCase;
use crate::suite::MethodRun;

#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub suites: usize,
    pub total_methods: usize,
    pub total_cases: usize,
    pub methods: Vec<MethodOutput>,
}

#[derive(Debug, Serialize)]
pub struct MethodOutput {
    pub suite: String,
    pub fixture: String,
    pub method: String,
    pub cases: Vec<CaseOutput>,
}

#[derive(Debug, Serialize)]
pub struct CaseOutput {
    pub name: String,
    /// Absent arguments are written as `{"absent": true}`.
    pub arguments: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub padded: bool,
}

impl CaseOutput {
    pub fn from_case(case: &TestCase, method: &str) -> Self {
        let arguments = case
            .arguments
            .iter()
            .map(|argument| match argument {
                Some(value) => value.format_for_output(),
                None => serde_json::json!({ "absent": true }),
            })
            .collect();
        Self {
            name: case.display_name(method),
            arguments,
            padded: case.is_padded(),
        }
    }
}

pub struct OutputFormatter;

impl OutputFormatter {
    /// Renders `runs` gathered from `suites` loaded suite documents.
    pub fn format(runs: &[MethodRun], suites: usize, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&Self::build_output(
                runs, suites,
            ))?),
            OutputFormat::Text => Ok(Self::format_text(runs)),
        }
    }

    pub fn build_output(runs: &[MethodRun], suites: usize) -> JsonOutput {
        let methods: Vec<MethodOutput> = runs
            .iter()
            .map(|run| MethodOutput {
                suite: run.suite.clone(),
                fixture: run.fixture.clone(),
                method: run.method.clone(),
                cases: run
                    .cases
                    .iter()
                    .map(|case| CaseOutput::from_case(case, &run.method))
                    .collect(),
            })
            .collect();

        JsonOutput {
            suites,
            total_methods: methods.len(),
            total_cases: methods.iter().map(|m| m.cases.len()).sum(),
            methods,
        }
    }

    /// One line per case: `suite fixture.Method(args)`.
    fn format_text(runs: &[MethodRun]) -> String {
        let mut out = String::new();
        for run in runs {
            for case in &run.cases {
                out.push_str(&format!(
                    "{} {}.{}\n",
                    run.suite,
                    run.fixture,
                    case.display_name(&run.method)
                ));
            }
        }
        out
    }
}
