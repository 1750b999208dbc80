use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use fixture_dependent::cli;
use fixture_dependent::error::IoError;
use fixture_dependent::logging::{self, Verbosity};
use fixture_dependent::output::OutputFormatter;
use fixture_dependent::suite;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));
    args.validate().context("Invalid arguments")?;

    let suites = suite::load_suites(&args.path)
        .with_context(|| format!("Failed to load suites from {}", args.path.display()))?;

    let suite_count = suites.len();
    let mut runs = Vec::new();
    for mut suite in suites {
        if let Some(policy) = args.policy_override() {
            suite = suite.with_policy(policy);
        }
        let suite_runs = suite
            .run()
            .with_context(|| format!("Failed to generate cases for suite '{}'", suite.name))?;
        tracing::info!(suite = %suite.name, methods = suite_runs.len(), "generated suite");
        runs.extend(suite_runs);
    }

    let output = OutputFormatter::format(&runs, suite_count, args.format)?;
    match args.output_file {
        Some(ref path) => {
            std::fs::write(path, &output).map_err(|e| IoError::write_error(path, e))?;
            tracing::info!(path = %path.display(), format = args.format.as_str(), "wrote output");
        }
        None => print!("{output}"),
    }

    Ok(())
}
