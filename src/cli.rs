use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::engine::CombiningPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Pad exhausted parameters with an absent marker
    Pad,
    /// Stop at the first exhausted parameter
    StopAtShortest,
}

#[derive(Parser, Debug)]
#[command(name = "fixture-dependent")]
#[command(about = "Generate test cases for generic fixtures from their constructor arguments", long_about = None)]
pub struct Args {
    /// Suite file or directory of suite files (.yaml, .yml, .json)
    #[arg(long, value_name = "PATH")]
    pub path: PathBuf,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Output format (json, text)
    #[arg(short = 'f', long, default_value = "json")]
    pub format: OutputFormat,

    /// Combining policy for every method, overriding the suite documents
    #[arg(long)]
    pub policy: Option<Policy>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_path(&self.path)?;
        if let Some(ref output) = self.output_file {
            if output.is_dir() {
                anyhow::bail!("Output file is a directory: {}", output.display());
            }
        }
        Ok(())
    }

    pub fn policy_override(&self) -> Option<CombiningPolicy> {
        self.policy.map(Policy::to_combining_policy)
    }
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    if path.is_file() {
        std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    } else if path.is_dir() {
        std::fs::metadata(path)
            .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    } else {
        anyhow::bail!("Path is neither a file nor a directory: {}", path.display());
    }

    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "text",
        }
    }
}

impl Policy {
    pub fn to_combining_policy(self) -> CombiningPolicy {
        match self {
            Policy::Pad => CombiningPolicy::pad(),
            Policy::StopAtShortest => CombiningPolicy::stop_at_shortest(),
        }
    }
}
