//! Log setup for the binary. Events go to stderr so stdout carries only the
//! generated cases.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Log detail chosen by `-q` and repeated `-v`, from least to most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Verbose,
            (false, 2) => Self::Debug,
            (false, _) => Self::Trace,
        }
    }

    pub fn level(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::OFF,
            Self::Normal => LevelFilter::WARN,
            Self::Verbose => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }

    /// Filter used when `RUST_LOG` is unset; only this crate's events pass.
    fn directive(self) -> String {
        format!("{}={}", env!("CARGO_CRATE_NAME"), self.level())
    }

    fn filter(self) -> EnvFilter {
        if self == Self::Quiet {
            return EnvFilter::new(self.directive());
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directive()))
    }
}

/// Installs the global subscriber. A second call leaves the first in place.
pub fn init(verbosity: Verbosity) {
    let detailed = verbosity >= Verbosity::Debug;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(verbosity.filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(detailed)
        .with_line_number(detailed)
        .compact();

    let installed = if verbosity <= Verbosity::Normal {
        builder.without_time().try_init()
    } else {
        builder.try_init()
    };
    if installed.is_err() {
        tracing::debug!("subscriber already installed");
    }
}
