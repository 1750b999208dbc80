use std::path::PathBuf;
use thiserror::Error;

use super::BindingError;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("invalid type expression '{expr}': {message}")]
    InvalidTypeExpression { expr: String, message: String },

    #[error("fixture '{fixture}' binds {found} type arguments but the suite declares {expected}")]
    TypeArgumentCount {
        fixture: String,
        expected: usize,
        found: usize,
    },

    #[error("type '{expr}' refers to type parameter #{index} but only {declared} are declared")]
    UnknownTypeParameter {
        expr: String,
        index: usize,
        declared: usize,
    },

    #[error("invalid suite document {path}: {message}")]
    InvalidDocument { path: PathBuf, message: String },

    #[error("failed to parse YAML suite '{path}': {source}")]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to parse JSON suite '{path}': {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("unsupported suite format: {path} (expected .yaml, .yml, or .json)")]
    UnsupportedFormat { path: PathBuf },

    #[error("{fixture}::{method}: {source}")]
    Binding {
        fixture: String,
        method: String,
        source: BindingError,
    },
}

impl SuiteError {
    pub fn invalid_type_expression(expr: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTypeExpression {
            expr: expr.into(),
            message: message.into(),
        }
    }

    pub fn invalid_document(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(path: impl Into<PathBuf>) -> Self {
        Self::UnsupportedFormat { path: path.into() }
    }
}
