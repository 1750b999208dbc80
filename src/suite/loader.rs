use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use super::{Suite, SuiteDocument};
use crate::error::{IoError, Result, SuiteError};

const SUITE_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

pub fn is_suite_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUITE_EXTENSIONS.contains(&ext))
}

/// Reads one suite document, choosing the parser by file extension.
pub fn load_suite_file(path: &Path) -> Result<Suite> {
    if !path.is_file() {
        return Err(IoError::file_not_found(path).into());
    }
    let ext = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    let content = fs::read_to_string(path).map_err(|e| IoError::read_error(path, e))?;

    let doc: SuiteDocument = match ext {
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|source| SuiteError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
        "json" => serde_json::from_str(&content).map_err(|source| SuiteError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        _ => return Err(SuiteError::unsupported_format(path).into()),
    };
    if doc.name.trim().is_empty() {
        return Err(SuiteError::invalid_document(path, "suite name must not be empty").into());
    }

    debug!(path = %path.display(), suite = %doc.name, "loaded suite document");
    Ok(Suite::from_document(doc)?.with_source(path))
}

/// Suite files under `root`, sorted by path. Hidden directories are skipped.
pub fn discover_suite_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(IoError::directory_not_found(root).into());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !(e.file_type().is_dir() && e.file_name().to_string_lossy().starts_with('.'))
        })
    {
        let entry = entry.map_err(|e| IoError::walk_error(root, e))?;
        if entry.file_type().is_file() && is_suite_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Loads a single suite file or every suite found under a directory.
pub fn load_suites(path: &Path) -> Result<Vec<Suite>> {
    if path.is_dir() {
        let files = discover_suite_files(path)?;
        info!(path = %path.display(), files = files.len(), "discovered suite files");
        files.iter().map(|file| load_suite_file(file)).collect()
    } else {
        Ok(vec![load_suite_file(path)?])
    }
}
