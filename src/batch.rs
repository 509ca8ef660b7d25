//! Input discovery and the parallel batch driver.

use crate::assembler::convert_file;
use crate::config::ConverterConfig;
use crate::error::ConvertError;
use log::{error, info};
use mdpdf_executor::{Executor, TaskError};
use std::fs;
use std::path::{Path, PathBuf};

/// True if the file name ends in `.md`, ignoring case.
pub fn is_markdown(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.to_ascii_lowercase().ends_with(".md"))
}

/// Resolves the command-line path into the list of Markdown files to convert.
///
/// A file must itself be Markdown. A directory is scanned recursively;
/// files in it that are not Markdown are ignored. Results from a directory
/// are sorted.
pub fn resolve_inputs(path: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let metadata = fs::metadata(path).map_err(|_| ConvertError::PathNotFound(path.to_path_buf()))?;

    if metadata.is_dir() {
        info!("Scanning directory: {}", path.display());
        let mut found = Vec::new();
        collect_markdown(path, &mut found)?;
        Ok(found)
    } else if is_markdown(path) {
        Ok(vec![path.to_path_buf()])
    } else {
        Err(ConvertError::NotMarkdown(path.to_path_buf()))
    }
}

fn collect_markdown(dir: &Path, found: &mut Vec<PathBuf>) -> Result<(), ConvertError> {
    let walk_error = |source| ConvertError::Walk {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(walk_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(walk_error)?;
    entries.sort_by_key(|entry| entry.path());

    for entry in entries {
        let path = entry.path();
        // Symlinked directories are not followed.
        if entry.file_type().map_err(walk_error)?.is_dir() {
            collect_markdown(&path, found)?;
        } else if is_markdown(&path) && path.is_file() {
            found.push(path);
        }
    }
    Ok(())
}

/// Outcome of a batch: every input ends up in exactly one of the two lists.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, TaskError<ConvertError>)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Converts every input as an independent task on `executor`.
///
/// Waits for all tasks. A failed document is logged and recorded in the
/// report; it does not stop the others.
pub fn run_batch<E: Executor>(inputs: Vec<PathBuf>, config: &ConverterConfig, executor: &E) -> BatchReport {
    info!(
        "Converting {} file(s) with {} (parallelism {})",
        inputs.len(),
        executor.name(),
        executor.parallelism()
    );

    let results = executor.execute_all(inputs.clone(), |input| convert_file(&input, config));

    let mut report = BatchReport::default();
    for (input, result) in inputs.into_iter().zip(results) {
        match result {
            Ok(output) => report.converted.push(output),
            Err(err) => {
                error!("Failed to convert '{}': {}", input.display(), err);
                report.failed.push((input, err));
            }
        }
    }
    report
}
