//! Error types for tsp-plot operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tsp-plot operations
pub type PlotResult<T> = std::result::Result<T, PlotError>;

/// Error type for parsing and rendering failures.
///
/// Every variant is fatal; the tool is a one-shot script and does not
/// attempt recovery or retry.
#[derive(Error, Debug)]
pub enum PlotError {
    /// IO error (file missing, output directory missing, write failure)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed results file
    #[error("Parse error in {}{}: {}", .file.display(), fmt_line(.line), .cause)]
    ParseError {
        /// File that failed to parse
        file: PathBuf,
        /// 1-based line number, when known
        line: Option<usize>,
        /// Error description
        cause: String,
    },

    /// Plotting backend failure while drawing or saving a frame
    #[error("Render error: {0}")]
    Render(String),
}

fn fmt_line(line: &Option<usize>) -> String {
    match line {
        Some(l) => format!(" (line {l})"),
        None => String::new(),
    }
}

impl PlotError {
    /// Build a ParseError for `file` at 1-based `line`.
    pub(crate) fn parse(
        file: &std::path::Path,
        line: Option<usize>,
        cause: impl Into<String>,
    ) -> Self {
        Self::ParseError {
            file: file.to_path_buf(),
            line,
            cause: cause.into(),
        }
    }
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for PlotError
{
    fn from(e: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Self::Render(e.to_string())
    }
}
