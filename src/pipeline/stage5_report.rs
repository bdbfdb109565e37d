use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::model::scores::Suggestions;
use crate::model::thresholds::ScoringProfile;
use crate::report::json::render_suggestions_json;
use crate::report::text::render_suggestions_text;
use crate::report::tsv::render_suggestions_tsv;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Tsv,
    Json,
    Text,
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error writing report: {0}")]
    Io(#[from] io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn render_suggestions(
    suggestions: &Suggestions,
    profile: &ScoringProfile,
    format: ReportFormat,
) -> Result<String, ReportError> {
    Ok(match format {
        ReportFormat::Tsv => render_suggestions_tsv(suggestions, profile),
        ReportFormat::Json => render_suggestions_json(suggestions, profile)?,
        ReportFormat::Text => render_suggestions_text(suggestions, profile),
    })
}

/// Writes `contents` to `out`, or to stdout when `out` is `None`.
pub fn write_report(contents: &str, out: Option<&Path>) -> Result<(), ReportError> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            let mut w = BufWriter::new(File::create(path)?);
            w.write_all(contents.as_bytes())?;
            w.flush()?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut w = stdout.lock();
            w.write_all(contents.as_bytes())?;
            w.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
