use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

pub mod json;
pub mod reader;
pub mod tsv;

use crate::model::item::FridgeItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Tsv,
    Json,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing input: {0}")]
    MissingInput(String),

    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("invalid catalog entry {index} (1-based): {msg}")]
    InvalidEntry { index: usize, msg: String },

    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
}

/// Picks the catalog format from the file name, looking through a trailing `.gz`.
pub fn detect_format(path: &Path) -> CatalogFormat {
    let stem = if reader::is_gz(path) {
        path.file_stem()
    } else {
        path.file_name()
    };
    let name = stem
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if name.ends_with(".json") {
        CatalogFormat::Json
    } else {
        CatalogFormat::Tsv
    }
}

pub fn load_catalog(path: &Path) -> Result<Vec<FridgeItem>, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "catalog file not found: {}",
            path.display()
        )));
    }
    let format = detect_format(path);
    let reader = reader::open_maybe_gz(path)?;
    let items = match format {
        CatalogFormat::Tsv => tsv::parse_catalog_tsv(reader)?,
        CatalogFormat::Json => json::parse_catalog_json(reader)?,
    };
    let items = dedup_ids(items);
    tracing::info!(
        path = %path.display(),
        format = ?format,
        items = items.len(),
        "catalog loaded"
    );
    Ok(items)
}

/// Drops repeated ids, keeping the first occurrence.
pub fn dedup_ids(items: Vec<FridgeItem>) -> Vec<FridgeItem> {
    let mut seen = HashSet::with_capacity(items.len());
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.id) {
            out.push(item);
        } else {
            tracing::warn!(id = %item.id, name = %item.name, "duplicate item id; keeping first");
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
