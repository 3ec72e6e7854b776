//! Reading a whole dataset from a path or stream.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use narrative_core::errors::LoadError;
use narrative_core::Post;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::record::parse_line;

/// Counters describing one load, for diagnostics in the presentation layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadDiagnostics {
    pub lines_read: usize,
    pub records_loaded: usize,
    pub malformed_skipped: usize,
    pub blank_lines: usize,
}

/// Posts in input order plus the load counters.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub posts: Vec<Post>,
    pub diagnostics: LoadDiagnostics,
}

/// Load a line-delimited JSON file.
pub fn load_path(path: &Path) -> Result<LoadedDataset, LoadError> {
    let source_name = path.display().to_string();
    let file = File::open(path).map_err(|e| LoadError::Unreadable {
        source_name: source_name.clone(),
        message: e.to_string(),
    })?;
    load_reader(BufReader::new(file), &source_name)
}

/// Load line-delimited JSON from any buffered stream. `source_name` only
/// appears in errors and logs.
pub fn load_reader<R: BufRead>(mut reader: R, source_name: &str) -> Result<LoadedDataset, LoadError> {
    let mut posts = Vec::new();
    let mut diagnostics = LoadDiagnostics::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| LoadError::Unreadable {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;
        if read == 0 {
            break;
        }
        diagnostics.lines_read += 1;
        let line_no = diagnostics.lines_read;

        let line = match std::str::from_utf8(&buf) {
            Ok(text) => text.trim(),
            Err(e) => {
                diagnostics.malformed_skipped += 1;
                debug!(source = source_name, line = line_no, error = %e, "skipping non-UTF-8 line");
                continue;
            }
        };
        if line.is_empty() {
            diagnostics.blank_lines += 1;
            continue;
        }

        match parse_line(line, line_no) {
            Ok(post) => posts.push(post),
            Err(e) => {
                diagnostics.malformed_skipped += 1;
                debug!(source = source_name, line = line_no, error = %e, "skipping malformed record");
            }
        }
    }

    diagnostics.records_loaded = posts.len();
    if posts.is_empty() {
        return Err(LoadError::EmptyDataset {
            source_name: source_name.to_string(),
            malformed_skipped: diagnostics.malformed_skipped,
        });
    }

    info!(
        source = source_name,
        records = diagnostics.records_loaded,
        skipped = diagnostics.malformed_skipped,
        "dataset loaded"
    );
    Ok(LoadedDataset { posts, diagnostics })
}
