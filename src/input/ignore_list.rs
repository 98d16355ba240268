// Ignore-list files: one word per line.
//
// Lines are trimmed and lowercased; blank lines are skipped and duplicates
// collapse into one entry.

use std::collections::HashSet;
use std::path::Path;

use crate::error::IgnoreListError;

/// Parse ignore-list text into a set of lowercased words.
pub fn parse(contents: &str) -> HashSet<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Read and parse an ignore-list file.
pub fn read(path: &Path) -> Result<HashSet<String>, IgnoreListError> {
    let contents = std::fs::read_to_string(path).map_err(|source| IgnoreListError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(&contents))
}
