//! Marker-delimited in-place section replacement.
use anyhow::{Context as _, Result};
use std::path::Path;

use crate::error::TargetError;
use crate::fsutil;

/// Replace the region strictly between two marker lines in an existing file.
///
/// The first line exactly equal to `start_marker`, and the first line after
/// it exactly equal to `end_marker`, delimit the region. Matching is
/// full-line string equality, never substring or pattern matching. The
/// marker lines themselves are preserved; everything between them is
/// replaced with `new_content` (a single trailing newline on the
/// replacement is normalized so repeated runs are idempotent).
///
/// Lines outside the region keep their exact bytes, including CRLF line
/// endings; the replacement adopts the line ending of the start-marker line.
///
/// The result is written via a temporary file and rename.
///
/// # Errors
///
/// Fails if the file cannot be read (replace mode assumes a pre-existing
/// file shipped with the markers), or with [`TargetError::MarkerNotFound`]
/// if either marker is absent — the file is left unmodified in that case.
pub fn replace_section(
    path: &Path,
    new_content: &str,
    start_marker: &str,
    end_marker: &str,
) -> Result<()> {
    let original =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    // Terminators stay attached to their lines so untouched bytes survive
    // the rewrite verbatim.
    let lines: Vec<&str> = original.split_inclusive('\n').collect();
    let start = lines
        .iter()
        .position(|line| strip_line_ending(line) == start_marker)
        .ok_or_else(|| TargetError::MarkerNotFound {
            path: path.to_path_buf(),
            marker: start_marker.to_string(),
        })?;
    let end = lines
        .iter()
        .skip(start + 1)
        .position(|line| strip_line_ending(line) == end_marker)
        .map(|offset| start + 1 + offset)
        .ok_or_else(|| TargetError::MarkerNotFound {
            path: path.to_path_buf(),
            marker: end_marker.to_string(),
        })?;

    let newline = if lines.get(start).is_some_and(|line| line.ends_with("\r\n")) {
        "\r\n"
    } else {
        "\n"
    };
    let content = new_content
        .strip_suffix("\r\n")
        .or_else(|| new_content.strip_suffix('\n'))
        .unwrap_or(new_content);
    let content = if newline == "\r\n" {
        content.replace("\r\n", "\n").replace('\n', "\r\n")
    } else {
        content.to_string()
    };

    let mut output = String::with_capacity(original.len() + content.len());
    for line in lines.get(..=start).unwrap_or_default() {
        output.push_str(line);
    }
    output.push_str(&content);
    output.push_str(newline);
    for line in lines.get(end..).unwrap_or_default() {
        output.push_str(line);
    }

    fsutil::write_atomic(path, &output)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
