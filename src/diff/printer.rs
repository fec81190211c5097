//! Multi-file unified diff printer.

use super::{DiffPrintError, FileDiff, Hunk};
use std::fmt::Write as _;

/// Prints file diffs back into newline-terminated multi-file diff text.
///
/// Extended header lines, binary patch data and `---`/`+++` headers are
/// reproduced verbatim; hunk headers are normalised to always carry explicit
/// line counts. An empty slice prints as an empty string.
///
/// # Errors
///
/// Returns [`DiffPrintError::InconsistentHunk`] when a hunk body disagrees
/// with the line counts declared in its header.
pub fn print_multi_file_diff(files: &[FileDiff]) -> Result<String, DiffPrintError> {
    let mut out = String::new();
    for file in files {
        print_file_diff(&mut out, file)?;
    }
    Ok(out)
}

fn print_file_diff(out: &mut String, file: &FileDiff) -> Result<(), DiffPrintError> {
    for line in file.extended.iter().chain(&file.binary_patch) {
        writeln!(out, "{line}")?;
    }

    if file.has_file_header {
        writeln!(
            out,
            "--- {}",
            with_time(&file.orig_name, file.orig_time.as_deref())
        )?;
        writeln!(
            out,
            "+++ {}",
            with_time(&file.new_name, file.new_time.as_deref())
        )?;
    }

    for hunk in &file.hunks {
        check_hunk_counts(file, hunk)?;
        write!(
            out,
            "@@ -{},{} +{},{} @@",
            hunk.orig_start, hunk.orig_lines, hunk.new_start, hunk.new_lines
        )?;
        if !hunk.section.is_empty() {
            write!(out, " {}", hunk.section)?;
        }
        out.push('\n');
        for line in &hunk.body {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

fn with_time(name: &str, time: Option<&str>) -> String {
    time.map_or_else(|| name.to_owned(), |time| format!("{name}\t{time}"))
}

fn check_hunk_counts(file: &FileDiff, hunk: &Hunk) -> Result<(), DiffPrintError> {
    let (actual_orig, actual_new) = hunk.counted_lines();
    if actual_orig == hunk.orig_lines && actual_new == hunk.new_lines {
        return Ok(());
    }
    Err(DiffPrintError::InconsistentHunk {
        path: file.effective_path().to_owned(),
        expected_orig: hunk.orig_lines,
        expected_new: hunk.new_lines,
        actual_orig,
        actual_new,
    })
}
