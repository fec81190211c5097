//! Error types for diff parsing and printing.

use thiserror::Error;

/// Errors returned while parsing a multi-file unified diff.
///
/// Line numbers are one-based and refer to the combined input text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiffParseError {
    /// Content appeared outside of any file diff.
    #[error("line {line_number}: unexpected content outside of a file diff: {line:?}")]
    UnexpectedLine {
        /// Line on which the content appeared.
        line_number: usize,
        /// The offending line.
        line: String,
    },

    /// A `---` header was not followed by a `+++` header.
    #[error("line {line_number}: expected '+++ ' header after '--- ' header")]
    MissingNewFileHeader {
        /// Line on which the `+++` header was expected.
        line_number: usize,
    },

    /// A hunk appeared before the file's `---`/`+++` headers.
    #[error("line {line_number}: hunk without a '--- '/'+++ ' file header")]
    MissingFileHeader {
        /// Line of the orphaned hunk header.
        line_number: usize,
    },

    /// A hunk header could not be parsed.
    #[error("line {line_number}: malformed hunk header {line:?}")]
    InvalidHunkHeader {
        /// Line of the hunk header.
        line_number: usize,
        /// The malformed header text.
        line: String,
    },

    /// A hunk body ended before its declared line counts were consumed.
    #[error("hunk starting at line {line_number} ends before its declared line counts")]
    TruncatedHunk {
        /// Line of the hunk header.
        line_number: usize,
    },

    /// A hunk body contains more lines of one side than its header declares.
    #[error("line {line_number}: hunk body exceeds the line counts declared in its header")]
    HunkLineCountMismatch {
        /// Line that overflowed the declared counts.
        line_number: usize,
    },
}

/// Errors returned while printing file diffs back into diff text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiffPrintError {
    /// A hunk body disagrees with the line counts in its header.
    #[error(
        "hunk in '{path}' declares -{expected_orig} +{expected_new} lines but its body has -{actual_orig} +{actual_new}"
    )]
    InconsistentHunk {
        /// Effective path of the file owning the hunk.
        path: String,
        /// Original-side count declared in the header.
        expected_orig: u64,
        /// New-side count declared in the header.
        expected_new: u64,
        /// Original-side count found in the body.
        actual_orig: u64,
        /// New-side count found in the body.
        actual_new: u64,
    },

    /// Writing into the output buffer failed.
    #[error("failed to write diff text")]
    Format(#[from] std::fmt::Error),
}
