//! Unified multi-file diff codec.
//!
//! Parses the combined diff produced by a transformation run into per-file
//! [`FileDiff`] units and prints any sequence of them back into multi-file
//! diff text. Both `git diff` output (with `diff --git` and extended header
//! lines) and plain unified diffs (`---`/`+++` headers only) are accepted.
//!
//! # Example
//!
//! ```
//! use changeset_specs::diff::{parse_multi_file_diff, print_multi_file_diff};
//!
//! let text = "--- a/README.md\n+++ b/README.md\n@@ -1 +1 @@\n-old\n+new\n";
//! let files = parse_multi_file_diff(text).expect("well-formed diff");
//! assert_eq!(files.len(), 1);
//! assert_eq!(files[0].effective_path(), "b/README.md");
//!
//! let printed = print_multi_file_diff(&files).expect("printable diff");
//! assert_eq!(printed, "--- a/README.md\n+++ b/README.md\n@@ -1,1 +1,1 @@\n-old\n+new\n");
//! ```

mod error;
mod file_diff;
mod parser;
mod printer;

pub use error::{DiffParseError, DiffPrintError};
pub use file_diff::{DEV_NULL, FileDiff, Hunk};
pub use parser::parse_multi_file_diff;
pub use printer::print_multi_file_diff;

#[cfg(test)]
mod tests;
