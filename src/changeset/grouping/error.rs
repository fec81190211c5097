//! Error types for group validation and diff grouping.

use crate::diff::{DiffParseError, DiffPrintError};
use thiserror::Error;

/// Conflicts between declared groups; user-input errors surfaced verbatim.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GroupValidationError {
    /// Two groups target the same branch.
    #[error(
        "transformChanges would lead to multiple changesets in repository {repository} to have the same branch {branch:?}"
    )]
    DuplicateBranch {
        /// Repository the groups apply to.
        repository: String,
        /// The repeated branch.
        branch: String,
    },

    /// A group targets the changeset template's own branch.
    #[error(
        "transformChanges group branch for repository {repository} is the same as branch {branch:?} in changesetTemplate"
    )]
    DefaultBranchCollision {
        /// Repository the group applies to.
        repository: String,
        /// The default branch.
        branch: String,
    },
}

/// Failures while regrouping a combined diff.
///
/// Parsing failures point at a malformed upstream diff; printing failures at
/// a defect in assembling the per-branch diffs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DiffGroupingError {
    /// The combined diff is malformed.
    #[error("parsing multi file diff failed: {0}")]
    Parse(#[from] DiffParseError),

    /// A branch's diff could not be reassembled.
    #[error("printing multi file diff failed: {0}")]
    Print(#[from] DiffPrintError),
}
