//! Splitting one repository's combined diff across several branches.
//!
//! Groups are selected per repository ([`groups_for_repository`]), checked
//! for conflicts ([`validate_groups`]) and then applied to the combined diff
//! ([`group_file_diffs`]). Validation must pass before partitioning runs.

mod error;
mod partition;
mod selector;
mod validation;

pub use error::{DiffGroupingError, GroupValidationError};
pub use partition::{BranchDiff, BranchDiffs, group_file_diffs};
pub use selector::groups_for_repository;
pub use validation::validate_groups;
