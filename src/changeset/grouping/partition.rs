//! Partitioning of a combined diff into per-branch diffs.

use super::DiffGroupingError;
use crate::changeset::domain::Group;
use crate::diff::{FileDiff, parse_multi_file_diff, print_multi_file_diff};

/// The reassembled diff for one branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchDiff {
    /// Target branch.
    pub branch: String,
    /// Multi-file diff text for the branch; empty when no file matched.
    pub diff: String,
}

/// Per-branch diffs with unique branch names.
///
/// The default branch always comes first; group branches follow in the
/// order their first file appears in the combined diff. A group that
/// matched no file has no entry, which means "no changes".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchDiffs {
    entries: Vec<BranchDiff>,
}

impl BranchDiffs {
    /// Creates the single-branch mapping used when no groups apply.
    #[must_use]
    pub fn single(branch: impl Into<String>, diff: impl Into<String>) -> Self {
        Self {
            entries: vec![BranchDiff {
                branch: branch.into(),
                diff: diff.into(),
            }],
        }
    }

    /// Returns the diff text for `branch`, if the branch has an entry.
    #[must_use]
    pub fn get(&self, branch: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.branch == branch)
            .map(|entry| entry.diff.as_str())
    }

    /// Returns the branch names in order.
    pub fn branches(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.branch.as_str())
    }

    /// Returns the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, BranchDiff> {
        self.entries.iter()
    }

    /// Returns the number of branches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether there are no branches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for BranchDiffs {
    type Item = BranchDiff;
    type IntoIter = std::vec::IntoIter<BranchDiff>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a BranchDiffs {
    type Item = &'a BranchDiff;
    type IntoIter = std::slice::Iter<'a, BranchDiff>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Splits `combined_diff` into one diff per branch.
///
/// Every file goes to the branch of the last group, in declaration order,
/// whose directory is a substring of the file's effective path. Matching is
/// unanchored: `api/` also matches `internal/api/x.go` and `legacyapi/y`.
/// An empty directory matches every path but routes nothing: when it is the
/// last match, the file stays on `default_branch`, as do files matching no
/// group. Within a branch, files keep their original order.
///
/// Callers validate `groups` with [`super::validate_groups`] first.
///
/// # Errors
///
/// Returns [`DiffGroupingError::Parse`] for a malformed combined diff and
/// [`DiffGroupingError::Print`] when a branch diff cannot be reassembled.
pub fn group_file_diffs(
    combined_diff: &str,
    default_branch: &str,
    groups: &[Group],
) -> Result<BranchDiffs, DiffGroupingError> {
    let file_diffs = parse_multi_file_diff(combined_diff)?;

    let directories: Vec<(&str, &str)> = groups
        .iter()
        .map(|group| (group.directory.as_str(), group.branch.as_str()))
        .collect();

    let mut by_branch: Vec<(&str, Vec<FileDiff>)> = vec![(default_branch, Vec::new())];
    for file_diff in file_diffs {
        let branch =
            matching_branch(&directories, file_diff.effective_path()).unwrap_or(default_branch);
        match by_branch.iter_mut().find(|(name, _)| *name == branch) {
            Some((_, files)) => files.push(file_diff),
            None => by_branch.push((branch, vec![file_diff])),
        }
    }

    let entries = by_branch
        .into_iter()
        .map(|(branch, files)| -> Result<BranchDiff, DiffGroupingError> {
            tracing::debug!(branch = %branch, files = files.len(), "assembling branch diff");
            Ok(BranchDiff {
                branch: branch.to_owned(),
                diff: print_multi_file_diff(&files)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        branches = entries.len(),
        default_branch = %default_branch,
        "grouped combined diff by directory"
    );
    Ok(BranchDiffs { entries })
}

/// Returns the branch of the last directory contained in `path`.
///
/// An empty directory is contained in every path; when it is the last
/// match the file has no group.
fn matching_branch<'a>(directories: &[(&'a str, &'a str)], path: &str) -> Option<&'a str> {
    directories
        .iter()
        .rev()
        .find(|(directory, _)| path.contains(directory))
        .filter(|(directory, _)| !directory.is_empty())
        .map(|(_, branch)| *branch)
}
