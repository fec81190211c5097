//! The changeset spec handed to the remote batch-changes service.

use super::PublishedValue;
use serde::{Deserialize, Serialize};

/// Prefix of canonical branch refs.
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Returns `branch` in canonical `refs/heads/` form.
///
/// # Examples
///
///     use changeset_specs::changeset::domain::ensure_ref_prefix;
///
///     assert_eq!(ensure_ref_prefix("feature/x"), "refs/heads/feature/x");
///     assert_eq!(ensure_ref_prefix("refs/heads/main"), "refs/heads/main");
#[must_use]
pub fn ensure_ref_prefix(branch: &str) -> String {
    if branch.starts_with(BRANCH_REF_PREFIX) {
        branch.to_owned()
    } else {
        format!("{BRANCH_REF_PREFIX}{branch}")
    }
}

/// A single proposed changeset on one head branch.
///
/// Serializes to the camelCase wire shape; `published` is omitted entirely
/// when [`PublishedValue::Absent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangesetSpec {
    /// Repository the changes are based on.
    pub base_repository: String,
    /// Ref the changes are based on.
    pub base_ref: String,
    /// Revision the changes are based on.
    pub base_rev: String,
    /// Repository the head branch lives in.
    pub head_repository: String,
    /// Head branch in canonical ref form.
    pub head_ref: String,
    /// Rendered changeset title.
    pub title: String,
    /// Rendered changeset body.
    pub body: String,
    /// Commits on the head branch; always exactly one.
    pub commits: Vec<GitCommitDescription>,
    /// Publication intent.
    #[serde(default, skip_serializing_if = "PublishedValue::is_absent")]
    pub published: PublishedValue,
}

impl ChangesetSpec {
    /// Returns the head branch name without the ref prefix.
    #[must_use]
    pub fn branch(&self) -> &str {
        self.head_ref
            .strip_prefix(BRANCH_REF_PREFIX)
            .unwrap_or(&self.head_ref)
    }

    /// Returns the single commit description.
    #[must_use]
    pub fn commit(&self) -> Option<&GitCommitDescription> {
        self.commits.first()
    }
}

/// Description of the commit carrying a changeset's diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitCommitDescription {
    /// Rendered commit message.
    pub message: String,
    /// Author name; empty when left to the remote service.
    pub author_name: String,
    /// Author email; empty when left to the remote service.
    pub author_email: String,
    /// Unified diff of the commit.
    pub diff: String,
}
