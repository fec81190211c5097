//! Unit tests for the changeset module.
//!
//! Tests are organised by component: grouping rules, publication policy,
//! feature flags, the spec wire shape, rendering and assembly.

mod published_tests;

use crate::changeset::domain::{
    BatchChangeAttributes, ChangesetTemplate, CommitTemplate, RepositoryTarget, Task,
};

/// Repository name used throughout the tests.
pub(super) const REPOSITORY: &str = "github.com/sourcegraph/src-cli";

/// Returns a one-hunk `git diff` block modifying `path`.
pub(super) fn file_diff(path: &str) -> String {
    format!(
        "diff --git a/{path} b/{path}\n\
         index 1111111..2222222 100644\n\
         --- a/{path}\n\
         +++ b/{path}\n\
         @@ -1,1 +1,1 @@\n\
         -old\n\
         +new\n"
    )
}

/// Concatenates the blocks for `paths` into one combined diff.
pub(super) fn combined_diff(paths: &[&str]) -> String {
    paths.iter().map(|path| file_diff(path)).collect()
}

/// Returns a task for [`REPOSITORY`] with literal templates on `branch`.
pub(super) fn task_on_branch(branch: &str) -> Task {
    Task::new(
        RepositoryTarget::new(
            "UmVwb3NpdG9yeToxMjM=",
            REPOSITORY,
            "refs/heads/main",
            "d34db33f",
        ),
        BatchChangeAttributes {
            name: "regroup".to_owned(),
            description: "Regroup changes".to_owned(),
        },
        ChangesetTemplate::new("Regroup", branch, CommitTemplate::new("Regroup changes"))
            .with_body("Body"),
    )
}
