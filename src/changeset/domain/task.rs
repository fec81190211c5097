//! Task and execution result inputs.

use super::{ChangesetTemplate, RepositoryTarget, TransformChanges};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Batch-change-level attributes exposed to templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchChangeAttributes {
    /// Batch change name.
    pub name: String,
    /// Batch change description.
    #[serde(default)]
    pub description: String,
}

/// Per-repository execution context.
///
/// Deserializes from the camelCase shape used by batch specs:
///
///     use changeset_specs::changeset::domain::Task;
///
///     let task: Task = serde_json::from_value(serde_json::json!({
///         "repository": {
///             "id": "UmVwb3NpdG9yeTox",
///             "name": "github.com/acme/app",
///             "baseRef": "refs/heads/main",
///             "baseRev": "d34db33f"
///         },
///         "batchChange": { "name": "bump-deps" },
///         "template": {
///             "title": "Bump deps",
///             "branch": "bump-deps",
///             "commit": { "message": "Bump deps" },
///             "published": false
///         },
///         "transformChanges": {
///             "group": [{ "directory": "backend/", "branch": "bump-deps-backend" }]
///         }
///     }))
///     .expect("valid task");
///     assert_eq!(task.repository.name, "github.com/acme/app");
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Repository the task ran against.
    pub repository: RepositoryTarget,
    /// Attributes of the owning batch change.
    #[serde(default)]
    pub batch_change: BatchChangeAttributes,
    /// Changeset template declared by the batch spec.
    pub template: ChangesetTemplate,
    /// Optional diff grouping rules.
    #[serde(default)]
    pub transform_changes: Option<TransformChanges>,
}

impl Task {
    /// Creates a task without grouping rules.
    #[must_use]
    pub fn new(
        repository: RepositoryTarget,
        batch_change: BatchChangeAttributes,
        template: ChangesetTemplate,
    ) -> Self {
        Self {
            repository,
            batch_change,
            template,
            transform_changes: None,
        }
    }

    /// Sets the diff grouping rules.
    #[must_use]
    pub fn with_transform_changes(mut self, transform_changes: TransformChanges) -> Self {
        self.transform_changes = Some(transform_changes);
        self
    }
}

/// Files changed by the transformation, by kind of change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFiles {
    /// Modified files.
    #[serde(default)]
    pub modified: Vec<String>,
    /// Added files.
    #[serde(default)]
    pub added: Vec<String>,
    /// Deleted files.
    #[serde(default)]
    pub deleted: Vec<String>,
    /// Renamed files.
    #[serde(default)]
    pub renamed: Vec<String>,
}

/// Output of running the transformation against one repository.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Combined unified diff of all changes.
    pub diff: String,
    /// Files changed by the transformation.
    #[serde(default)]
    pub changed_files: ChangedFiles,
    /// Arbitrary outputs recorded by the transformation steps.
    #[serde(default)]
    pub outputs: Map<String, Value>,
    /// Working directory path within the repository.
    #[serde(default)]
    pub path: String,
}

impl ExecutionResult {
    /// Creates a result holding only a combined diff.
    #[must_use]
    pub fn new(diff: impl Into<String>) -> Self {
        Self {
            diff: diff.into(),
            ..Self::default()
        }
    }

    /// Sets the changed files.
    #[must_use]
    pub fn with_changed_files(mut self, changed_files: ChangedFiles) -> Self {
        self.changed_files = changed_files;
        self
    }

    /// Records a step output.
    #[must_use]
    pub fn with_output(mut self, key: impl Into<String>, value: Value) -> Self {
        self.outputs.insert(key.into(), value);
        self
    }

    /// Sets the working directory path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}
