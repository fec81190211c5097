//! Template rendering context shared by every rendered field.

use super::{BatchChangeAttributes, ExecutionResult, Task};
use serde::Serialize;
use serde_json::{Map, Value};

/// Values exposed to changeset templates.
///
/// Serialized field names are the template variable names, for example
/// `batch_change.name`, `steps.modified_files` or
/// `repository.search_result_paths`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateContext {
    /// Attributes of the batch change.
    pub batch_change: BatchChangeAttributes,
    /// Changes made by the transformation steps.
    pub steps: StepsContext,
    /// Outputs recorded by the transformation steps.
    pub outputs: Map<String, Value>,
    /// The repository being changed.
    pub repository: RepositoryContext,
}

impl TemplateContext {
    /// Builds the context for one task execution.
    #[must_use]
    pub fn new(task: &Task, result: &ExecutionResult) -> Self {
        let changes = &result.changed_files;
        Self {
            batch_change: task.batch_change.clone(),
            steps: StepsContext {
                modified_files: changes.modified.clone(),
                added_files: changes.added.clone(),
                deleted_files: changes.deleted.clone(),
                renamed_files: changes.renamed.clone(),
                path: result.path.clone(),
            },
            outputs: result.outputs.clone(),
            repository: RepositoryContext {
                name: task.repository.name.clone(),
                search_result_paths: task.repository.search_result_paths(),
            },
        }
    }
}

/// Step results exposed to templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepsContext {
    /// Modified files.
    pub modified_files: Vec<String>,
    /// Added files.
    pub added_files: Vec<String>,
    /// Deleted files.
    pub deleted_files: Vec<String>,
    /// Renamed files.
    pub renamed_files: Vec<String>,
    /// Working directory path within the repository.
    pub path: String,
}

/// Repository view exposed to templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryContext {
    /// Repository name.
    pub name: String,
    /// Sorted search-result paths that selected the repository.
    pub search_result_paths: Vec<String>,
}
