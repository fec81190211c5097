//! Target repository identity.

use serde::{Deserialize, Serialize};

/// The repository a task runs against, as resolved by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryTarget {
    /// Opaque repository identifier used by the remote service.
    pub id: String,
    /// Repository name, for example `github.com/owner/repo`.
    pub name: String,
    /// Base branch ref the changes apply to.
    pub base_ref: String,
    /// Base revision the changes apply to.
    pub base_rev: String,
    /// Paths of search results that selected this repository.
    #[serde(default)]
    pub file_matches: Vec<String>,
}

impl RepositoryTarget {
    /// Creates a repository target without file matches.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_ref: impl Into<String>,
        base_rev: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_ref: base_ref.into(),
            base_rev: base_rev.into(),
            file_matches: Vec::new(),
        }
    }

    /// Sets the search-result file matches.
    #[must_use]
    pub fn with_file_matches(mut self, paths: impl IntoIterator<Item = String>) -> Self {
        self.file_matches = paths.into_iter().collect();
        self
    }

    /// Returns the file matches sorted and deduplicated.
    #[must_use]
    pub fn search_result_paths(&self) -> Vec<String> {
        let mut paths = self.file_matches.clone();
        paths.sort();
        paths.dedup();
        paths
    }
}
