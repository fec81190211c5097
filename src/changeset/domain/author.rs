//! Commit authorship.

/// Author name used for unattributed commits when the service supports it.
pub const DEFAULT_AUTHOR_NAME: &str = "Sourcegraph";

/// Author email used for unattributed commits when the service supports it.
pub const DEFAULT_AUTHOR_EMAIL: &str = "batch-changes@sourcegraph.com";

/// Bot identity injected into the assembler for unattributed commits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDefaults {
    /// Default author name.
    pub name: String,
    /// Default author email.
    pub email: String,
}

impl AuthorDefaults {
    /// Creates a custom default identity.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Default for AuthorDefaults {
    fn default() -> Self {
        Self::new(DEFAULT_AUTHOR_NAME, DEFAULT_AUTHOR_EMAIL)
    }
}

/// Resolved commit author; both fields are empty when authorship is left
/// to the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitAuthor {
    /// Author name.
    pub name: String,
    /// Author email.
    pub email: String,
}

impl From<&AuthorDefaults> for CommitAuthor {
    fn from(defaults: &AuthorDefaults) -> Self {
        Self {
            name: defaults.name.clone(),
            email: defaults.email.clone(),
        }
    }
}
