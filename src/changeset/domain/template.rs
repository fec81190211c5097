//! Changeset template and diff grouping rules declared by a batch spec.

use super::PublishedPolicy;
use serde::Deserialize;

/// Template for the changesets produced in every repository.
///
/// String fields are templates, rendered against the task's
/// [`super::TemplateContext`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChangesetTemplate {
    /// Changeset title template.
    pub title: String,
    /// Changeset body template.
    #[serde(default)]
    pub body: String,
    /// Head branch template.
    pub branch: String,
    /// Commit template.
    pub commit: CommitTemplate,
    /// Publication policy; `None` when the batch spec omits the field.
    #[serde(default)]
    pub published: Option<PublishedPolicy>,
}

impl ChangesetTemplate {
    /// Creates a template with an empty body and no publication policy.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        branch: impl Into<String>,
        commit: CommitTemplate,
    ) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            branch: branch.into(),
            commit,
            published: None,
        }
    }

    /// Sets the body template.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the publication policy.
    #[must_use]
    pub fn with_published(mut self, published: PublishedPolicy) -> Self {
        self.published = Some(published);
        self
    }
}

/// Commit template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitTemplate {
    /// Commit message template.
    pub message: String,
    /// Author override; `None` leaves authorship to the defaults.
    #[serde(default)]
    pub author: Option<AuthorTemplate>,
}

impl CommitTemplate {
    /// Creates a commit template without an author override.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            author: None,
        }
    }

    /// Sets the author override.
    #[must_use]
    pub fn with_author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.author = Some(AuthorTemplate {
            name: name.into(),
            email: email.into(),
        });
        self
    }
}

/// Commit author override templates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthorTemplate {
    /// Author name template.
    pub name: String,
    /// Author email template.
    pub email: String,
}

/// Rules splitting one repository's diff across several branches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransformChanges {
    /// Groups in declaration order.
    #[serde(default, rename = "group")]
    pub groups: Vec<Group>,
}

impl TransformChanges {
    /// Creates grouping rules from groups in declaration order.
    #[must_use]
    pub fn new(groups: impl IntoIterator<Item = Group>) -> Self {
        Self {
            groups: groups.into_iter().collect(),
        }
    }
}

/// A rule sending every file whose path contains `directory` to `branch`.
///
/// # Examples
///
///     use changeset_specs::changeset::domain::Group;
///
///     let group = Group::new("backend/", "grouped-backend").for_repository("github.com/acme/app");
///     assert!(group.applies_to("github.com/acme/app"));
///     assert!(!group.applies_to("github.com/acme/other"));
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Group {
    /// Repository filter; empty applies the group to every repository.
    #[serde(default)]
    pub repository: String,
    /// Directory substring matched against file paths.
    pub directory: String,
    /// Target branch for matching files.
    pub branch: String,
}

impl Group {
    /// Creates a group applying to every repository.
    #[must_use]
    pub fn new(directory: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            repository: String::new(),
            directory: directory.into(),
            branch: branch.into(),
        }
    }

    /// Restricts the group to one repository.
    #[must_use]
    pub fn for_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = repository.into();
        self
    }

    /// Returns whether the group applies to the named repository.
    #[must_use]
    pub fn applies_to(&self, repository_name: &str) -> bool {
        self.repository.is_empty() || self.repository == repository_name
    }
}
