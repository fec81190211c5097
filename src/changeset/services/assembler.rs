//! Changeset spec assembly service.

use std::sync::Arc;

use thiserror::Error;

use crate::changeset::{
    domain::{
        AuthorDefaults, ChangesetSpec, CommitAuthor, ExecutionResult, FeatureFlags,
        GitCommitDescription, PublishedValue, Task, TemplateContext, ensure_ref_prefix,
    },
    grouping::{
        BranchDiffs, DiffGroupingError, GroupValidationError, group_file_diffs,
        groups_for_repository, validate_groups,
    },
    ports::{RenderError, TemplateRenderer},
};

/// Errors returned while assembling changeset specs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChangesetAssemblyError {
    /// A template field failed to render.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The grouping rules for the repository are invalid.
    #[error(transparent)]
    Validation(#[from] GroupValidationError),

    /// The combined diff could not be split into branch diffs.
    #[error("grouping diffs failed: {0}")]
    Grouping(#[from] DiffGroupingError),

    /// The template omits `published` but the service requires it.
    #[error(
        "the batch-changes service requires the changeset template to set \"published\"; \
         set it explicitly or upgrade the service to 3.30.0 or later"
    )]
    OptionalPublishedUnsupported,
}

impl ChangesetAssemblyError {
    /// Returns whether the error stems from invalid user input rather than
    /// from the diff or the renderer.
    ///
    /// Conflicting groups and a missing publication policy for an older
    /// service are user errors; they are not retryable.
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::OptionalPublishedUnsupported
        )
    }
}

/// Result type for changeset spec assembly.
pub type ChangesetAssemblyResult<T> = Result<T, ChangesetAssemblyError>;

/// Rendered metadata shared by every branch of one task.
struct RenderedTemplate {
    title: String,
    body: String,
    message: String,
    branch: String,
    author: CommitAuthor,
}

/// Builds changeset specs from a task and its execution result.
///
/// The assembler holds only immutable state and can be shared across
/// threads when the renderer can.
#[derive(Clone)]
pub struct ChangesetSpecAssembler<R>
where
    R: TemplateRenderer,
{
    renderer: Arc<R>,
    features: FeatureFlags,
    author_defaults: AuthorDefaults,
}

impl<R> ChangesetSpecAssembler<R>
where
    R: TemplateRenderer,
{
    /// Creates an assembler with the bot author identity as defaults.
    #[must_use]
    pub fn new(renderer: Arc<R>, features: FeatureFlags) -> Self {
        Self {
            renderer,
            features,
            author_defaults: AuthorDefaults::default(),
        }
    }

    /// Replaces the identity used for unattributed commits.
    #[must_use]
    pub fn with_author_defaults(mut self, author_defaults: AuthorDefaults) -> Self {
        self.author_defaults = author_defaults;
        self
    }

    /// Returns the feature flags the assembler was built with.
    #[must_use]
    pub const fn features(&self) -> FeatureFlags {
        self.features
    }

    /// Builds one changeset spec per target branch.
    ///
    /// Template fields are rendered once and shared by every branch. When
    /// grouping rules apply to the repository they are validated before the
    /// diff is parsed, and the diff is split by directory; otherwise the
    /// combined diff is used unchanged on the template branch. Specs come
    /// back with the template branch first.
    ///
    /// # Errors
    ///
    /// Returns [`ChangesetAssemblyError`] when a template fails to render,
    /// the grouping rules are invalid, the diff cannot be split, or the
    /// publication value cannot be determined. Any failure discards every
    /// spec.
    pub fn assemble(
        &self,
        task: &Task,
        result: &ExecutionResult,
    ) -> ChangesetAssemblyResult<Vec<ChangesetSpec>> {
        let context = TemplateContext::new(task, result);
        let rendered = self.render_template(task, &context)?;

        let repository_name = task.repository.name.as_str();
        let groups = groups_for_repository(repository_name, task.transform_changes.as_ref());
        tracing::debug!(
            repository = %repository_name,
            groups = groups.len(),
            "selected changeset groups"
        );

        let branch_diffs = if groups.is_empty() {
            BranchDiffs::single(rendered.branch.as_str(), result.diff.as_str())
        } else {
            validate_groups(repository_name, &task.template.branch, &groups)?;
            group_file_diffs(&result.diff, &rendered.branch, &groups)?
        };

        branch_diffs
            .iter()
            .map(|branch_diff| -> ChangesetAssemblyResult<ChangesetSpec> {
                let published = self.published_value(task, &branch_diff.branch)?;
                tracing::debug!(
                    repository = %repository_name,
                    branch = %branch_diff.branch,
                    published = ?published,
                    "built changeset spec"
                );
                Ok(ChangesetSpec {
                    base_repository: task.repository.id.clone(),
                    base_ref: task.repository.base_ref.clone(),
                    base_rev: task.repository.base_rev.clone(),
                    head_repository: task.repository.id.clone(),
                    head_ref: ensure_ref_prefix(&branch_diff.branch),
                    title: rendered.title.clone(),
                    body: rendered.body.clone(),
                    commits: vec![GitCommitDescription {
                        message: rendered.message.clone(),
                        author_name: rendered.author.name.clone(),
                        author_email: rendered.author.email.clone(),
                        diff: branch_diff.diff.clone(),
                    }],
                    published,
                })
            })
            .collect()
    }

    fn render_template(
        &self,
        task: &Task,
        context: &TemplateContext,
    ) -> ChangesetAssemblyResult<RenderedTemplate> {
        let template = &task.template;
        let author = self.resolve_author(task, context)?;
        Ok(RenderedTemplate {
            title: self.renderer.render("title", &template.title, context)?,
            body: self.renderer.render("body", &template.body, context)?,
            message: self
                .renderer
                .render("message", &template.commit.message, context)?,
            branch: self.renderer.render("branch", &template.branch, context)?,
            author,
        })
    }

    fn resolve_author(
        &self,
        task: &Task,
        context: &TemplateContext,
    ) -> Result<CommitAuthor, RenderError> {
        let Some(author) = &task.template.commit.author else {
            return Ok(if self.features.include_auto_author_details {
                CommitAuthor::from(&self.author_defaults)
            } else {
                CommitAuthor::default()
            });
        };
        Ok(CommitAuthor {
            name: self.renderer.render("authorName", &author.name, context)?,
            email: self.renderer.render("authorEmail", &author.email, context)?,
        })
    }

    fn published_value(&self, task: &Task, branch: &str) -> ChangesetAssemblyResult<PublishedValue> {
        let repository_name = task.repository.name.as_str();
        let Some(policy) = &task.template.published else {
            return if self.features.allow_optional_published {
                Ok(PublishedValue::Absent)
            } else {
                Err(ChangesetAssemblyError::OptionalPublishedUnsupported)
            };
        };

        let value = policy.value_for(repository_name, branch);
        if value.is_absent() && !self.features.allow_optional_published {
            tracing::warn!(
                repository = %repository_name,
                branch = %branch,
                "no publication rule matched; publishing as false for an older service"
            );
            return Ok(PublishedValue::Explicit(false));
        }
        Ok(value)
    }
}
