//! `minijinja`-backed template renderer.

use crate::changeset::{
    domain::TemplateContext,
    ports::{RenderError, TemplateRenderer},
};
use minijinja::{Environment, UndefinedBehavior, syntax::SyntaxConfig};

/// Renders batch-spec templates with `${{ ... }}` expressions.
///
/// Blocks use `${% ... %}` and comments `${# ... #}`, so plain `{{`, `{%`
/// and `{#` in Markdown bodies pass through untouched. Referencing an
/// undefined variable is an error.
///
/// # Examples
///
///     use changeset_specs::changeset::adapters::MiniJinjaRenderer;
///     use changeset_specs::changeset::domain::{
///         BatchChangeAttributes, ChangesetTemplate, CommitTemplate, ExecutionResult,
///         RepositoryTarget, Task, TemplateContext,
///     };
///     use changeset_specs::changeset::ports::TemplateRenderer;
///
///     let task = Task::new(
///         RepositoryTarget::new("1", "github.com/acme/app", "refs/heads/main", "abc"),
///         BatchChangeAttributes { name: "bump".to_owned(), description: String::new() },
///         ChangesetTemplate::new("t", "b", CommitTemplate::new("m")),
///     );
///     let context = TemplateContext::new(&task, &ExecutionResult::new(""));
///     let title = MiniJinjaRenderer::new()
///         .render("title", "${{ batch_change.name }} in ${{ repository.name }}", &context)
///         .expect("renders");
///     assert_eq!(title, "bump in github.com/acme/app");
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniJinjaRenderer;

impl MiniJinjaRenderer {
    /// Creates the renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn environment() -> Result<Environment<'static>, minijinja::Error> {
        let syntax = SyntaxConfig::builder()
            .block_delimiters("${%", "%}")
            .variable_delimiters("${{", "}}")
            .comment_delimiters("${#", "#}")
            .build()?;
        let mut environment = Environment::new();
        environment.set_syntax(syntax);
        environment.set_undefined_behavior(UndefinedBehavior::Strict);
        Ok(environment)
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        field: &str,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, RenderError> {
        let to_render_error = |error: minijinja::Error| RenderError::new(field, error.to_string());
        Self::environment()
            .map_err(to_render_error)?
            .render_str(template, context)
            .map_err(to_render_error)
    }
}
