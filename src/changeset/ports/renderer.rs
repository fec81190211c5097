//! Template renderer port.
//!
//! Rendering is treated as a pure, synchronous function of the template
//! text and the shared [`TemplateContext`].

use crate::changeset::domain::TemplateContext;
use thiserror::Error;

/// Renders one changeset template field.
pub trait TemplateRenderer: Send + Sync {
    /// Renders `template` for the field named `field`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when the template is invalid or references
    /// values missing from the context.
    fn render(
        &self,
        field: &str,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, RenderError>;
}

/// A changeset template field failed to render.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render changeset template field '{field}': {reason}")]
pub struct RenderError {
    /// Name of the field, for example `title` or `authorEmail`.
    pub field: String,
    /// Renderer-specific description of the failure.
    pub reason: String,
}

impl RenderError {
    /// Creates a render error for `field`.
    #[must_use]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
