//! Port definitions for changeset spec assembly.

pub mod renderer;

pub use renderer::{RenderError, TemplateRenderer};
