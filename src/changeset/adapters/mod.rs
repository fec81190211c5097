//! Adapter implementations for changeset ports.

pub mod minijinja;

pub use self::minijinja::MiniJinjaRenderer;
