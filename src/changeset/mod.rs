//! Changeset spec assembly.
//!
//! Turns one task's combined diff and changeset template into the
//! changeset specs submitted to the batch-changes service, optionally
//! splitting the diff across several branches by directory.
//!
//! - [`domain`]: task inputs, templates, publication policy and specs
//! - [`grouping`]: group selection, validation and diff partitioning
//! - [`ports`]: the template renderer abstraction
//! - [`adapters`]: the `minijinja` renderer
//! - [`services`]: the assembler tying everything together

pub mod adapters;
pub mod domain;
pub mod grouping;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
