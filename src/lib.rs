//! Changeset specs: assembly of batch-change changeset specs.
//!
//! This crate turns the combined diff produced by running a batch change's
//! transformation steps in one repository into changeset specs, one per
//! target branch.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (template rendering)
//!
//! # Modules
//!
//! - [`diff`]: Unified multi-file diff parsing and printing
//! - [`changeset`]: Grouping rules, template rendering and spec assembly

pub mod changeset;
pub mod diff;
