//! Application services for changeset spec assembly.

mod assembler;

pub use assembler::{ChangesetAssemblyError, ChangesetAssemblyResult, ChangesetSpecAssembler};
