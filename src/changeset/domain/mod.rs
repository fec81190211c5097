//! Domain model for changeset spec assembly.
//!
//! Inputs (the per-repository [`Task`] and the transformation's
//! [`ExecutionResult`]) are built upstream and only read here. The
//! [`ChangesetSpec`] is the single value that leaves the subsystem.

mod author;
mod context;
mod error;
mod features;
mod published;
mod repository;
mod spec;
mod task;
mod template;

pub use author::{AuthorDefaults, CommitAuthor, DEFAULT_AUTHOR_EMAIL, DEFAULT_AUTHOR_NAME};
pub use context::{RepositoryContext, StepsContext, TemplateContext};
pub use error::{FeatureFlagsError, PublishedPolicyError};
pub use features::FeatureFlags;
pub use published::{PublishedPolicy, PublishedValue};
pub use repository::RepositoryTarget;
pub use spec::{BRANCH_REF_PREFIX, ChangesetSpec, GitCommitDescription, ensure_ref_prefix};
pub use task::{BatchChangeAttributes, ChangedFiles, ExecutionResult, Task};
pub use template::{AuthorTemplate, ChangesetTemplate, CommitTemplate, Group, TransformChanges};
