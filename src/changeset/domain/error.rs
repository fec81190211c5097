//! Error types for changeset domain parsing.

use thiserror::Error;

/// Errors returned while reading a `published` policy from a changeset
/// template.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PublishedPolicyError {
    /// A string value other than `draft` was given.
    #[error("invalid published value '{0}', expected true, false or \"draft\"")]
    InvalidValue(String),

    /// An override entry did not hold exactly one pattern.
    #[error("published override must map exactly one pattern to a value, found {0}")]
    InvalidRuleShape(usize),

    /// A repository pattern is not a valid glob.
    #[error("invalid repository pattern '{pattern}' in published override: {reason}")]
    InvalidPattern {
        /// The rejected pattern.
        pattern: String,
        /// Why the glob failed to compile.
        reason: String,
    },
}

/// Error returned when a remote service version cannot be interpreted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FeatureFlagsError {
    /// The version is neither a release, an insider build nor `dev`.
    #[error("unparsable service version '{0}'")]
    UnparsableVersion(String),
}
