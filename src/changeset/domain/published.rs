//! Publication values and the `published` policy of a changeset template.

use super::PublishedPolicyError;
use glob::Pattern;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};
use std::collections::BTreeMap;

const DRAFT: &str = "draft";

/// Whether and how a changeset should be published.
///
/// `Absent` is a distinct wire value from `Explicit(false)`: it leaves the
/// decision to the remote service, and serializes by omitting the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PublishedValue {
    /// No publication intent; the remote service decides.
    #[default]
    Absent,
    /// Publish (`true`) or keep unpublished (`false`).
    Explicit(bool),
    /// Publish as a draft.
    Draft,
}

impl PublishedValue {
    /// Returns whether no publication intent is expressed.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl Serialize for PublishedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Absent => serializer.serialize_none(),
            Self::Explicit(value) => serializer.serialize_bool(*value),
            Self::Draft => serializer.serialize_str(DRAFT),
        }
    }
}

impl<'de> Deserialize<'de> for PublishedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<RawPublishedValue>::deserialize(deserializer)? {
            None => Ok(Self::Absent),
            Some(raw) => Self::try_from(raw).map_err(D::Error::custom),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPublishedValue {
    Bool(bool),
    Text(String),
}

impl TryFrom<RawPublishedValue> for PublishedValue {
    type Error = PublishedPolicyError;

    fn try_from(raw: RawPublishedValue) -> Result<Self, Self::Error> {
        match raw {
            RawPublishedValue::Bool(value) => Ok(Self::Explicit(value)),
            RawPublishedValue::Text(text) if text == DRAFT => Ok(Self::Draft),
            RawPublishedValue::Text(text) => Err(PublishedPolicyError::InvalidValue(text)),
        }
    }
}

/// The `published` field of a changeset template.
///
/// Either a single value for every changeset, or an ordered list of
/// overrides keyed by a repository glob with an optional `@branch` suffix.
/// When several overrides match, the last one wins.
///
/// # Examples
///
///     use changeset_specs::changeset::domain::{PublishedPolicy, PublishedValue};
///
///     let policy: PublishedPolicy = serde_json::from_value(serde_json::json!([
///         { "github.com/acme/*": "draft" },
///         { "github.com/acme/app@hotfix": true }
///     ]))
///     .expect("valid policy");
///
///     assert_eq!(policy.value_for("github.com/acme/lib", "main"), PublishedValue::Draft);
///     assert_eq!(policy.value_for("github.com/acme/app", "hotfix"), PublishedValue::Explicit(true));
///     assert_eq!(policy.value_for("gitlab.com/other/x", "main"), PublishedValue::Absent);
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawPublishedPolicy")]
pub struct PublishedPolicy {
    rules: Vec<PublishedRule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PublishedRule {
    pattern: Pattern,
    branch: Option<String>,
    value: PublishedValue,
}

impl PublishedRule {
    fn matches(&self, repository_name: &str, branch: &str) -> bool {
        self.pattern.matches(repository_name)
            && self.branch.as_deref().is_none_or(|suffix| suffix == branch)
    }
}

impl PublishedPolicy {
    /// Creates a policy applying one value to every changeset.
    ///
    /// # Errors
    ///
    /// Never fails for the catch-all pattern; the `Result` mirrors
    /// [`Self::with_override`].
    pub fn uniform(value: PublishedValue) -> Result<Self, PublishedPolicyError> {
        Self::default().with_override("*", value)
    }

    /// Appends an override for repositories matching `pattern`.
    ///
    /// The pattern is a glob over repository names, optionally followed by
    /// `@branch` to restrict the override to one head branch.
    ///
    /// # Errors
    ///
    /// Returns [`PublishedPolicyError::InvalidPattern`] when the glob does
    /// not compile.
    pub fn with_override(
        mut self,
        pattern: &str,
        value: PublishedValue,
    ) -> Result<Self, PublishedPolicyError> {
        let (repository_pattern, branch) = match pattern.split_once('@') {
            Some((repository_pattern, branch)) if !branch.is_empty() => {
                (repository_pattern, Some(branch.to_owned()))
            }
            Some((repository_pattern, _)) => (repository_pattern, None),
            None => (pattern, None),
        };
        let compiled =
            Pattern::new(repository_pattern).map_err(|error| PublishedPolicyError::InvalidPattern {
                pattern: pattern.to_owned(),
                reason: error.to_string(),
            })?;
        self.rules.push(PublishedRule {
            pattern: compiled,
            branch,
            value,
        });
        Ok(self)
    }

    /// Evaluates the policy for one repository and head branch.
    ///
    /// Returns [`PublishedValue::Absent`] when no override matches.
    #[must_use]
    pub fn value_for(&self, repository_name: &str, branch: &str) -> PublishedValue {
        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(repository_name, branch))
            .map_or(PublishedValue::Absent, |rule| rule.value)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPublishedPolicy {
    Uniform(RawPublishedValue),
    Overrides(Vec<BTreeMap<String, RawPublishedValue>>),
}

impl TryFrom<RawPublishedPolicy> for PublishedPolicy {
    type Error = PublishedPolicyError;

    fn try_from(raw: RawPublishedPolicy) -> Result<Self, Self::Error> {
        match raw {
            RawPublishedPolicy::Uniform(value) => Self::uniform(PublishedValue::try_from(value)?),
            RawPublishedPolicy::Overrides(entries) => {
                entries.into_iter().try_fold(Self::default(), |policy, entry| {
                    if entry.len() != 1 {
                        return Err(PublishedPolicyError::InvalidRuleShape(entry.len()));
                    }
                    entry
                        .into_iter()
                        .try_fold(policy, |rules, (pattern, value)| {
                            rules.with_override(&pattern, PublishedValue::try_from(value)?)
                        })
                })
            }
        }
    }
}
