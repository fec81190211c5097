//! Tests for publication values and the `published` policy.

use crate::changeset::domain::{PublishedPolicy, PublishedPolicyError, PublishedValue};
use eyre::Result;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case::publish(json!(true), PublishedValue::Explicit(true))]
#[case::unpublished(json!(false), PublishedValue::Explicit(false))]
#[case::draft(json!("draft"), PublishedValue::Draft)]
fn scalar_policy_applies_everywhere(#[case] raw: Value, #[case] expected: PublishedValue) -> Result<()> {
    let policy: PublishedPolicy = serde_json::from_value(raw)?;

    assert_eq!(policy.value_for("github.com/acme/app", "main"), expected);
    assert_eq!(policy.value_for("gitlab.com/x/y", "feature"), expected);
    Ok(())
}

#[rstest]
fn overrides_are_evaluated_last_match_wins() -> Result<()> {
    let policy: PublishedPolicy = serde_json::from_value(json!([
        { "*": false },
        { "github.com/acme/*": "draft" },
        { "github.com/acme/app": true }
    ]))?;

    assert_eq!(
        policy.value_for("github.com/acme/app", "main"),
        PublishedValue::Explicit(true)
    );
    assert_eq!(
        policy.value_for("github.com/acme/lib", "main"),
        PublishedValue::Draft
    );
    assert_eq!(
        policy.value_for("bitbucket.org/x/y", "main"),
        PublishedValue::Explicit(false)
    );
    Ok(())
}

#[rstest]
fn branch_suffix_restricts_an_override() -> Result<()> {
    let policy = PublishedPolicy::default()
        .with_override("github.com/acme/app@my-batch-change-backend", PublishedValue::Explicit(true))?;

    assert_eq!(
        policy.value_for("github.com/acme/app", "my-batch-change-backend"),
        PublishedValue::Explicit(true)
    );
    assert_eq!(
        policy.value_for("github.com/acme/app", "my-batch-change"),
        PublishedValue::Absent
    );
    Ok(())
}

#[rstest]
fn unmatched_policy_is_absent() -> Result<()> {
    let policy: PublishedPolicy = serde_json::from_value(json!([{ "github.com/acme/*": true }]))?;

    assert_eq!(policy.value_for("gitlab.com/acme/app", "main"), PublishedValue::Absent);
    Ok(())
}

#[rstest]
#[case::unknown_string(json!("yes"))]
#[case::two_patterns(json!([{ "a/*": true, "b/*": false }]))]
#[case::empty_entry(json!([{}]))]
#[case::bad_glob(json!([{ "github.com/[acme": true }]))]
#[case::number(json!(1))]
fn malformed_policies_are_rejected(#[case] raw: Value) {
    assert!(serde_json::from_value::<PublishedPolicy>(raw).is_err());
}

#[rstest]
fn invalid_glob_reports_the_pattern() {
    let error = PublishedPolicy::default()
        .with_override("github.com/[acme@main", PublishedValue::Draft)
        .expect_err("unclosed character class should not compile");

    assert!(matches!(
        error,
        PublishedPolicyError::InvalidPattern { pattern, .. } if pattern == "github.com/[acme@main"
    ));
}

#[rstest]
fn published_value_deserializes_null_as_absent() -> Result<()> {
    let value: PublishedValue = serde_json::from_value(Value::Null)?;
    assert_eq!(value, PublishedValue::Absent);
    Ok(())
}
