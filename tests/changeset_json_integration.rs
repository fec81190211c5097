//! Integration tests for assembling changeset specs from batch-spec JSON.
//!
//! These tests exercise the flow from a deserialized task and execution
//! result through grouping and rendering to the JSON wire shape submitted
//! to the batch-changes service.

use std::sync::Arc;

use changeset_specs::changeset::{
    adapters::MiniJinjaRenderer,
    domain::{ExecutionResult, FeatureFlags, Task},
    services::ChangesetSpecAssembler,
};
use eyre::Result;
use serde_json::{Value, json};

const BACKEND_DIFF: &str = "\
diff --git a/backend/main.go b/backend/main.go
index 1111111..2222222 100644
--- a/backend/main.go
+++ b/backend/main.go
@@ -1,1 +1,1 @@
-package old
+package main
";

const FRONTEND_DIFF: &str = "\
diff --git a/frontend/app.ts b/frontend/app.ts
new file mode 100644
index 0000000..3333333
--- /dev/null
+++ b/frontend/app.ts
@@ -0,0 +1,1 @@
+export const app = 1;
";

fn task_json(published: &Value) -> Value {
    json!({
        "repository": {
            "id": "UmVwb3NpdG9yeTox",
            "name": "github.com/acme/app",
            "baseRef": "refs/heads/main",
            "baseRev": "d34db33f",
            "fileMatches": ["backend/main.go"]
        },
        "batchChange": { "name": "hello-world", "description": "Say hello" },
        "template": {
            "title": "Hello from ${{ batch_change.name }}",
            "body": "${{ batch_change.description }} in ${{ repository.search_result_paths | join(\",\") }}",
            "branch": "hello-world",
            "commit": {
                "message": "Hello ${{ outputs.greeting }}",
                "author": { "name": "Jane", "email": "jane@example.com" }
            },
            "published": published
        },
        "transformChanges": {
            "group": [
                { "directory": "frontend/", "branch": "hello-world-frontend" },
                { "directory": "backend/", "branch": "hello-world-backend", "repository": "github.com/acme/other" }
            ]
        }
    })
}

fn result_json() -> Value {
    json!({
        "diff": format!("{BACKEND_DIFF}{FRONTEND_DIFF}"),
        "changedFiles": { "modified": ["backend/main.go"], "added": ["frontend/app.ts"] },
        "outputs": { "greeting": "world" },
        "path": ""
    })
}

// ============================================================================
// Scenario: Grouped task serializes to one spec per branch
// ============================================================================

/// A frontend group applies to the repository while the backend group is
/// scoped elsewhere, so backend changes stay on the template branch.
#[test]
fn grouped_task_serializes_to_wire_specs() -> Result<()> {
    // Arrange
    let task: Task = serde_json::from_value(task_json(&json!([
        { "github.com/acme/*": false },
        { "github.com/acme/app@hello-world-frontend": "draft" }
    ])))?;
    let result: ExecutionResult = serde_json::from_value(result_json())?;
    let assembler =
        ChangesetSpecAssembler::new(Arc::new(MiniJinjaRenderer::new()), FeatureFlags::all());

    // Act
    let specs = assembler.assemble(&task, &result)?;
    let wire = serde_json::to_value(&specs)?;

    // Assert
    assert_eq!(
        wire,
        json!([
            {
                "baseRepository": "UmVwb3NpdG9yeTox",
                "baseRef": "refs/heads/main",
                "baseRev": "d34db33f",
                "headRepository": "UmVwb3NpdG9yeTox",
                "headRef": "refs/heads/hello-world",
                "title": "Hello from hello-world",
                "body": "Say hello in backend/main.go",
                "commits": [{
                    "message": "Hello world",
                    "authorName": "Jane",
                    "authorEmail": "jane@example.com",
                    "diff": BACKEND_DIFF
                }],
                "published": false
            },
            {
                "baseRepository": "UmVwb3NpdG9yeTox",
                "baseRef": "refs/heads/main",
                "baseRev": "d34db33f",
                "headRepository": "UmVwb3NpdG9yeTox",
                "headRef": "refs/heads/hello-world-frontend",
                "title": "Hello from hello-world",
                "body": "Say hello in backend/main.go",
                "commits": [{
                    "message": "Hello world",
                    "authorName": "Jane",
                    "authorEmail": "jane@example.com",
                    "diff": FRONTEND_DIFF
                }],
                "published": "draft"
            }
        ])
    );
    Ok(())
}

// ============================================================================
// Scenario: Absent publication is omitted from the wire shape
// ============================================================================

/// Newer services accept specs without a publication intent; the field is
/// left out entirely rather than sent as `null`.
#[test]
fn absent_publication_is_omitted() -> Result<()> {
    // Arrange
    let task: Task = serde_json::from_value(task_json(&Value::Null))?;
    let result: ExecutionResult = serde_json::from_value(result_json())?;
    let assembler =
        ChangesetSpecAssembler::new(Arc::new(MiniJinjaRenderer::new()), FeatureFlags::all());

    // Act
    let specs = assembler.assemble(&task, &result)?;
    let wire = serde_json::to_value(&specs)?;

    // Assert
    let entries = wire
        .as_array()
        .ok_or_else(|| eyre::eyre!("specs should serialize to an array"))?;
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|spec| spec.get("published").is_none()));
    Ok(())
}
