//! Behavioural tests for changeset spec assembly.

use std::sync::Arc;

use changeset_specs::changeset::{
    adapters::MiniJinjaRenderer,
    domain::{
        BatchChangeAttributes, ChangesetSpec, ChangesetTemplate, CommitTemplate, ExecutionResult,
        FeatureFlags, Group, PublishedPolicy, PublishedValue, RepositoryTarget, Task,
        TransformChanges,
    },
    services::{ChangesetAssemblyError, ChangesetAssemblyResult, ChangesetSpecAssembler},
};
use eyre::{Result, WrapErr, ensure, eyre};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

#[derive(Default)]
struct AssemblyWorld {
    template: Option<ChangesetTemplate>,
    groups: Vec<Group>,
    changed_paths: Vec<String>,
    features: Option<FeatureFlags>,
    outcome: Option<ChangesetAssemblyResult<Vec<ChangesetSpec>>>,
}

impl AssemblyWorld {
    fn specs(&self) -> Result<&[ChangesetSpec]> {
        match &self.outcome {
            Some(Ok(specs)) => Ok(specs),
            Some(Err(error)) => Err(eyre!("assembly failed: {error}")),
            None => Err(eyre!("changeset specs were not assembled")),
        }
    }

    fn error(&self) -> Result<&ChangesetAssemblyError> {
        match &self.outcome {
            Some(Err(error)) => Ok(error),
            Some(Ok(specs)) => Err(eyre!("expected failure, got {} specs", specs.len())),
            None => Err(eyre!("changeset specs were not assembled")),
        }
    }

    fn template_mut(&mut self) -> Result<&mut ChangesetTemplate> {
        self.template
            .as_mut()
            .ok_or_else(|| eyre!("no changeset template in scenario world"))
    }
}

#[fixture]
fn world() -> AssemblyWorld {
    AssemblyWorld::default()
}

fn file_diff(path: &str) -> String {
    format!(
        "diff --git a/{path} b/{path}\n\
         index 1111111..2222222 100644\n\
         --- a/{path}\n\
         +++ b/{path}\n\
         @@ -1,1 +1,1 @@\n\
         -old\n\
         +new\n"
    )
}

#[given(r#"a changeset template on branch "{branch}""#)]
fn changeset_template(world: &mut AssemblyWorld, branch: String) {
    world.template = Some(
        ChangesetTemplate::new(
            "${{ batch_change.name }}",
            branch,
            CommitTemplate::new("Apply ${{ batch_change.name }}"),
        )
        .with_body("Changes in ${{ repository.name }}"),
    );
}

#[given(r#"a group sending "{directory}" to branch "{branch}""#)]
fn group_sending(world: &mut AssemblyWorld, directory: String, branch: String) {
    world.groups.push(Group::new(directory, branch));
}

#[given(r#"the diff touches "{path}""#)]
fn diff_touches(world: &mut AssemblyWorld, path: String) {
    world.changed_paths.push(path);
}

#[given(r#"the service version is "{version}""#)]
fn service_version(world: &mut AssemblyWorld, version: String) -> Result<()> {
    let features = FeatureFlags::from_version(&version).wrap_err("derive feature flags")?;
    world.features = Some(features);
    Ok(())
}

#[given(r#"only repositories matching "{pattern}" are published"#)]
fn published_override(world: &mut AssemblyWorld, pattern: String) -> Result<()> {
    let policy = PublishedPolicy::default()
        .with_override(&pattern, PublishedValue::Explicit(true))
        .wrap_err("build publication policy")?;
    world.template_mut()?.published = Some(policy);
    Ok(())
}

#[when("the changeset specs are assembled")]
fn assemble_specs(world: &mut AssemblyWorld) -> Result<()> {
    let template = world
        .template
        .clone()
        .ok_or_else(|| eyre!("no changeset template in scenario world"))?;
    let mut task = Task::new(
        RepositoryTarget::new(
            "UmVwb3NpdG9yeTox",
            "github.com/acme/app",
            "refs/heads/main",
            "d34db33f",
        ),
        BatchChangeAttributes {
            name: "regroup".to_owned(),
            description: String::new(),
        },
        template,
    );
    if !world.groups.is_empty() {
        task = task.with_transform_changes(TransformChanges::new(world.groups.clone()));
    }
    let diff: String = world.changed_paths.iter().map(|path| file_diff(path)).collect();

    let assembler = ChangesetSpecAssembler::new(
        Arc::new(MiniJinjaRenderer::new()),
        world.features.unwrap_or_else(FeatureFlags::all),
    );
    world.outcome = Some(assembler.assemble(&task, &ExecutionResult::new(diff)));
    Ok(())
}

#[then("{count} changeset specs are produced")]
fn specs_produced(world: &AssemblyWorld, count: usize) -> Result<()> {
    let specs = world.specs()?;
    ensure!(
        specs.len() == count,
        "expected {count} specs, got {}",
        specs.len()
    );
    ensure!(specs.iter().all(|spec| spec.title == "regroup"));
    Ok(())
}

#[then(r#"the spec on branch "{branch}" changes "{path}""#)]
fn spec_changes(world: &AssemblyWorld, branch: String, path: String) -> Result<()> {
    let spec = world
        .specs()?
        .iter()
        .find(|spec| spec.branch() == branch)
        .ok_or_else(|| eyre!("no spec on branch {branch}"))?;
    let commit = spec.commit().ok_or_else(|| eyre!("spec has no commit"))?;
    ensure!(
        commit.diff.contains(&format!("+++ b/{path}\n")),
        "branch {branch} does not change {path}"
    );
    Ok(())
}

#[then(r#"assembly fails with a validation error mentioning "{branch}""#)]
fn validation_failure(world: &AssemblyWorld, branch: String) -> Result<()> {
    let error = world.error()?;
    ensure!(error.is_validation_error(), "unexpected error: {error}");
    ensure!(error.to_string().contains(&format!("{branch:?}")));
    Ok(())
}

#[then("assembly fails because the service requires a publication value")]
fn optional_published_failure(world: &AssemblyWorld) -> Result<()> {
    let error = world.error()?;
    ensure!(
        *error == ChangesetAssemblyError::OptionalPublishedUnsupported,
        "unexpected error: {error}"
    );
    ensure!(error.is_validation_error());
    Ok(())
}

#[then("every changeset spec is unpublished")]
fn every_spec_unpublished(world: &AssemblyWorld) -> Result<()> {
    let specs = world.specs()?;
    ensure!(!specs.is_empty());
    ensure!(
        specs
            .iter()
            .all(|spec| spec.published == PublishedValue::Explicit(false))
    );
    Ok(())
}

#[scenario(
    path = "tests/features/changeset_assembly.feature",
    name = "Files are split across branches by directory"
)]
fn split_by_directory(world: AssemblyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/changeset_assembly.feature",
    name = "Without groups the diff stays on the template branch"
)]
fn no_groups(world: AssemblyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/changeset_assembly.feature",
    name = "Duplicate group branches are rejected"
)]
fn duplicate_branches(world: AssemblyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/changeset_assembly.feature",
    name = "Older services require a publication value"
)]
fn optional_published_unsupported(world: AssemblyWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/changeset_assembly.feature",
    name = "Unmatched publication overrides fall back to unpublished on older services"
)]
fn unmatched_override_unpublished(world: AssemblyWorld) {
    let _ = world;
}
