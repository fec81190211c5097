//! Conflict checks for the groups of one repository.

use super::GroupValidationError;
use crate::changeset::domain::Group;
use std::collections::HashSet;

/// Checks groups in declaration order and reports the first conflict.
///
/// Each group is first checked for a branch already used by an earlier
/// group, then for a branch equal to `default_branch`.
///
/// # Errors
///
/// Returns [`GroupValidationError::DuplicateBranch`] or
/// [`GroupValidationError::DefaultBranchCollision`] for the first violating
/// group.
///
/// # Examples
///
///     use changeset_specs::changeset::domain::Group;
///     use changeset_specs::changeset::grouping::validate_groups;
///
///     let groups = [Group::new("api/", "same"), Group::new("web/", "same")];
///     assert!(validate_groups("github.com/acme/app", "main", &groups).is_err());
///     assert!(validate_groups("github.com/acme/app", "main", &[]).is_ok());
pub fn validate_groups(
    repository_name: &str,
    default_branch: &str,
    groups: &[Group],
) -> Result<(), GroupValidationError> {
    let mut seen_branches = HashSet::with_capacity(groups.len());

    for group in groups {
        if !seen_branches.insert(group.branch.as_str()) {
            return Err(GroupValidationError::DuplicateBranch {
                repository: repository_name.to_owned(),
                branch: group.branch.clone(),
            });
        }

        if group.branch == default_branch {
            return Err(GroupValidationError::DefaultBranchCollision {
                repository: repository_name.to_owned(),
                branch: default_branch.to_owned(),
            });
        }
    }

    Ok(())
}
