//! Selection of the groups applying to one repository.

use crate::changeset::domain::{Group, TransformChanges};

/// Returns the groups applying to `repository_name`, in declaration order.
///
/// A group applies when its repository filter is empty or equals the
/// repository name. Absent grouping rules yield no groups.
#[must_use]
pub fn groups_for_repository(
    repository_name: &str,
    transform_changes: Option<&TransformChanges>,
) -> Vec<Group> {
    transform_changes.map_or_else(Vec::new, |transform| {
        transform
            .groups
            .iter()
            .filter(|group| group.applies_to(repository_name))
            .cloned()
            .collect()
    })
}
