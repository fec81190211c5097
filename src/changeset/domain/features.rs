//! Capabilities of the connected batch-changes service.

use super::FeatureFlagsError;
use chrono::{Datelike, NaiveDate};
use semver::Version;

/// First release accepting changesets without a publication intent.
const OPTIONAL_PUBLISHED_RELEASE: Version = Version::new(3, 30, 0);
/// First release accepting default commit author details.
const AUTO_AUTHOR_RELEASE: Version = Version::new(3, 20, 0);
/// Insider build date equivalent to [`OPTIONAL_PUBLISHED_RELEASE`].
const OPTIONAL_PUBLISHED_BUILD_DATE: (i32, u32, u32) = (2021, 6, 21);
/// Insider build date equivalent to [`AUTO_AUTHOR_RELEASE`].
const AUTO_AUTHOR_BUILD_DATE: (i32, u32, u32) = (2020, 9, 10);

/// Feature flags toggled by the caller from the service's declared version.
///
/// # Examples
///
///     use changeset_specs::changeset::domain::FeatureFlags;
///
///     let flags = FeatureFlags::from_version("3.29.4").expect("release version");
///     assert!(flags.include_auto_author_details);
///     assert!(!flags.allow_optional_published);
///
///     let insider = FeatureFlags::from_version("105117_2021-07-01_a1b2c3d").expect("insider build");
///     assert_eq!(insider, FeatureFlags::all());
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// The service accepts an absent publication value.
    pub allow_optional_published: bool,
    /// The service accepts default author details for unattributed commits.
    pub include_auto_author_details: bool,
}

impl FeatureFlags {
    /// Returns flags with every capability enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            allow_optional_published: true,
            include_auto_author_details: true,
        }
    }

    /// Derives flags from a service version string.
    ///
    /// Accepts release versions (`3.30.0`, `v3.30.1`, pre-releases compare
    /// as their release), insider builds (`<build>_<YYYY-MM-DD>_<commit>`)
    /// and `dev`, which enables everything.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureFlagsError::UnparsableVersion`] for any other value.
    pub fn from_version(version: &str) -> Result<Self, FeatureFlagsError> {
        let trimmed = version.trim();
        if trimmed == "dev" {
            return Ok(Self::all());
        }

        if let Ok(parsed) = Version::parse(trimmed.strip_prefix('v').unwrap_or(trimmed)) {
            let release = Version::new(parsed.major, parsed.minor, parsed.patch);
            return Ok(Self {
                allow_optional_published: release >= OPTIONAL_PUBLISHED_RELEASE,
                include_auto_author_details: release >= AUTO_AUTHOR_RELEASE,
            });
        }

        let built_on = insider_build_date(trimmed)
            .map(|date| (date.year(), date.month(), date.day()))
            .ok_or_else(|| FeatureFlagsError::UnparsableVersion(version.to_owned()))?;
        Ok(Self {
            allow_optional_published: built_on >= OPTIONAL_PUBLISHED_BUILD_DATE,
            include_auto_author_details: built_on >= AUTO_AUTHOR_BUILD_DATE,
        })
    }
}

/// Extracts the build date of an insider version `<build>_<date>_<commit>`.
fn insider_build_date(version: &str) -> Option<NaiveDate> {
    let mut parts = version.split('_');
    let build = parts.next()?;
    let date = parts.next()?;
    let commit = parts.next()?;
    let well_formed = !build.is_empty()
        && build.chars().all(|c| c.is_ascii_digit())
        && !commit.is_empty()
        && parts.next().is_none();
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
