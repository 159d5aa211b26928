//! Unicode version tables
//!
//! Static metadata about published Unicode versions and the mapping from
//! version numbers to the directory names under `unicode.org/Public/`.
//! Early versions do not live at their own number: Unicode 4.0.1 is
//! published under `4.0-Update1`, the 2.1.x series under `2.1-Update*`,
//! and so on. Everything from 4.1.0 on uses the version number directly.
//!
//! All tables are immutable statics built once; nothing here touches the
//! network.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// The latest published (stable) Unicode version.
pub const UNICODE_STABLE_VERSION: &str = "16.0.0";

/// The version currently in draft review.
pub const UNICODE_DRAFT_VERSION: &str = "17.0.0";

/// Metadata for one published Unicode version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnicodeVersion {
    pub version: &'static str,
    pub documentation_url: &'static str,
    pub date: &'static str,
    pub ucd_url: &'static str,
}

macro_rules! unicode_version {
    ($version:literal, $doc:literal, $date:literal) => {
        UnicodeVersion {
            version: $version,
            documentation_url: concat!("https://www.unicode.org/versions/Unicode", $doc, "/"),
            date: $date,
            ucd_url: concat!("https://www.unicode.org/Public/", $version, "/ucd"),
        }
    };
}

/// Published Unicode versions, newest first.
pub static UNICODE_VERSIONS: &[UnicodeVersion] = &[
    unicode_version!("16.0.0", "16.0.0", "2024"),
    unicode_version!("15.1.0", "15.1.0", "2023"),
    unicode_version!("15.0.0", "15.0.0", "2022"),
    unicode_version!("14.0.0", "14.0.0", "2021"),
    unicode_version!("13.0.0", "13.0.0", "2020"),
    unicode_version!("12.1.0", "12.1.0", "2019"),
    unicode_version!("12.0.0", "12.0.0", "2019"),
    unicode_version!("11.0.0", "11.0.0", "2018"),
    unicode_version!("10.0.0", "10.0.0", "2017"),
    unicode_version!("9.0.0", "9.0.0", "2016"),
    unicode_version!("8.0.0", "8.0.0", "2015"),
    unicode_version!("7.0.0", "7.0.0", "2014"),
    unicode_version!("6.3.0", "6.3.0", "2013"),
    unicode_version!("6.2.0", "6.2.0", "2012"),
    unicode_version!("6.1.0", "6.1.0", "2012"),
    unicode_version!("6.0.0", "6.0.0", "2010"),
    unicode_version!("5.2.0", "5.2.0", "2009"),
    unicode_version!("5.1.0", "5.1.0", "2008"),
    unicode_version!("5.0.0", "5.0.0", "2006"),
    unicode_version!("4.1.0", "4.1.0", "2005"),
    unicode_version!("4.0.1", "4.0.1", "2004"),
    unicode_version!("4.0.0", "4.0.0", "2003"),
    unicode_version!("3.2.0", "3.2.0", "2002"),
    unicode_version!("3.1.1", "3.1.1", "2001"),
    unicode_version!("3.1.0", "3.1.0", "2001"),
    unicode_version!("3.0.1", "3.0.1", "2000"),
    unicode_version!("3.0.0", "3.0.0", "1999"),
    unicode_version!("2.1.9", "2.1.0", "1999"),
    unicode_version!("2.1.8", "2.1.0", "1998"),
    unicode_version!("2.1.5", "2.1.0", "1998"),
    unicode_version!("2.1.2", "2.1.0", "1998"),
    unicode_version!("2.0.0", "2.0.0", "1996"),
    unicode_version!("1.1.5", "1.1.0", "1995"),
    unicode_version!("1.1.0", "1.1.0", "1993"),
    unicode_version!("1.0.1", "1.0.0", "1992"),
];

/// Versions whose UCD files live under an `Update`-style directory name.
pub static UNICODE_TO_UCD_PATH_MAPPINGS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| {
        HashMap::from([
            // The 1.x files are all published under 1.1-Update.
            ("1.0.0", "1.1-Update"),
            ("1.0.1", "1.1-Update"),
            ("1.1.0", "1.1-Update"),
            ("1.1.5", "1.1-Update"),
            ("2.0.0", "2.0-Update"),
            ("2.1.0", "2.1-Update4"),
            ("2.1.1", "2.1-Update"),
            ("2.1.2", "2.1-Update1"),
            ("2.1.5", "2.1-Update2"),
            ("2.1.8", "2.1-Update3"),
            ("2.1.9", "2.1-Update4"),
            ("3.0.0", "3.0-Update"),
            ("3.0.1", "3.0-Update1"),
            ("3.1.0", "3.1-Update"),
            ("3.1.1", "3.1-Update1"),
            ("3.2.0", "3.2-Update"),
            ("4.0.0", "4.0-Update"),
            ("4.0.1", "4.0-Update1"),
        ])
    });

/// Looks up the metadata for one version.
pub fn find_version(version: &str) -> Option<&'static UnicodeVersion> {
    UNICODE_VERSIONS.iter().find(|v| v.version == version)
}

/// Maps a Unicode version to the `Public/` directory its UCD files live in.
///
/// Unmapped versions are returned as-is; newer versions use their number
/// directly in the path.
pub fn map_to_ucd_path_version(version: &str) -> &str {
    UNICODE_TO_UCD_PATH_MAPPINGS
        .get(version)
        .copied()
        .unwrap_or(version)
}

/// True when a version's UCD files live directly under its own number.
///
/// `Update`-style names and versions present in the mapping table need
/// translation first.
pub fn has_ucd_path(version: &str) -> bool {
    if version.contains("Update") {
        return false;
    }
    !UNICODE_TO_UCD_PATH_MAPPINGS.contains_key(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stable_version_is_listed_first() {
        assert_eq!(UNICODE_VERSIONS[0].version, UNICODE_STABLE_VERSION);
    }

    #[test]
    fn versions_carry_consistent_urls() {
        let version = find_version("15.1.0").expect("known version");
        assert_eq!(
            version.documentation_url,
            "https://www.unicode.org/versions/Unicode15.1.0/"
        );
        assert_eq!(version.ucd_url, "https://www.unicode.org/Public/15.1.0/ucd");
        assert_eq!(version.date, "2023");
    }

    #[test]
    fn point_releases_share_documentation() {
        let version = find_version("2.1.9").expect("known version");
        assert_eq!(
            version.documentation_url,
            "https://www.unicode.org/versions/Unicode2.1.0/"
        );
    }

    #[test]
    fn unknown_versions_are_absent() {
        assert_eq!(find_version("99.0.0"), None);
    }

    #[test]
    fn maps_update_era_versions() {
        assert_eq!(map_to_ucd_path_version("4.0.1"), "4.0-Update1");
        assert_eq!(map_to_ucd_path_version("2.1.9"), "2.1-Update4");
        assert_eq!(map_to_ucd_path_version("1.1.0"), "1.1-Update");
    }

    #[test]
    fn modern_versions_map_to_themselves() {
        assert_eq!(map_to_ucd_path_version("15.1.0"), "15.1.0");
        assert_eq!(map_to_ucd_path_version("5.0.0"), "5.0.0");
    }

    #[test]
    fn has_ucd_path_rejects_mapped_and_update_names() {
        assert!(has_ucd_path("15.1.0"));
        assert!(has_ucd_path("5.0.0"));
        assert!(!has_ucd_path("4.0.1"));
        assert!(!has_ucd_path("2.1-Update4"));
    }
}
