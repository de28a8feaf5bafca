//! Version extraction from command output.

use semver::{BuildMetadata, Prerelease, Version};

lazy_regex!(
    RE_VERSION,
    r"v?(\d+)(?:\.(\d+)(?:\.(\d+)(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?)?)?"
);

/// Extract the leftmost version-like token from `text`.
///
/// Missing minor and patch segments are zero-filled. Prerelease and build
/// metadata are only read from complete `X.Y.Z` tokens. Returns `None` when
/// the text holds no digits at all or the numbers overflow.
pub fn coerce(text: &str) -> Option<Version> {
    let caps = RE_VERSION.captures(text)?;
    let segment = |idx: usize| -> Option<u64> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let mut version = Version::new(segment(1)?, segment(2)?, segment(3)?);
    if let Some(pre) = caps.get(4) {
        version.pre = Prerelease::new(&normalize_prerelease(pre.as_str())).ok()?;
    }
    if let Some(build) = caps.get(5) {
        version.build = BuildMetadata::new(build.as_str()).ok()?;
    }
    Some(version)
}

/// Strip leading zeros from numeric prerelease identifiers (`rc.01` -> `rc.1`).
fn normalize_prerelease(pre: &str) -> String {
    pre.split('.')
        .map(|ident| {
            if ident.len() > 1 && ident.bytes().all(|b| b.is_ascii_digit()) {
                let trimmed = ident.trim_start_matches('0');
                if trimmed.is_empty() {
                    "0"
                } else {
                    trimmed
                }
            } else {
                ident
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_plain_version() {
        assert_eq!(coerce("1.2.3"), Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn coerce_with_v_prefix() {
        assert_eq!(coerce("v18.17.0\n"), Some(Version::new(18, 17, 0)));
    }

    #[test]
    fn coerce_from_banner() {
        let output = "ruby 3.2.1 (2023-02-08 revision 31819e82c8)";
        assert_eq!(coerce(output), Some(Version::new(3, 2, 1)));
    }

    #[test]
    fn coerce_takes_leftmost_token() {
        assert_eq!(
            coerce("Python 3.12 (built with gcc 11.4.0)"),
            Some(Version::new(3, 12, 0))
        );
        assert_eq!(
            coerce("Docker 24 build, version 24.0.7"),
            Some(Version::new(24, 0, 0))
        );
    }

    #[test]
    fn coerce_normalizes_leading_zero_prerelease() {
        let version = coerce("1.3.0-rc.01").unwrap();
        assert_eq!(version.pre.as_str(), "rc.1");
        assert_eq!(coerce("2.0.0-00").unwrap().pre.as_str(), "0");
    }

    #[test]
    fn normalize_prerelease_keeps_alphanumerics() {
        assert_eq!(normalize_prerelease("beta.007.x01"), "beta.7.x01");
    }

    #[test]
    fn coerce_keeps_prerelease_and_build() {
        let version = coerce("2.0.0-rc.1+build.5").unwrap();
        assert_eq!(version.pre.as_str(), "rc.1");
        assert_eq!(version.build.as_str(), "build.5");
    }

    #[test]
    fn coerce_partial_versions_zero_fill() {
        assert_eq!(coerce("Python 3.12"), Some(Version::new(3, 12, 0)));
        assert_eq!(coerce("release 7"), Some(Version::new(7, 0, 0)));
    }

    #[test]
    fn coerce_no_match() {
        assert_eq!(coerce("no version here"), None);
        assert_eq!(coerce(""), None);
    }

    #[test]
    fn coerce_overflow_is_none() {
        assert_eq!(coerce("99999999999999999999999"), None);
    }
}
