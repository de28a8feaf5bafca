//! Version range expressions.
//!
//! Supports the range syntax used by npm-style tooling:
//!
//! - primitive comparators: `<`, `<=`, `>`, `>=`, `=`
//! - caret (`^1.2.3`) and tilde (`~1.2.3`, `~>1.2.3`) ranges
//! - wildcards and partials: `*`, `1.x`, `1.2.*`, `1`, `1.2`
//! - hyphen ranges: `1.2.3 - 2.3.4`, also mixed with other comparators
//! - alternatives: `^1.0.0 || ^2.0.0`
//!
//! Every expression is desugared into plain comparator sets when parsed,
//! so matching is a straight walk over `(op, version)` pairs.

use semver::{BuildMetadata, Prerelease, Version};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::VersionError;

lazy_regex!(RE_OP_SPACING, r"(~>|~|\^|<=|>=|<|>|=)\s+");
lazy_regex!(RE_OP, r"^(~>|~|\^|<=|>=|<|>|=)?(.*)$");
lazy_regex!(
    RE_PARTIAL,
    r"^[vV]?(\d+|[xX*])(?:\.(\d+|[xX*])(?:\.(\d+|[xX*])(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?)?)?$"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
}

impl Op {
    fn symbol(self) -> &'static str {
        match self {
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
            Op::Eq => "=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Comparator {
    op: Op,
    version: Version,
}

impl Comparator {
    fn new(op: Op, version: Version) -> Self {
        Self { op, version }
    }

    fn matches(&self, version: &Version) -> bool {
        let ord = cmp_precedence(version, &self.version);
        match self.op {
            Op::Lt => ord == Ordering::Less,
            Op::Le => ord != Ordering::Greater,
            Op::Gt => ord == Ordering::Greater,
            Op::Ge => ord != Ordering::Less,
            Op::Eq => ord == Ordering::Equal,
        }
    }
}

/// A parsed version range: a union of comparator sets.
///
/// An empty comparator set matches any release version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    sets: Vec<Vec<Comparator>>,
}

impl Range {
    /// Parse a range expression.
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let sets = input
            .split("||")
            .map(|set| parse_set(set).map_err(|reason| invalid(input, reason)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sets })
    }

    /// Check whether `version` falls inside this range.
    ///
    /// Prerelease versions only match a comparator set that names a
    /// prerelease on the same `major.minor.patch` tuple.
    pub fn matches(&self, version: &Version) -> bool {
        self.sets.iter().any(|set| set_matches(set, version))
    }
}

impl FromStr for Range {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sets: Vec<String> = self
            .sets
            .iter()
            .map(|set| {
                if set.is_empty() {
                    "*".to_string()
                } else {
                    set.iter()
                        .map(|c| format!("{}{}", c.op.symbol(), c.version))
                        .collect::<Vec<_>>()
                        .join(" ")
                }
            })
            .collect();
        write!(f, "{}", sets.join(" || "))
    }
}

fn invalid(range: &str, reason: String) -> VersionError {
    VersionError::InvalidRange {
        range: range.to_string(),
        reason,
    }
}

fn set_matches(set: &[Comparator], version: &Version) -> bool {
    if !set.iter().all(|c| c.matches(version)) {
        return false;
    }
    if version.pre.is_empty() {
        return true;
    }
    set.iter().any(|c| {
        !c.version.pre.is_empty()
            && c.version.major == version.major
            && c.version.minor == version.minor
            && c.version.patch == version.patch
    })
}

/// Semver precedence: build metadata does not participate.
fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}

fn parse_set(set: &str) -> Result<Vec<Comparator>, String> {
    let set = set.trim();
    if set.is_empty() {
        return Ok(Vec::new());
    }

    let normalized = RE_OP_SPACING.replace_all(set, "$1");
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let mut comparators = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        if let (Some(&"-"), Some(&to)) = (tokens.get(i + 1), tokens.get(i + 2)) {
            comparators.extend(hyphen(Partial::parse(token)?, Partial::parse(to)?));
            i += 3;
            continue;
        }
        i += 1;

        let caps = RE_OP
            .captures(token)
            .ok_or_else(|| format!("unrecognised comparator '{}'", token))?;
        let op = caps.get(1).map_or("", |m| m.as_str());
        let partial = Partial::parse(&caps[2])?;
        comparators.extend(desugar(op, partial));
    }
    Ok(comparators)
}

/// A version with optional (wildcard) segments.
#[derive(Debug, Clone)]
struct Partial {
    major: Option<u64>,
    minor: Option<u64>,
    patch: Option<u64>,
    pre: Prerelease,
}

impl Partial {
    fn parse(text: &str) -> Result<Self, String> {
        let caps = RE_PARTIAL
            .captures(text)
            .ok_or_else(|| format!("'{}' is not a version", text))?;

        let segment = |idx: usize| -> Result<Option<u64>, String> {
            match caps.get(idx).map(|m| m.as_str()) {
                None | Some("x") | Some("X") | Some("*") => Ok(None),
                Some(digits) => digits
                    .parse()
                    .map(Some)
                    .map_err(|_| format!("'{}' is too large", digits)),
            }
        };

        let major = segment(1)?;
        // Everything after a wildcard is a wildcard too.
        let minor = major.and(segment(2)?);
        let patch = minor.and(segment(3)?);

        let pre = match (patch, caps.get(4)) {
            (Some(_), Some(pre)) => {
                Prerelease::new(pre.as_str()).map_err(|e| format!("'{}': {}", text, e))?
            }
            _ => Prerelease::EMPTY,
        };
        if let Some(build) = caps.get(5) {
            BuildMetadata::new(build.as_str()).map_err(|e| format!("'{}': {}", text, e))?;
        }

        Ok(Self {
            major,
            minor,
            patch,
            pre,
        })
    }

    fn full(&self) -> Option<Version> {
        let mut version = Version::new(self.major?, self.minor?, self.patch?);
        version.pre = self.pre.clone();
        Some(version)
    }
}

fn release(major: u64, minor: u64, patch: u64) -> Version {
    Version::new(major, minor, patch)
}

/// The lowest possible version of `major.minor.patch`, below all its prereleases.
fn floor(major: u64, minor: u64, patch: u64) -> Version {
    let mut version = Version::new(major, minor, patch);
    version.pre = Prerelease::new("0").unwrap_or(Prerelease::EMPTY);
    version
}

fn nothing() -> Vec<Comparator> {
    vec![Comparator::new(Op::Lt, floor(0, 0, 0))]
}

fn desugar(op: &str, p: Partial) -> Vec<Comparator> {
    match op {
        "^" => caret(p),
        "~" | "~>" => tilde(p),
        ">" => greater(p),
        ">=" => at_least(p),
        "<" => less(p),
        "<=" => at_most(p),
        _ => exact(p),
    }
}

fn exact(p: Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.full()) {
        (None, _, _) => Vec::new(),
        (Some(major), None, _) => vec![
            Comparator::new(Op::Ge, release(major, 0, 0)),
            Comparator::new(Op::Lt, floor(major.saturating_add(1), 0, 0)),
        ],
        (Some(major), Some(minor), None) => vec![
            Comparator::new(Op::Ge, release(major, minor, 0)),
            Comparator::new(Op::Lt, floor(major, minor.saturating_add(1), 0)),
        ],
        (_, _, Some(full)) => vec![Comparator::new(Op::Eq, full)],
    }
}

fn tilde(p: Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.full()) {
        (Some(major), Some(minor), Some(full)) => vec![
            Comparator::new(Op::Ge, full),
            Comparator::new(Op::Lt, floor(major, minor.saturating_add(1), 0)),
        ],
        _ => exact(p),
    }
}

fn caret(p: Partial) -> Vec<Comparator> {
    let (major, minor, patch) = match (p.major, p.minor, p.patch) {
        (None, _, _) => return Vec::new(),
        (Some(_), None, _) => return exact(p),
        (Some(major), Some(minor), patch) => (major, minor, patch),
    };

    let lower = match p.full() {
        Some(full) => full,
        None => release(major, minor, 0),
    };
    let upper = if major > 0 {
        floor(major.saturating_add(1), 0, 0)
    } else if minor > 0 || patch.is_none() {
        floor(0, minor.saturating_add(1), 0)
    } else {
        // ^0.0.z only admits 0.0.z itself (and its prereleases).
        floor(0, 0, patch.unwrap_or(0).saturating_add(1))
    };

    vec![
        Comparator::new(Op::Ge, lower),
        Comparator::new(Op::Lt, upper),
    ]
}

fn greater(p: Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.full()) {
        (None, _, _) => nothing(),
        (Some(major), None, _) => vec![Comparator::new(
            Op::Ge,
            release(major.saturating_add(1), 0, 0),
        )],
        (Some(major), Some(minor), None) => vec![Comparator::new(
            Op::Ge,
            release(major, minor.saturating_add(1), 0),
        )],
        (_, _, Some(full)) => vec![Comparator::new(Op::Gt, full)],
    }
}

fn at_least(p: Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.full()) {
        (None, _, _) => Vec::new(),
        (Some(major), None, _) => vec![Comparator::new(Op::Ge, release(major, 0, 0))],
        (Some(major), Some(minor), None) => {
            vec![Comparator::new(Op::Ge, release(major, minor, 0))]
        }
        (_, _, Some(full)) => vec![Comparator::new(Op::Ge, full)],
    }
}

fn less(p: Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.full()) {
        (None, _, _) => nothing(),
        (Some(major), None, _) => vec![Comparator::new(Op::Lt, floor(major, 0, 0))],
        (Some(major), Some(minor), None) => vec![Comparator::new(Op::Lt, floor(major, minor, 0))],
        (_, _, Some(full)) => vec![Comparator::new(Op::Lt, full)],
    }
}

fn at_most(p: Partial) -> Vec<Comparator> {
    match (p.major, p.minor, p.full()) {
        (None, _, _) => Vec::new(),
        (Some(major), None, _) => vec![Comparator::new(
            Op::Lt,
            floor(major.saturating_add(1), 0, 0),
        )],
        (Some(major), Some(minor), None) => vec![Comparator::new(
            Op::Lt,
            floor(major, minor.saturating_add(1), 0),
        )],
        (_, _, Some(full)) => vec![Comparator::new(Op::Le, full)],
    }
}

fn hyphen(from: Partial, to: Partial) -> Vec<Comparator> {
    let mut comparators = at_least(from);
    comparators.extend(at_most(to));
    comparators
}
