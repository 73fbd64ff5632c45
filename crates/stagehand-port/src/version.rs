// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Host version tokens and the oracle that reports the running version.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a host version string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid host version {input:?}: {reason}")]
pub struct VersionParseError {
    /// The rejected input.
    pub input: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

/// Dotted numeric host version, e.g. `2.9.1608.2302`.
///
/// Missing trailing components compare as zero, so `2.9` == `2.9.0.0`.
#[derive(Clone, Debug)]
pub struct HostVersion {
    parts: Vec<u32>,
}

impl HostVersion {
    /// Build a version from numeric components.
    pub fn from_parts(parts: impl Into<Vec<u32>>) -> Self {
        Self {
            parts: parts.into(),
        }
    }

    /// Numeric components in order.
    pub fn parts(&self) -> &[u32] {
        &self.parts
    }
}

impl FromStr for HostVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(VersionParseError {
                input: s.to_string(),
                reason: "empty",
            });
        }
        let parts = trimmed
            .split('.')
            .map(str::parse::<u32>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| VersionParseError {
                input: s.to_string(),
                reason: "components must be unsigned integers",
            })?;
        Ok(Self { parts })
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for part in &self.parts {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
            first = false;
        }
        Ok(())
    }
}

impl Ord for HostVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        for i in 0..len {
            let a = self.parts.get(i).copied().unwrap_or(0);
            let b = other.parts.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for HostVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HostVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HostVersion {}

/// Version port: which host release is running.
pub trait VersionOracle: Send + Sync {
    /// The running host version.
    fn current(&self) -> HostVersion;

    /// Order two versions. Override only if the host uses a non-numeric scheme.
    fn compare(&self, a: &HostVersion, b: &HostVersion) -> Ordering {
        a.cmp(b)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn v(s: &str) -> HostVersion {
        s.parse().unwrap()
    }

    #[test]
    fn trailing_zeros_are_insignificant() {
        assert_eq!(v("2.9"), v("2.9.0.0"));
        assert!(v("2.9.1608.2302") > v("2.9"));
    }

    #[test]
    fn compares_numerically_not_lexically() {
        assert!(v("2.10.0") > v("2.9.9999"));
        assert!(v("2.8.1603.0401") < v("2.8.1605.2601"));
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<HostVersion>().is_err());
        assert!("2.x.1".parse::<HostVersion>().is_err());
        assert!("2..1".parse::<HostVersion>().is_err());
    }

    #[test]
    fn display_round_trips_components() {
        assert_eq!(v("3.0.1").to_string(), "3.0.1");
    }
}
