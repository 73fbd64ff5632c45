// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Version gating.
//!
//! Every version-dependent operation computes one [`VersionGate`] at its top
//! and branches on it. No threshold comparison happens anywhere else.

use std::cmp::Ordering;

use stagehand_port::{HostVersion, VersionOracle};

/// Minimum host versions for the gated features.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VersionThresholds {
    /// First version exposing the `itemlist` property.
    pub item_list: HostVersion,
    /// First version supporting linked sources and scene-targeted `additem`.
    pub global_source: HostVersion,
}

/// Snapshot of which gated features the running host supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionGate {
    item_list: bool,
    global_source: bool,
}

impl VersionGate {
    /// Evaluate the thresholds against `current` using the oracle's ordering.
    pub fn evaluate(
        oracle: &dyn VersionOracle,
        current: &HostVersion,
        thresholds: &VersionThresholds,
    ) -> Self {
        let at_least = |min: &HostVersion| oracle.compare(current, min) != Ordering::Less;
        Self {
            item_list: at_least(&thresholds.item_list),
            global_source: at_least(&thresholds.global_source),
        }
    }

    /// The host can list the items sharing a context (`itemlist`).
    pub fn supports_item_list(self) -> bool {
        self.item_list
    }

    /// The host supports linked sources and `link:..|s:..|additem`.
    pub fn supports_global_source(self) -> bool {
        self.global_source
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct Fixed;

    impl VersionOracle for Fixed {
        fn current(&self) -> HostVersion {
            HostVersion::from_parts([0])
        }
    }

    fn thresholds() -> VersionThresholds {
        VersionThresholds {
            item_list: "2.8".parse().unwrap(),
            global_source: "2.9".parse().unwrap(),
        }
    }

    #[test]
    fn thresholds_are_inclusive() {
        let gate = VersionGate::evaluate(&Fixed, &"2.8".parse().unwrap(), &thresholds());
        assert!(gate.supports_item_list());
        assert!(!gate.supports_global_source());
    }

    #[test]
    fn old_host_supports_nothing() {
        let gate = VersionGate::evaluate(&Fixed, &"2.7.1702".parse().unwrap(), &thresholds());
        assert!(!gate.supports_item_list());
        assert!(!gate.supports_global_source());
    }

    #[test]
    fn new_host_supports_everything() {
        let gate = VersionGate::evaluate(&Fixed, &"3.0".parse().unwrap(), &thresholds());
        assert!(gate.supports_item_list());
        assert!(gate.supports_global_source());
    }
}
