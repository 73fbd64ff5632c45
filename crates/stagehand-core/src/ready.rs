// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Process-scoped readiness state.
//!
//! The host fires a one-shot "ready" event; nothing may enumerate items
//! before it. Phases only move forward:
//!
//! ```text
//! NotReady --HostSignaled--> ReadySignaled --Initialize--> Initialized
//! ```
//!
//! Waiting is a subscription to a watch broadcast, so late subscribers see
//! the current phase immediately.

use std::sync::Mutex;

use stagehand_port::HostVersion;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::error::{SdkError, SdkResult};

/// Readiness phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyPhase {
    /// The host has not signalled yet.
    NotReady,
    /// The host signalled; SDK initialization has not completed.
    ReadySignaled,
    /// `ready()` completed.
    Initialized,
}

/// Inputs to the readiness state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyEvent {
    /// The host's one-shot ready event fired.
    HostSignaled,
    /// The SDK finished applying `ready()` options.
    Initialize,
}

impl ReadyPhase {
    /// The single transition function. Events that do not apply are ignored.
    pub fn next(self, event: ReadyEvent) -> Self {
        match (self, event) {
            (Self::NotReady, ReadyEvent::HostSignaled) => Self::ReadySignaled,
            (Self::ReadySignaled, ReadyEvent::Initialize) => Self::Initialized,
            (phase, _) => phase,
        }
    }
}

/// Options accepted by [`Readiness::ready`].
#[derive(Clone, Debug, Default)]
pub struct ReadyOptions {
    /// Pretend the host runs this version instead of what the oracle reports.
    pub version: Option<HostVersion>,
}

/// Owner of the readiness phase and the optional version override.
#[derive(Debug)]
pub struct Readiness {
    phase: watch::Sender<ReadyPhase>,
    version_override: Mutex<Option<HostVersion>>,
}

impl Default for Readiness {
    fn default() -> Self {
        Self::new()
    }
}

impl Readiness {
    /// Start in [`ReadyPhase::NotReady`].
    pub fn new() -> Self {
        let (phase, _) = watch::channel(ReadyPhase::NotReady);
        Self {
            phase,
            version_override: Mutex::new(None),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> ReadyPhase {
        *self.phase.borrow()
    }

    /// Apply one event and broadcast the result if it changed anything.
    pub fn apply(&self, event: ReadyEvent) -> ReadyPhase {
        self.phase.send_if_modified(|phase| {
            let next = phase.next(event);
            let changed = next != *phase;
            if changed {
                debug!(from = ?phase, to = ?next, "readiness transition");
                *phase = next;
            }
            changed
        });
        self.phase()
    }

    /// The host's ready event. Only the first call has an effect.
    pub fn signal_host_ready(&self) {
        if self.apply(ReadyEvent::HostSignaled) == ReadyPhase::ReadySignaled {
            info!("host signalled ready");
        }
    }

    /// Resolve once the host has signalled (immediately if it already has).
    pub async fn wait(&self) -> SdkResult<()> {
        let mut rx = self.phase.subscribe();
        rx.wait_for(|phase| *phase != ReadyPhase::NotReady)
            .await
            .map(|_| ())
            .map_err(|_| SdkError::NotReady)
    }

    /// Apply `options`, wait for the host, then mark the SDK initialized.
    ///
    /// The version override is in place before this resolves, so any
    /// operation sequenced after `ready()` observes it.
    pub async fn ready(&self, options: ReadyOptions) -> SdkResult<()> {
        if let Some(version) = options.version {
            info!(%version, "host version overridden");
            *self
                .version_override
                .lock()
                .unwrap_or_else(|e| e.into_inner()) = Some(version);
        }
        self.wait().await?;
        self.apply(ReadyEvent::Initialize);
        Ok(())
    }

    /// The version override set by [`Readiness::ready`], if any.
    pub fn version_override(&self) -> Option<HostVersion> {
        self.version_override
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn transitions_only_move_forward() {
        use ReadyEvent::*;
        use ReadyPhase::*;
        assert_eq!(NotReady.next(Initialize), NotReady);
        assert_eq!(NotReady.next(HostSignaled), ReadySignaled);
        assert_eq!(ReadySignaled.next(HostSignaled), ReadySignaled);
        assert_eq!(ReadySignaled.next(Initialize), Initialized);
        assert_eq!(Initialized.next(HostSignaled), Initialized);
    }

    #[tokio::test]
    async fn wait_resolves_immediately_after_signal() {
        let r = Readiness::new();
        r.signal_host_ready();
        r.wait().await.unwrap();
        assert_eq!(r.phase(), ReadyPhase::ReadySignaled);
    }

    #[tokio::test]
    async fn pending_ready_applies_override_before_resolving() {
        let r = Arc::new(Readiness::new());
        let waiter = {
            let r = Arc::clone(&r);
            tokio::spawn(async move {
                r.ready(ReadyOptions {
                    version: Some("2.7".parse().unwrap()),
                })
                .await
            })
        };
        tokio::task::yield_now().await;
        assert_eq!(r.phase(), ReadyPhase::NotReady);

        r.signal_host_ready();
        waiter.await.unwrap().unwrap();

        assert_eq!(r.phase(), ReadyPhase::Initialized);
        assert_eq!(r.version_override(), Some("2.7".parse().unwrap()));
    }

    #[test]
    fn second_signal_is_ignored() {
        let r = Readiness::new();
        r.signal_host_ready();
        r.apply(ReadyEvent::Initialize);
        r.signal_host_ready();
        assert_eq!(r.phase(), ReadyPhase::Initialized);
    }
}
