// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The `Host` handle: every port the SDK talks through, plus readiness and
//! settings.
//!
//! All host I/O in the crate goes through the `pub(crate)` wrappers here so
//! the cooperative timeout and call tracing are applied uniformly.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use stagehand_port::{
    HostCommands, HostContext, HostResult, HostVersion, ItemId, ItemRecord, ItemSlot,
    PropertyChannel, SceneDirectory, SceneRef, VersionOracle,
};
use tracing::trace;

use crate::config::SdkSettings;
use crate::error::{SdkError, SdkResult};
use crate::gate::{VersionGate, VersionThresholds};
use crate::ready::Readiness;

/// The set of collaborator ports a [`Host`] is built from.
#[derive(Clone)]
pub struct HostPorts {
    /// Scoped property access.
    pub channel: Arc<dyn PropertyChannel>,
    /// Host-level commands.
    pub commands: Arc<dyn HostCommands>,
    /// Scene tree search.
    pub scenes: Arc<dyn SceneDirectory>,
    /// Execution context.
    pub context: Arc<dyn HostContext>,
    /// Running host version.
    pub versions: Arc<dyn VersionOracle>,
}

impl HostPorts {
    /// Use one adapter for every port.
    pub fn uniform<T>(adapter: Arc<T>) -> Self
    where
        T: PropertyChannel + HostCommands + SceneDirectory + HostContext + VersionOracle + 'static,
    {
        Self {
            channel: adapter.clone(),
            commands: adapter.clone(),
            scenes: adapter.clone(),
            context: adapter.clone(),
            versions: adapter,
        }
    }
}

struct HostInner {
    ports: HostPorts,
    readiness: Readiness,
    thresholds: VersionThresholds,
    timeout: Option<Duration>,
}

/// Cheaply clonable handle to a running host.
///
/// Holds only the ports and immutable settings; operations never share
/// mutable state beyond the process-scoped [`Readiness`].
#[derive(Clone)]
pub struct Host {
    inner: Arc<HostInner>,
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("readiness", &self.inner.readiness.phase())
            .field("thresholds", &self.inner.thresholds)
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl Host {
    /// Build a host handle. Fails if the configured thresholds do not parse.
    pub fn new(ports: HostPorts, settings: &SdkSettings) -> SdkResult<Self> {
        let thresholds = settings.thresholds()?;
        Ok(Self {
            inner: Arc::new(HostInner {
                ports,
                readiness: Readiness::new(),
                thresholds,
                timeout: settings.host_call_timeout(),
            }),
        })
    }

    /// Process-scoped readiness state.
    pub fn readiness(&self) -> &Readiness {
        &self.inner.readiness
    }

    /// Execution-context port.
    pub fn context(&self) -> &dyn HostContext {
        self.inner.ports.context.as_ref()
    }

    /// Effective host version: the `ready()` override if set, else the oracle.
    pub fn version(&self) -> HostVersion {
        self.inner
            .readiness
            .version_override()
            .unwrap_or_else(|| self.inner.ports.versions.current())
    }

    /// Evaluate the version gate for the effective host version.
    pub fn gate(&self) -> VersionGate {
        VersionGate::evaluate(
            self.inner.ports.versions.as_ref(),
            &self.version(),
            &self.inner.thresholds,
        )
    }

    async fn guarded<T, F>(&self, operation: &'static str, call: F) -> SdkResult<T>
    where
        F: Future<Output = HostResult<T>>,
    {
        trace!(operation, "host call");
        match self.inner.timeout {
            Some(after) => tokio::time::timeout(after, call)
                .await
                .map_err(|_| SdkError::Timeout { operation, after })?
                .map_err(SdkError::from),
            None => call.await.map_err(SdkError::from),
        }
    }

    pub(crate) async fn get_property(&self, key: &str, slot: Option<&ItemSlot>) -> SdkResult<String> {
        self.guarded("get", self.inner.ports.channel.get(key, slot))
            .await
    }

    pub(crate) async fn set_property(
        &self,
        key: &str,
        value: &str,
        slot: Option<&ItemSlot>,
    ) -> SdkResult<()> {
        self.guarded("set", self.inner.ports.channel.set(key, value, slot))
            .await
    }

    pub(crate) async fn attach(&self, id: &ItemId) -> SdkResult<ItemSlot> {
        self.guarded("attach", self.inner.ports.channel.attach(id))
            .await
    }

    pub(crate) async fn call_func(&self, func: &str, arg: &str) -> SdkResult<String> {
        self.guarded("call_func", self.inner.ports.commands.call_func(func, arg))
            .await
    }

    pub(crate) async fn search_item(&self, id: &ItemId) -> SdkResult<ItemRecord> {
        self.guarded("search_item", self.inner.ports.scenes.search_item_by_id(id))
            .await
    }

    pub(crate) async fn scene_number(&self, scene: &SceneRef) -> SdkResult<u32> {
        self.guarded("scene_number", self.inner.ports.scenes.scene_number(scene))
            .await
    }
}
