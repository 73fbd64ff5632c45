// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! SDK settings and the storage port they are persisted through.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use stagehand_port::HostVersion;
use thiserror::Error;

use crate::gate::VersionThresholds;

/// Where [`SdkSettings`] are persisted.
///
/// Stores hold opaque blobs under short logical keys (see [`SdkSettings::KEY`]);
/// the JSON encoding is owned by [`ConfigService`].
pub trait ConfigStore {
    /// Blob stored under `key`, or [`ConfigError::NotFound`].
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError>;
    /// Replace the blob stored under `key`.
    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError>;
}

/// Failure to read or write persisted settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Nothing stored under the key yet.
    #[error("no settings stored")]
    NotFound,
    /// The backing file could not be read or written.
    #[error("settings io: {0}")]
    Io(#[from] std::io::Error),
    /// The stored blob is not a valid settings document.
    #[error("malformed settings: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The store itself refused the operation (bad key, no config dir).
    #[error("settings store: {0}")]
    Store(String),
}

/// Reads and writes [`SdkSettings`] as JSON through a [`ConfigStore`].
pub struct ConfigService<S> {
    store: S,
}

impl<S: ConfigStore> ConfigService<S> {
    /// Settings service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Stored settings, or defaults when none were saved.
    ///
    /// An empty blob counts as "nothing saved". Fields missing from the
    /// document keep their defaults.
    pub fn load_settings(&self) -> Result<SdkSettings, ConfigError> {
        match self.store.load_raw(SdkSettings::KEY) {
            Ok(bytes) if bytes.is_empty() => Ok(SdkSettings::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(ConfigError::NotFound) => Ok(SdkSettings::default()),
            Err(e) => Err(e),
        }
    }

    /// Persist `settings` as pretty JSON.
    pub fn save_settings(&self, settings: &SdkSettings) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(settings)?;
        self.store.save_raw(SdkSettings::KEY, &data)
    }
}

/// Tunables for a [`crate::Host`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkSettings {
    /// First host version that exposes the `itemlist` property.
    pub item_list_min_version: String,
    /// First host version that supports linked (global) sources and scene-targeted `additem`.
    pub global_source_min_version: String,
    /// Cooperative timeout applied to every host call. `None` waits forever.
    pub host_call_timeout_ms: Option<u64>,
}

impl SdkSettings {
    /// Store key the settings live under.
    pub const KEY: &'static str = "stagehand";
    /// Default for [`SdkSettings::item_list_min_version`].
    pub const DEFAULT_ITEM_LIST_MIN_VERSION: &'static str = "2.8.1605.2601";
    /// Default for [`SdkSettings::global_source_min_version`].
    pub const DEFAULT_GLOBAL_SOURCE_MIN_VERSION: &'static str = "2.9.1608.2302";

    /// Parse the configured thresholds.
    pub fn thresholds(&self) -> Result<VersionThresholds, stagehand_port::VersionParseError> {
        Ok(VersionThresholds {
            item_list: self.item_list_min_version.parse::<HostVersion>()?,
            global_source: self.global_source_min_version.parse::<HostVersion>()?,
        })
    }

    /// The host call timeout as a duration.
    pub fn host_call_timeout(&self) -> Option<Duration> {
        self.host_call_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for SdkSettings {
    fn default() -> Self {
        Self {
            item_list_min_version: Self::DEFAULT_ITEM_LIST_MIN_VERSION.to_string(),
            global_source_min_version: Self::DEFAULT_GLOBAL_SOURCE_MIN_VERSION.to_string(),
            host_call_timeout_ms: None,
        }
    }
}
