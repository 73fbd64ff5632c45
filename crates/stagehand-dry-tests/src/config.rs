// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory config store.

use stagehand_core::config::{ConfigError, ConfigStore};
use stagehand_core::SdkSettings;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// [`ConfigStore`] backed by a shared map. Clones share state.
///
/// ```
/// use stagehand_core::{ConfigService, SdkSettings};
/// use stagehand_dry_tests::InMemoryConfigStore;
///
/// let store = InMemoryConfigStore::new();
/// let service = ConfigService::new(store.clone());
/// service.save_settings(&SdkSettings::default()).unwrap();
/// assert!(store.contains_key(SdkSettings::KEY));
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    state: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    blobs: BTreeMap<String, Vec<u8>>,
    loads: usize,
    saves: usize,
    fail_loads: bool,
    fail_saves: bool,
}

impl InMemoryConfigStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `raw` under [`SdkSettings::KEY`].
    pub fn with_settings_json(raw: &str) -> Self {
        let store = Self::new();
        store
            .state()
            .blobs
            .insert(SdkSettings::KEY.to_string(), raw.as_bytes().to_vec());
        store
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make every subsequent load fail with [`ConfigError::Store`].
    pub fn set_fail_on_load(&self, fail: bool) {
        self.state().fail_loads = fail;
    }

    /// Make every subsequent save fail with [`ConfigError::Store`].
    pub fn set_fail_on_save(&self, fail: bool) {
        self.state().fail_saves = fail;
    }

    /// Attempted loads, including failed ones.
    pub fn load_count(&self) -> usize {
        self.state().loads
    }

    /// Attempted saves, including failed ones.
    pub fn save_count(&self) -> usize {
        self.state().saves
    }

    /// Whether `key` holds a blob.
    pub fn contains_key(&self, key: &str) -> bool {
        self.state().blobs.contains_key(key)
    }

    /// Stored blob for `key` as UTF-8, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.state()
            .blobs
            .get(key)
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut state = self.state();
        state.loads += 1;
        if state.fail_loads {
            return Err(ConfigError::Store("simulated load failure".into()));
        }
        state.blobs.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut state = self.state();
        state.saves += 1;
        if state.fail_saves {
            return Err(ConfigError::Store("simulated save failure".into()));
        }
        state.blobs.insert(key.to_string(), data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use stagehand_core::ConfigService;

    #[test]
    fn missing_settings_fall_back_to_defaults() {
        let service = ConfigService::new(InMemoryConfigStore::new());
        assert_eq!(service.load_settings().unwrap(), SdkSettings::default());
    }

    #[test]
    fn partial_settings_keep_other_defaults() {
        let store = InMemoryConfigStore::with_settings_json(r#"{"host_call_timeout_ms":250}"#);
        let settings = ConfigService::new(store).load_settings().unwrap();
        assert_eq!(settings.host_call_timeout_ms, Some(250));
        assert_eq!(
            settings.item_list_min_version,
            SdkSettings::DEFAULT_ITEM_LIST_MIN_VERSION
        );
    }

    #[test]
    fn malformed_settings_are_reported_not_defaulted() {
        let store = InMemoryConfigStore::with_settings_json("{ not json");
        assert!(matches!(
            ConfigService::new(store).load_settings(),
            Err(ConfigError::Malformed(_))
        ));
    }

    #[test]
    fn empty_blob_reads_as_defaults() {
        let store = InMemoryConfigStore::with_settings_json("");
        let settings = ConfigService::new(store).load_settings().unwrap();
        assert_eq!(settings, SdkSettings::default());
    }

    #[test]
    fn failures_are_counted_and_nothing_is_stored() {
        let store = InMemoryConfigStore::new();
        store.set_fail_on_save(true);
        assert!(matches!(
            store.save_raw("k", b"v"),
            Err(ConfigError::Store(_))
        ));
        assert_eq!(store.save_count(), 1);
        assert!(!store.contains_key("k"));

        store.set_fail_on_load(true);
        assert!(store.load_raw("k").is_err());
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn clones_share_state() {
        let a = InMemoryConfigStore::new();
        let b = a.clone();
        a.save_raw("shared", b"1").unwrap();
        assert_eq!(b.raw("shared").as_deref(), Some("1"));
    }
}
