// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scripted host implementing every port.
//!
//! Properties are keyed by `(slot, key)`; unset properties read as the empty
//! string, like the real host. Every port call is appended to an ordered log
//! so tests can assert on sequencing, not just on end state.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use stagehand_core::{Host, HostPorts, SdkResult, SdkSettings};
use stagehand_port::{
    ExecutionContext, HostCommands, HostContext, HostError, HostResult, HostVersion, ItemId,
    ItemRecord, ItemSlot, PropertyChannel, SceneDirectory, SceneRef, VersionOracle,
};

/// One recorded port call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    /// `PropertyChannel::get`.
    Get {
        /// Property key.
        key: String,
        /// Slot, if scoped.
        slot: Option<String>,
    },
    /// `PropertyChannel::set`.
    Set {
        /// Property key.
        key: String,
        /// Written value.
        value: String,
        /// Slot, if scoped.
        slot: Option<String>,
    },
    /// `PropertyChannel::attach`.
    Attach(String),
    /// `HostCommands::call_func`.
    CallFunc {
        /// Function name.
        func: String,
        /// Argument.
        arg: String,
    },
    /// `SceneDirectory::search_item_by_id`.
    Search(String),
    /// `SceneDirectory::scene_number`, with the raw number or id.
    SceneNumber(String),
}

impl HostCall {
    /// Property key for gets and sets.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Get { key, .. } | Self::Set { key, .. } => Some(key),
            _ => None,
        }
    }
}

/// Slot the fake hands out when attaching to `id`.
pub fn slot_for(id: &str) -> ItemSlot {
    ItemSlot::new(format!("slot:{id}"))
}

/// In-process host. Clones share state.
#[derive(Clone)]
pub struct FakeHost {
    state: Arc<Mutex<State>>,
}

struct State {
    context: ExecutionContext,
    base_item: Option<ItemId>,
    preview_editor_open: bool,
    version: HostVersion,
    properties: HashMap<(Option<String>, String), String>,
    records: HashMap<String, ItemRecord>,
    broken: HashSet<String>,
    scenes: HashMap<String, u32>,
    stalled: HashSet<String>,
    stalled_attach: HashSet<String>,
    calls: Vec<HostCall>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHost {
    /// A current-generation host running a source plugin.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                context: ExecutionContext::SourcePlugin,
                base_item: None,
                preview_editor_open: false,
                version: HostVersion::from_parts([3, 0]),
                properties: HashMap::new(),
                records: HashMap::new(),
                broken: HashSet::new(),
                scenes: HashMap::new(),
                stalled: HashSet::new(),
                stalled_attach: HashSet::new(),
                calls: Vec::new(),
            })),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn record(&self, call: HostCall) {
        self.state().calls.push(call);
    }

    /// Report `version` from the oracle.
    pub fn with_version(self, version: HostVersion) -> Self {
        self.state().version = version;
        self
    }

    /// Run in `context`.
    pub fn with_context(self, context: ExecutionContext) -> Self {
        self.state().context = context;
        self
    }

    /// Base item reported by the context port.
    pub fn with_base_item(self, id: &str) -> Self {
        self.state().base_item = Some(ItemId::new(id));
        self
    }

    /// Toggle the preview editor flag.
    pub fn set_preview_editor_open(&self, open: bool) {
        self.state().preview_editor_open = open;
    }

    /// Make `id` searchable.
    pub fn add_item(&self, record: ItemRecord) {
        let id = record.properties.get(ItemRecord::ID).unwrap_or_default().to_string();
        self.state().records.insert(id, record);
    }

    /// Make searches for `id` fail with a transport error.
    pub fn break_item(&self, id: &str) {
        self.state().broken.insert(id.to_string());
    }

    /// Script a property on the local context.
    pub fn set_local(&self, key: &str, value: &str) {
        self.state()
            .properties
            .insert((None, key.to_string()), value.to_string());
    }

    /// Script a property on item `id`.
    pub fn set_on_item(&self, id: &str, key: &str, value: &str) {
        self.state().properties.insert(
            (Some(slot_for(id).as_str().to_string()), key.to_string()),
            value.to_string(),
        );
    }

    /// Current value of a property on item `id`.
    pub fn item_property(&self, id: &str, key: &str) -> Option<String> {
        self.state()
            .properties
            .get(&(Some(slot_for(id).as_str().to_string()), key.to_string()))
            .cloned()
    }

    /// Script the `itemlist` seen from `context` (or the local context).
    pub fn set_item_list(&self, context: Option<&str>, ids: &[&str]) {
        let list = ids.join(",");
        match context {
            Some(id) => self.set_on_item(id, "itemlist", &list),
            None => self.set_local("itemlist", &list),
        }
    }

    /// Map a scene id string to a scene number.
    pub fn add_scene(&self, id: &str, number: u32) {
        self.state().scenes.insert(id.to_string(), number);
    }

    /// Make reads of `key` never complete.
    pub fn stall(&self, key: &str) {
        self.state().stalled.insert(key.to_string());
    }

    /// Make attaching item `id` never complete.
    pub fn stall_attach(&self, id: &str) {
        self.state().stalled_attach.insert(id.to_string());
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<HostCall> {
        self.state().calls.clone()
    }

    /// Forget recorded calls.
    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    /// Whether any get or set touched `key`.
    pub fn touched(&self, key: &str) -> bool {
        self.state().calls.iter().any(|c| c.key() == Some(key))
    }

    /// Host handle wired to this fake with default settings.
    pub fn host(&self) -> SdkResult<Host> {
        self.host_with(&SdkSettings::default())
    }

    /// Host handle wired to this fake.
    pub fn host_with(&self, settings: &SdkSettings) -> SdkResult<Host> {
        Host::new(HostPorts::uniform(Arc::new(self.clone())), settings)
    }

    /// Host handle that has already seen the ready signal.
    pub fn ready_host(&self) -> SdkResult<Host> {
        let host = self.host()?;
        host.readiness().signal_host_ready();
        Ok(host)
    }
}

#[async_trait]
impl PropertyChannel for FakeHost {
    async fn get(&self, key: &str, slot: Option<&ItemSlot>) -> HostResult<String> {
        let slot = slot.map(|s| s.as_str().to_string());
        self.record(HostCall::Get {
            key: key.to_string(),
            slot: slot.clone(),
        });
        let stalled = self.state().stalled.contains(key);
        if stalled {
            std::future::pending::<()>().await;
        }
        Ok(self
            .state()
            .properties
            .get(&(slot, key.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn set(&self, key: &str, value: &str, slot: Option<&ItemSlot>) -> HostResult<()> {
        let slot = slot.map(|s| s.as_str().to_string());
        self.record(HostCall::Set {
            key: key.to_string(),
            value: value.to_string(),
            slot: slot.clone(),
        });
        self.state()
            .properties
            .insert((slot, key.to_string()), value.to_string());
        Ok(())
    }

    async fn attach(&self, id: &ItemId) -> HostResult<ItemSlot> {
        self.record(HostCall::Attach(id.to_string()));
        let stalled = self.state().stalled_attach.contains(id.as_str());
        if stalled {
            std::future::pending::<()>().await;
        }
        Ok(slot_for(id.as_str()))
    }
}

#[async_trait]
impl HostCommands for FakeHost {
    async fn call_func(&self, func: &str, arg: &str) -> HostResult<String> {
        self.record(HostCall::CallFunc {
            func: func.to_string(),
            arg: arg.to_string(),
        });
        Ok(String::new())
    }
}

#[async_trait]
impl SceneDirectory for FakeHost {
    async fn search_item_by_id(&self, id: &ItemId) -> HostResult<ItemRecord> {
        self.record(HostCall::Search(id.to_string()));
        let state = self.state();
        if state.broken.contains(id.as_str()) {
            return Err(HostError::Transport(format!("search {id} failed")));
        }
        state
            .records
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| HostError::NotFound(id.to_string()))
    }

    async fn scene_number(&self, scene: &SceneRef) -> HostResult<u32> {
        let raw = match scene {
            SceneRef::Number(n) => n.to_string(),
            SceneRef::Id(id) => id.clone(),
        };
        self.record(HostCall::SceneNumber(raw));
        match scene {
            SceneRef::Number(n) => Ok(*n),
            SceneRef::Id(id) => self
                .state()
                .scenes
                .get(id)
                .copied()
                .ok_or_else(|| HostError::NotFound(id.clone())),
        }
    }
}

impl HostContext for FakeHost {
    fn execution_context(&self) -> ExecutionContext {
        self.state().context
    }

    fn base_item_id(&self) -> Option<ItemId> {
        self.state().base_item.clone()
    }

    fn preview_editor_open(&self) -> bool {
        self.state().preview_editor_open
    }
}

impl VersionOracle for FakeHost {
    fn current(&self) -> HostVersion {
        self.state().version.clone()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::ItemRecordBuilder;

    #[tokio::test]
    async fn unset_properties_read_empty_and_writes_stick() {
        let fake = FakeHost::new();
        let slot = slot_for("{A}");
        assert_eq!(fake.get("prop:name", Some(&slot)).await.unwrap(), "");
        fake.set("prop:name", "Cam", Some(&slot)).await.unwrap();
        assert_eq!(fake.item_property("{A}", "prop:name").as_deref(), Some("Cam"));
        assert_eq!(fake.calls().len(), 2);
    }

    #[tokio::test]
    async fn search_distinguishes_missing_and_broken() {
        let fake = FakeHost::new();
        fake.add_item(ItemRecordBuilder::new("{A}").build());
        fake.break_item("{B}");
        assert!(fake.search_item_by_id(&ItemId::new("{A}")).await.is_ok());
        assert!(matches!(
            fake.search_item_by_id(&ItemId::new("{B}")).await,
            Err(HostError::Transport(_))
        ));
        assert!(matches!(
            fake.search_item_by_id(&ItemId::new("{C}")).await,
            Err(HostError::NotFound(_))
        ));
    }
}
