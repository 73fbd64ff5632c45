// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Async host ports: property access, host commands and the scene tree.

use async_trait::async_trait;

use crate::{HostResult, ItemId, ItemRecord, ItemSlot, SceneRef};

/// Scoped key/value property access against the host.
///
/// # Design
///
/// This trait is a hexagonal port. The SDK core issues `get`/`set` by key;
/// adapters (the embedding bridge, a recorded session, a test fake) decide how
/// the call reaches the host. Calls without a slot address the local context:
/// the plugin's own item, or the application for app-level keys.
#[async_trait]
pub trait PropertyChannel: Send + Sync {
    /// Read a property as a raw string.
    async fn get(&self, key: &str, slot: Option<&ItemSlot>) -> HostResult<String>;

    /// Write a property from a raw string.
    async fn set(&self, key: &str, value: &str, slot: Option<&ItemSlot>) -> HostResult<()>;

    /// Derive the slot that scopes subsequent calls to `id`.
    async fn attach(&self, id: &ItemId) -> HostResult<ItemSlot>;
}

/// Host-level commands that are not property accesses (e.g. `additem`).
#[async_trait]
pub trait HostCommands: Send + Sync {
    /// Invoke a named host function with a single string argument.
    async fn call_func(&self, func: &str, arg: &str) -> HostResult<String>;
}

/// Read side of the host's scene tree.
#[async_trait]
pub trait SceneDirectory: Send + Sync {
    /// Find an item anywhere in the active scene tree.
    ///
    /// Fails with [`crate::HostError::NotFound`] for stale or removed ids.
    async fn search_item_by_id(&self, id: &ItemId) -> HostResult<ItemRecord>;

    /// Resolve a scene reference to the host's 1-based scene number.
    async fn scene_number(&self, scene: &SceneRef) -> HostResult<u32>;
}
