// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The base item every composed source wraps.
//!
//! An [`Item`] is its enumeration snapshot plus the slot used to address it.
//! Accessors always query the host live; only the snapshot fields
//! (`id`, `source_id`, `item_type`, `scene_id`) are served locally.

use stagehand_port::{ItemId, ItemSlot, SourceId};
use tracing::warn;

use crate::error::{SdkError, SdkResult};
use crate::host::Host;
use crate::identity::{ItemType, SourceIdentity};

pub(crate) mod keys {
    pub const NAME: &str = "prop:name";
    pub const CUSTOM_NAME: &str = "prop:cname";
    pub const VALUE: &str = "prop:item";
    pub const TYPE: &str = "prop:type";
    pub const VIEW_ID: &str = "prop:viewid";
    pub const KEEP_LOADED: &str = "prop:keeploaded";
    pub const GLOBAL_SOURCE: &str = "prop:globalsrc";
    pub const ITEM_LIST: &str = "itemlist";
}

/// Which output the calling code is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    /// The live program output.
    Main,
    /// The preview output (or the preview editor).
    Preview,
    /// A scene thumbnail.
    Thumbnail,
}

/// One item instance, addressed through its slot.
#[derive(Clone, Debug)]
pub struct Item {
    host: Host,
    identity: SourceIdentity,
    slot: ItemSlot,
}

pub(crate) fn parse_flag(key: &str, raw: &str) -> SdkResult<bool> {
    match raw.trim() {
        "1" | "true" => Ok(true),
        "0" | "false" | "" => Ok(false),
        _ => Err(SdkError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

pub(crate) const fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

impl Item {
    /// Attach to the item described by `identity`.
    pub async fn attach(host: &Host, identity: SourceIdentity) -> SdkResult<Self> {
        let slot = host.attach(&identity.id).await?;
        Ok(Self {
            host: host.clone(),
            identity,
            slot,
        })
    }

    /// Host handle this item talks through.
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Enumeration snapshot this item was built from.
    pub fn identity(&self) -> &SourceIdentity {
        &self.identity
    }

    /// Slot addressing this item.
    pub fn slot(&self) -> &ItemSlot {
        &self.slot
    }

    /// Item id.
    pub fn id(&self) -> &ItemId {
        &self.identity.id
    }

    /// Source id shared with linked instances.
    pub fn source_id(&self) -> &SourceId {
        &self.identity.source_id
    }

    /// Type tag from the snapshot.
    pub fn item_type(&self) -> ItemType {
        self.identity.item_type
    }

    /// 1-based scene the item was in when enumerated.
    pub fn scene_id(&self) -> u32 {
        self.identity.scene_id()
    }

    pub(crate) async fn get(&self, key: &str) -> SdkResult<String> {
        self.host.get_property(key, Some(&self.slot)).await
    }

    pub(crate) async fn set(&self, key: &str, value: &str) -> SdkResult<()> {
        self.host.set_property(key, value, Some(&self.slot)).await
    }

    pub(crate) async fn get_flag(&self, key: &str) -> SdkResult<bool> {
        let raw = self.get(key).await?;
        parse_flag(key, &raw)
    }

    pub(crate) async fn get_number(&self, key: &str) -> SdkResult<f64> {
        let raw = self.get(key).await?;
        raw.trim().parse().map_err(|_| SdkError::InvalidValue {
            key: key.to_string(),
            value: raw,
        })
    }

    /// Current type tag, read live.
    pub async fn current_type(&self) -> SdkResult<ItemType> {
        Ok(ItemType::from_host(&self.get(keys::TYPE).await?))
    }

    /// Display name.
    pub async fn name(&self) -> SdkResult<String> {
        self.get(keys::NAME).await
    }

    /// Rename the item.
    pub async fn set_name(&self, name: &str) -> SdkResult<&Self> {
        self.set(keys::NAME, name).await?;
        Ok(self)
    }

    /// Per-instance custom name (linked items may differ here).
    pub async fn custom_name(&self) -> SdkResult<String> {
        self.get(keys::CUSTOM_NAME).await
    }

    /// Set the per-instance custom name.
    pub async fn set_custom_name(&self, name: &str) -> SdkResult<&Self> {
        self.set(keys::CUSTOM_NAME, name).await?;
        Ok(self)
    }

    /// Raw identity value (device id, path, URL, inline XML).
    pub async fn value(&self) -> SdkResult<String> {
        self.get(keys::VALUE).await
    }

    /// Replace the raw identity value.
    pub async fn set_value(&self, value: &str) -> SdkResult<&Self> {
        self.set(keys::VALUE, value).await?;
        Ok(self)
    }

    /// Whether the source stays loaded across scene switches.
    pub async fn keep_loaded(&self) -> SdkResult<bool> {
        self.get_flag(keys::KEEP_LOADED).await
    }

    /// Set the keep-loaded flag.
    pub async fn set_keep_loaded(&self, keep: bool) -> SdkResult<&Self> {
        self.set(keys::KEEP_LOADED, flag(keep)).await?;
        Ok(self)
    }

    /// Whether this item is bound to a linked (global) source.
    pub async fn is_linked(&self) -> SdkResult<bool> {
        self.get_flag(keys::GLOBAL_SOURCE).await
    }

    /// Derive the view this item is rendered in.
    ///
    /// The main view is reported as preview while the preview editor is open.
    pub async fn view(&self) -> SdkResult<ViewKind> {
        let raw = self.get(keys::VIEW_ID).await?;
        match raw.trim() {
            "0" if self.host.context().preview_editor_open() => Ok(ViewKind::Preview),
            "0" => Ok(ViewKind::Main),
            "1" => Ok(ViewKind::Preview),
            "2" => Ok(ViewKind::Thumbnail),
            _ => {
                warn!(value = %raw, "unrecognized view id");
                Err(SdkError::InvalidValue {
                    key: keys::VIEW_ID.to_string(),
                    value: raw,
                })
            }
        }
    }

    /// Every item instance bound to this item's source, live, not deduplicated.
    pub async fn linked_items(&self) -> SdkResult<Vec<Self>> {
        let enumerator = crate::enumerate::ItemEnumerator::new(&self.host);
        let identities = enumerator.items(Some(self.id())).await?;
        let mut items = Vec::with_capacity(identities.len());
        for identity in identities {
            items.push(Self::attach(&self.host, identity).await?);
        }
        Ok(items)
    }
}
