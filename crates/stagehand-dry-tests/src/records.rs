// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Item record construction.

use stagehand_port::{ItemRecord, PropertyBag};

/// Builds an [`ItemRecord`] attribute by attribute, in insertion order.
///
/// ```
/// use stagehand_dry_tests::ItemRecordBuilder;
///
/// let record = ItemRecordBuilder::new("{A}").source("{S}").live("Webcam", "@DEVICE:PNP:cam").build();
/// assert_eq!(record.properties.get("srcid"), Some("{S}"));
/// ```
#[derive(Clone, Debug)]
pub struct ItemRecordBuilder {
    scene_index: u32,
    properties: PropertyBag,
}

impl ItemRecordBuilder {
    /// Record for item `id`; its source id defaults to the item id.
    pub fn new(id: &str) -> Self {
        let mut properties = PropertyBag::new();
        properties.insert(ItemRecord::ID, id);
        Self {
            scene_index: 0,
            properties,
        }
    }

    /// Shared source id.
    pub fn source(mut self, source_id: &str) -> Self {
        self.properties.insert(ItemRecord::SOURCE_ID, source_id);
        self
    }

    /// 0-based scene index.
    pub fn scene(mut self, index: u32) -> Self {
        self.scene_index = index;
        self
    }

    /// Host type code, display name and raw value in one go.
    pub fn kind(mut self, type_code: &str, name: &str, value: &str) -> Self {
        self.properties.insert("type", type_code);
        self.properties.insert("name", name);
        self.properties.insert("item", value);
        self
    }

    /// A `FILE` item.
    pub fn file(self, name: &str, path: &str) -> Self {
        self.kind("1", name, path)
    }

    /// A `LIVE` item.
    pub fn live(self, name: &str, device: &str) -> Self {
        self.kind("2", name, device)
    }

    /// An `HTML` item.
    pub fn html(self, name: &str, url: &str) -> Self {
        self.kind("8", name, url)
    }

    /// Any other attribute.
    pub fn property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Finish.
    pub fn build(self) -> ItemRecord {
        ItemRecord {
            scene_index: self.scene_index,
            properties: self.properties,
        }
    }
}
