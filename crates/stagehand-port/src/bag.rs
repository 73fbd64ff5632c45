// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Ordered property bags and the item records built from them.

use crate::ItemId;

/// Ordered `name -> value` mapping taken verbatim from an item description.
///
/// Insertion order is preserved because the host's `additem` commands expect
/// attributes back in the order they were read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyBag {
    entries: Vec<(String, String)>,
}

impl PropertyBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property by exact name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Insert or replace a property. Replacing keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Whether a property with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (k, v) in iter {
            bag.insert(k, v);
        }
        bag
    }
}

/// One item as found in the host's scene tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRecord {
    /// 0-based index of the scene the item was found in.
    pub scene_index: u32,
    /// The item's full description, attribute by attribute.
    pub properties: PropertyBag,
}

impl ItemRecord {
    /// Attribute holding the item id.
    pub const ID: &'static str = "id";
    /// Attribute holding the source id shared by linked items.
    pub const SOURCE_ID: &'static str = "srcid";

    /// The item id, if the description carries one.
    pub fn item_id(&self) -> Option<ItemId> {
        self.properties.get(Self::ID).map(ItemId::new)
    }
}
