// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Identifier newtypes shared by every port.
//!
//! The host hands out ids as opaque strings. Wrapping them keeps an item id
//! from being passed where a source id or slot is expected.

use std::fmt;

/// Host-assigned identifier of one placed item instance.
///
/// Unique per item, NOT per source: linked items carry different item ids
/// but share one [`SourceId`].
#[repr(transparent)]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap a raw host id.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw host id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Host-assigned identifier of the underlying source an item points to.
#[repr(transparent)]
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceId(String);

impl SourceId {
    /// Wrap a raw host source id.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw host source id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque scoping token addressing property calls to one item.
///
/// Only [`crate::PropertyChannel::attach`] produces meaningful slots.
#[repr(transparent)]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemSlot(String);

impl ItemSlot {
    /// Wrap a raw slot token returned by the host.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the raw slot token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a scene, as accepted by scene-targeting operations.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SceneRef {
    /// 1-based scene number as shown in the host UI.
    Number(u32),
    /// Host scene id string.
    Id(String),
}

impl SceneRef {
    /// Whether this reference can possibly name a scene.
    ///
    /// Scene numbers start at 1 and scene ids are never empty.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Number(n) => *n >= 1,
            Self::Id(id) => !id.trim().is_empty(),
        }
    }
}

impl fmt::Display for SceneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "scene #{n}"),
            Self::Id(id) => write!(f, "scene {id}"),
        }
    }
}
