// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The unique-source record produced by enumeration.

use std::fmt;

use stagehand_port::{ItemId, ItemRecord, PropertyBag, SourceId};

/// Coarse type tag reported by the host.
///
/// Authoritative, but not enough on its own to pick a concrete source type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// Unknown or unreported.
    Undefined,
    /// File-backed media (video, audio, image, playlist).
    File,
    /// Capture device (camera, microphone).
    Live,
    /// Text item.
    Text,
    /// Still bitmap.
    Bitmap,
    /// Screen region capture.
    Screen,
    /// Flash movie.
    FlashFile,
    /// Game capture.
    GameSource,
    /// Web page / HTML plugin.
    Html,
}

impl ItemType {
    /// Parse the host's numeric tag (`prop:type`, or the `type` attribute).
    pub fn from_host(raw: &str) -> Self {
        match raw.trim() {
            "1" => Self::File,
            "2" => Self::Live,
            "3" => Self::Text,
            "4" => Self::Bitmap,
            "5" => Self::Screen,
            "6" => Self::FlashFile,
            "7" => Self::GameSource,
            "8" => Self::Html,
            _ => Self::Undefined,
        }
    }

    /// The host's numeric tag, `-1` for [`ItemType::Undefined`].
    pub fn host_code(self) -> i32 {
        match self {
            Self::Undefined => -1,
            Self::File => 1,
            Self::Live => 2,
            Self::Text => 3,
            Self::Bitmap => 4,
            Self::Screen => 5,
            Self::FlashFile => 6,
            Self::GameSource => 7,
            Self::Html => 8,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undefined => "UNDEFINED",
            Self::File => "FILE",
            Self::Live => "LIVE",
            Self::Text => "TEXT",
            Self::Bitmap => "BITMAP",
            Self::Screen => "SCREEN",
            Self::FlashFile => "FLASHFILE",
            Self::GameSource => "GAMESOURCE",
            Self::Html => "HTML",
        })
    }
}

/// Canonical record for one underlying source.
///
/// Built transiently during an enumeration call and never cached: each call
/// yields fresh records, so a returned value is never mutated by a later
/// enumeration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceIdentity {
    /// Item id of the representative instance.
    pub id: ItemId,
    /// Source id shared by all linked instances.
    pub source_id: SourceId,
    /// Coarse host type tag.
    pub item_type: ItemType,
    /// Display name (may be empty).
    pub name: String,
    /// Type-specific identity string: device id, path, URL or inline XML.
    pub raw_value: String,
    /// 0-based scene index.
    pub scene_index: u32,
    /// Whether the source stays resident across scene switches.
    pub keep_loaded: bool,
    /// The original description, verbatim.
    pub properties: PropertyBag,
}

impl SourceIdentity {
    /// Attribute holding the coarse type tag.
    pub const TYPE: &'static str = "type";
    /// Attribute holding the display name.
    pub const NAME: &'static str = "name";
    /// Attribute holding the raw identity value.
    pub const VALUE: &'static str = "item";
    /// Attribute holding the keep-loaded flag.
    pub const KEEP_LOADED: &'static str = "keeploaded";
    /// Attribute naming a video playlist's file list.
    pub const FILE_PLAYLIST: &'static str = "FilePlaylist";

    /// Build an identity from a scene-tree record.
    ///
    /// Records without `srcid` predate linked sources; their item id doubles
    /// as the source id.
    pub fn from_record(record: &ItemRecord) -> Self {
        Self::from_properties(record.properties.clone(), record.scene_index)
    }

    /// Build an identity from a bare property bag.
    pub fn from_properties(properties: PropertyBag, scene_index: u32) -> Self {
        let text = |key: &str| properties.get(key).unwrap_or_default().to_string();
        let id = ItemId::new(text(ItemRecord::ID));
        let source_id = properties
            .get(ItemRecord::SOURCE_ID)
            .filter(|s| !s.is_empty())
            .map_or_else(|| SourceId::new(id.as_str()), SourceId::new);

        Self {
            item_type: ItemType::from_host(properties.get(Self::TYPE).unwrap_or_default()),
            name: text(Self::NAME),
            raw_value: text(Self::VALUE),
            keep_loaded: properties.get(Self::KEEP_LOADED) == Some("1"),
            id,
            source_id,
            scene_index,
            properties,
        }
    }

    /// 1-based scene id, as exposed to callers.
    pub fn scene_id(&self) -> u32 {
        self.scene_index + 1
    }

    /// Raw property lookup.
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name)
    }
}
