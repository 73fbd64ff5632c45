// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use stagehand_core::{Host, Item, SourceIdentity};
use stagehand_dry_tests::{FakeHost, ItemRecordBuilder};
use stagehand_port::HostVersion;

pub const CAMERA: &str =
    "@DEVICE:PNP:\\\\?\\USB#VID_046D&PID_0825#{65E8773D-8F56-11D0-A3B9-00A0C9223196}";
pub const MICROPHONE: &str =
    "@DEVICE:CM:{33D9A762-90C8-11D0-BD43-00A0C911CE86}\\Microphone (USB Audio)";

/// Below the item-list threshold.
pub fn legacy_version() -> HostVersion {
    HostVersion::from_parts([2, 7, 1602, 1000])
}

/// Has `itemlist` but predates linked sources.
pub fn pre_linking_version() -> HostVersion {
    HostVersion::from_parts([2, 8, 1605, 2601])
}

/// Register a camera item on `fake` and attach to it through `host`.
pub async fn camera_item(fake: &FakeHost, host: &Host, id: &str, scene_index: u32) -> Item {
    let record = ItemRecordBuilder::new(id)
        .source("{S-CAM}")
        .live("Webcam", CAMERA)
        .scene(scene_index)
        .build();
    fake.add_item(record.clone());
    Item::attach(host, SourceIdentity::from_record(&record))
        .await
        .unwrap()
}
