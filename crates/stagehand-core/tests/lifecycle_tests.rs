// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! duplicate() and unlink() command sequencing.
#![allow(clippy::unwrap_used, clippy::panic)]

mod common;

use stagehand_codec::encode_item_xml;
use stagehand_core::{DuplicateOptions, SdkError};
use stagehand_dry_tests::{FakeHost, HostCall};
use stagehand_port::SceneRef;

fn set_keep_loaded(id: &str) -> HostCall {
    HostCall::Set {
        key: "prop:keeploaded".into(),
        value: "1".into(),
        slot: Some(format!("slot:{id}")),
    }
}

fn additem(func: &str, arg: &str) -> HostCall {
    HostCall::CallFunc {
        func: func.into(),
        arg: arg.into(),
    }
}

#[tokio::test]
async fn linked_duplicate_sets_keep_loaded_before_additem() {
    let fake = FakeHost::new();
    let host = fake.ready_host().unwrap();
    let item = common::camera_item(&fake, &host, "{CAM}", 0).await;
    let xml = encode_item_xml(&item.identity().properties).unwrap();
    fake.clear_calls();

    item.duplicate(
        DuplicateOptions::default()
            .linked(true)
            .in_scene(SceneRef::Number(3)),
    )
    .await
    .unwrap();

    assert_eq!(
        fake.calls(),
        vec![
            set_keep_loaded("{CAM}"),
            HostCall::SceneNumber("3".into()),
            additem("link:1|s:3|additem", &xml),
        ]
    );
}

#[tokio::test]
async fn scene_ids_resolve_through_the_scene_directory() {
    let fake = FakeHost::new();
    fake.add_scene("{SCENE-B}", 4);
    let host = fake.ready_host().unwrap();
    let item = common::camera_item(&fake, &host, "{CAM}", 0).await;
    fake.clear_calls();

    item.duplicate(DuplicateOptions::default().in_scene(SceneRef::Id("{SCENE-B}".into())))
        .await
        .unwrap();

    let calls = fake.calls();
    assert!(!calls.contains(&set_keep_loaded("{CAM}")));
    assert!(matches!(
        calls.last(),
        Some(HostCall::CallFunc { func, .. }) if func == "link:0|s:4|additem"
    ));
}

#[tokio::test]
async fn linked_without_scene_targets_own_scene() {
    let fake = FakeHost::new();
    let host = fake.ready_host().unwrap();
    let item = common::camera_item(&fake, &host, "{CAM}", 2).await;
    fake.clear_calls();

    item.duplicate(DuplicateOptions::default().linked(true))
        .await
        .unwrap();

    let calls = fake.calls();
    assert_eq!(calls[0], set_keep_loaded("{CAM}"));
    assert!(matches!(
        &calls[1],
        HostCall::CallFunc { func, .. } if func == "link:1|s:3|additem"
    ));
    assert_eq!(calls.len(), 2);
}

#[tokio::test]
async fn unlinked_without_scene_skips_keep_loaded() {
    let fake = FakeHost::new();
    let host = fake.ready_host().unwrap();
    let item = common::camera_item(&fake, &host, "{CAM}", 0).await;
    fake.clear_calls();

    item.duplicate(DuplicateOptions::default().linked(false))
        .await
        .unwrap();

    let calls = fake.calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(
        &calls[0],
        HostCall::CallFunc { func, .. } if func == "link:0|s:1|additem"
    ));
}

#[tokio::test]
async fn no_options_adds_to_the_current_scene() {
    let fake = FakeHost::new();
    let host = fake.ready_host().unwrap();
    let item = common::camera_item(&fake, &host, "{CAM}", 0).await;
    let xml = encode_item_xml(&item.identity().properties).unwrap();
    fake.clear_calls();

    let same = item.duplicate(DuplicateOptions::default()).await.unwrap();

    assert!(std::ptr::eq(same, &item));
    assert_eq!(fake.calls(), vec![additem("link:0|additem", &xml)]);
}

#[tokio::test]
async fn invalid_scene_is_rejected_without_host_calls() {
    let fake = FakeHost::new();
    let host = fake.ready_host().unwrap();
    let item = common::camera_item(&fake, &host, "{CAM}", 0).await;

    for scene in [SceneRef::Number(0), SceneRef::Id("   ".into())] {
        fake.clear_calls();
        let err = item
            .duplicate(DuplicateOptions::default().linked(true).in_scene(scene))
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidParameters(_)), "{err}");
        assert!(fake.calls().is_empty());
    }
}

#[tokio::test]
async fn pre_linking_hosts_use_plain_additem() {
    let fake = FakeHost::new().with_version(common::pre_linking_version());
    let host = fake.ready_host().unwrap();
    let item = common::camera_item(&fake, &host, "{CAM}", 0).await;
    let xml = encode_item_xml(&item.identity().properties).unwrap();
    fake.clear_calls();

    item.duplicate(
        DuplicateOptions::default()
            .linked(true)
            .in_scene(SceneRef::Number(2)),
    )
    .await
    .unwrap();

    assert_eq!(fake.calls(), vec![additem("additem", &xml)]);
}

#[tokio::test]
async fn duplicate_xml_preserves_record_attributes() {
    let fake = FakeHost::new();
    let host = fake.ready_host().unwrap();
    let item = common::camera_item(&fake, &host, "{CAM}", 0).await;
    fake.clear_calls();

    item.duplicate(DuplicateOptions::default()).await.unwrap();

    let calls = fake.calls();
    let HostCall::CallFunc { arg, .. } = &calls[0] else {
        panic!("expected a host command");
    };
    assert!(arg.starts_with(r#"<item id="{CAM}" srcid="{S-CAM}" type="2" name="Webcam" item="#));
    assert!(arg.ends_with("/>"));
}

#[tokio::test]
async fn unlink_clears_global_source_and_returns_same_item() {
    let fake = FakeHost::new();
    let host = fake.ready_host().unwrap();
    let item = common::camera_item(&fake, &host, "{CAM}", 0).await;
    fake.set_on_item("{CAM}", "prop:globalsrc", "1");
    assert!(item.is_linked().await.unwrap());

    let same = item.unlink().await.unwrap();

    assert!(std::ptr::eq(same, &item));
    assert_eq!(
        fake.item_property("{CAM}", "prop:globalsrc").as_deref(),
        Some("0")
    );
    assert!(!item.is_linked().await.unwrap());
}
