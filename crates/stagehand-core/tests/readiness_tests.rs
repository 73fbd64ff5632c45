// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Readiness sequencing and version overrides.
#![allow(clippy::unwrap_used)]

mod common;

use stagehand_core::{ItemEnumerator, ReadyOptions, ReadyPhase, SdkError, SdkSettings};
use stagehand_dry_tests::{FakeHost, ItemRecordBuilder};

#[tokio::test]
async fn ready_override_switches_enumeration_to_the_legacy_path() {
    let fake = FakeHost::new().with_base_item("{BASE}");
    fake.add_item(ItemRecordBuilder::new("{BASE}").build());
    let host = fake.host().unwrap();
    assert!(host.gate().supports_item_list());

    host.readiness().signal_host_ready();
    host.readiness()
        .ready(ReadyOptions {
            version: Some(common::legacy_version()),
        })
        .await
        .unwrap();

    assert_eq!(host.readiness().phase(), ReadyPhase::Initialized);
    assert_eq!(host.version(), common::legacy_version());
    assert!(!host.gate().supports_item_list());

    let sources = ItemEnumerator::new(&host).enumerate(None).await.unwrap();
    assert_eq!(sources.len(), 1);
    assert!(!fake.touched("itemlist"));
}

#[tokio::test]
async fn override_is_visible_before_ready_resolves() {
    let fake = FakeHost::new();
    let host = fake.host().unwrap();

    let waiter = tokio::spawn({
        let host = host.clone();
        async move {
            host.readiness()
                .ready(ReadyOptions {
                    version: Some(common::pre_linking_version()),
                })
                .await
        }
    });
    tokio::task::yield_now().await;

    assert_eq!(host.readiness().phase(), ReadyPhase::NotReady);
    assert_eq!(host.version(), common::pre_linking_version());

    host.readiness().signal_host_ready();
    waiter.await.unwrap().unwrap();
    assert!(host.gate().supports_item_list());
    assert!(!host.gate().supports_global_source());
}

#[test]
fn malformed_thresholds_fail_host_construction() {
    let settings = SdkSettings {
        item_list_min_version: "2.x".into(),
        ..SdkSettings::default()
    };
    let err = FakeHost::new().host_with(&settings).unwrap_err();
    assert!(matches!(err, SdkError::Version(_)), "{err}");
}
