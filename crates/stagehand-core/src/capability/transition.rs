// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Visibility and show/hide transitions.

use std::time::Duration;

use async_trait::async_trait;

use super::{invalid_value, HasItem};
use crate::error::SdkResult;
use crate::item::flag;

const VISIBLE: &str = "prop:visible";
const TRANSITION_ID: &str = "prop:transitionid";
const TRANSITION_TIME: &str = "prop:transitiontime";

/// Show/hide behavior.
#[async_trait]
pub trait Transition: HasItem {
    /// Whether the item is currently shown.
    async fn visible(&self) -> SdkResult<bool> {
        self.item().get_flag(VISIBLE).await
    }

    /// Show or hide the item. The host plays the configured transition.
    async fn set_visible(&self, visible: bool) -> SdkResult<()> {
        self.item().set(VISIBLE, flag(visible)).await
    }

    /// Transition effect id; `None` when the host default is used.
    async fn transition(&self) -> SdkResult<Option<String>> {
        let raw = self.item().get(TRANSITION_ID).await?;
        let trimmed = raw.trim();
        Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
    }

    /// Select a transition effect; `None` restores the host default.
    async fn set_transition(&self, id: Option<&str>) -> SdkResult<()> {
        self.item().set(TRANSITION_ID, id.unwrap_or("")).await
    }

    /// Transition duration.
    async fn transition_time(&self) -> SdkResult<Duration> {
        let raw = self.item().get(TRANSITION_TIME).await?;
        raw.trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| invalid_value(TRANSITION_TIME, &raw))
    }

    /// Set the transition duration, millisecond resolution.
    async fn set_transition_time(&self, time: Duration) -> SdkResult<()> {
        self.item()
            .set(TRANSITION_TIME, &time.as_millis().to_string())
            .await
    }
}
