// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Duplicating and unlinking items.
//!
//! Duplication forks on host generation at the top of the operation:
//! hosts without linked (global) sources only understand a bare `additem`
//! command, newer hosts take a `link:<0|1>|s:<scene>|additem` command that
//! can bind the copy to the original's source and target another scene.

use stagehand_codec::encode_item_xml;
use stagehand_port::SceneRef;
use tracing::{debug, instrument};

use crate::error::{SdkError, SdkResult};
use crate::item::{flag, keys, Item};

const ADD_ITEM: &str = "additem";

/// Options for [`Item::duplicate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DuplicateOptions {
    /// Bind the copy to the original's source.
    pub linked: Option<bool>,
    /// Destination scene; defaults to the current scene.
    pub scene: Option<SceneRef>,
}

impl DuplicateOptions {
    /// Set the `linked` option.
    pub fn linked(mut self, linked: bool) -> Self {
        self.linked = Some(linked);
        self
    }

    /// Set the destination scene.
    pub fn in_scene(mut self, scene: SceneRef) -> Self {
        self.scene = Some(scene);
        self
    }
}

impl Item {
    /// Duplicate this item host-side.
    ///
    /// An invalid `scene` is rejected before any host call is made. On hosts
    /// without linked sources both options are ignored.
    #[instrument(skip(self), fields(item = %self.id()))]
    pub async fn duplicate(&self, options: DuplicateOptions) -> SdkResult<&Self> {
        if let Some(scene) = options.scene.as_ref().filter(|s| !s.is_valid()) {
            return Err(SdkError::InvalidParameters(format!(
                "invalid scene reference `{scene}`"
            )));
        }

        let xml = encode_item_xml(&self.identity().properties)?;

        if !self.host().gate().supports_global_source() {
            debug!(version = %self.host().version(), "host predates linked sources; plain additem");
            self.host().call_func(ADD_ITEM, &xml).await?;
            return Ok(self);
        }

        let command = match (options.linked, options.scene.as_ref()) {
            (None, None) => format!("link:0|{ADD_ITEM}"),
            (linked, scene) => {
                let linked = linked.unwrap_or(false);
                if linked {
                    self.set(keys::KEEP_LOADED, flag(true)).await?;
                }
                let scene_number = match scene {
                    Some(scene) => self.host().scene_number(scene).await?,
                    None => self.scene_id(),
                };
                format!("link:{}|s:{scene_number}|{ADD_ITEM}", flag(linked))
            }
        };

        debug!(%command, "duplicating");
        self.host().call_func(&command, &xml).await?;
        Ok(self)
    }

    /// Detach this item from its linked source.
    ///
    /// One-way: there is no re-link operation.
    #[instrument(skip(self), fields(item = %self.id()))]
    pub async fn unlink(&self) -> SdkResult<&Self> {
        self.set(keys::GLOBAL_SOURCE, flag(false)).await?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_both_options() {
        let opts = DuplicateOptions::default()
            .linked(true)
            .in_scene(SceneRef::Number(3));
        assert_eq!(opts.linked, Some(true));
        assert_eq!(opts.scene, Some(SceneRef::Number(3)));
    }
}
