// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Position, aspect ratio, and rotation.

use async_trait::async_trait;

use super::{check_range, invalid_value, HasItem};
use crate::error::SdkResult;
use crate::item::flag;
use crate::value::Rect;

const POSITION: &str = "prop:pos";
const KEEP_ASPECT: &str = "prop:keep_ar";
const LOCK_MOVE: &str = "prop:lockmove";
const ROTATE_Z: &str = "prop:rotate_z";

/// Placement on the output canvas.
#[async_trait]
pub trait Layout: HasItem {
    /// Current placement.
    async fn position(&self) -> SdkResult<Rect> {
        let raw = self.item().get(POSITION).await?;
        Rect::parse(&raw).ok_or_else(|| invalid_value(POSITION, &raw))
    }

    /// Move/resize the item. Edges are canvas fractions in `0.0..=1.0`.
    async fn set_position(&self, rect: Rect) -> SdkResult<()> {
        for edge in [rect.left, rect.top, rect.right, rect.bottom] {
            check_range("position edge", edge, 0.0..=1.0)?;
        }
        self.item().set(POSITION, &rect.to_string()).await
    }

    /// Whether resizing preserves aspect ratio.
    async fn keep_aspect_ratio(&self) -> SdkResult<bool> {
        self.item().get_flag(KEEP_ASPECT).await
    }

    /// Set aspect-ratio locking.
    async fn set_keep_aspect_ratio(&self, keep: bool) -> SdkResult<()> {
        self.item().set(KEEP_ASPECT, flag(keep)).await
    }

    /// Whether the item is locked against mouse moves in the host UI.
    async fn position_locked(&self) -> SdkResult<bool> {
        self.item().get_flag(LOCK_MOVE).await
    }

    /// Lock or unlock the position.
    async fn set_position_locked(&self, locked: bool) -> SdkResult<()> {
        self.item().set(LOCK_MOVE, flag(locked)).await
    }

    /// Rotation around the Z axis in degrees.
    async fn rotate_z(&self) -> SdkResult<f64> {
        self.item().get_number(ROTATE_Z).await
    }

    /// Rotate around the Z axis; `-360.0..=360.0`.
    async fn set_rotate_z(&self, degrees: f64) -> SdkResult<()> {
        let degrees = check_range("rotate_z", degrees, -360.0..=360.0)?;
        self.item().set(ROTATE_Z, &degrees.to_string()).await
    }
}
