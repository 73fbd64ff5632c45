// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Transparency, color correction, and border color.

use async_trait::async_trait;

use super::{check_range, invalid_value, HasItem};
use crate::error::SdkResult;
use crate::value::Rgba;

const ALPHA: &str = "prop:alpha";
const BRIGHTNESS: &str = "prop:cc_brightness";
const CONTRAST: &str = "prop:cc_contrast";
const HUE: &str = "prop:cc_hue";
const SATURATION: &str = "prop:cc_saturation";
const BORDER: &str = "prop:border";

/// Color adjustments applied to the rendered item.
#[async_trait]
pub trait Color: HasItem {
    /// Opacity, 0 (transparent) to 255 (opaque).
    async fn transparency(&self) -> SdkResult<u8> {
        let raw = self.item().get(ALPHA).await?;
        raw.trim().parse().map_err(|_| invalid_value(ALPHA, &raw))
    }

    /// Set opacity.
    async fn set_transparency(&self, alpha: u8) -> SdkResult<()> {
        self.item().set(ALPHA, &alpha.to_string()).await
    }

    /// Brightness correction, `-100..=100`.
    async fn brightness(&self) -> SdkResult<i32> {
        read_int(self.item(), BRIGHTNESS).await
    }

    /// Set brightness correction.
    async fn set_brightness(&self, value: i32) -> SdkResult<()> {
        let value = check_range("brightness", value, -100..=100)?;
        self.item().set(BRIGHTNESS, &value.to_string()).await
    }

    /// Contrast correction, `-100..=100`.
    async fn contrast(&self) -> SdkResult<i32> {
        read_int(self.item(), CONTRAST).await
    }

    /// Set contrast correction.
    async fn set_contrast(&self, value: i32) -> SdkResult<()> {
        let value = check_range("contrast", value, -100..=100)?;
        self.item().set(CONTRAST, &value.to_string()).await
    }

    /// Hue rotation, `-180..=180`.
    async fn hue(&self) -> SdkResult<i32> {
        read_int(self.item(), HUE).await
    }

    /// Set hue rotation.
    async fn set_hue(&self, value: i32) -> SdkResult<()> {
        let value = check_range("hue", value, -180..=180)?;
        self.item().set(HUE, &value.to_string()).await
    }

    /// Saturation correction, `-100..=100`.
    async fn saturation(&self) -> SdkResult<i32> {
        read_int(self.item(), SATURATION).await
    }

    /// Set saturation correction.
    async fn set_saturation(&self, value: i32) -> SdkResult<()> {
        let value = check_range("saturation", value, -100..=100)?;
        self.item().set(SATURATION, &value.to_string()).await
    }

    /// Border color. The host stores it as a signed packed integer.
    async fn border_color(&self) -> SdkResult<Rgba> {
        let raw = self.item().get(BORDER).await?;
        let trimmed = raw.trim();
        let packed = trimmed
            .parse::<u32>()
            .ok()
            .or_else(|| trimmed.parse::<i32>().ok().map(i32::cast_unsigned))
            .ok_or_else(|| invalid_value(BORDER, &raw))?;
        Ok(Rgba::from_bgr_int(packed))
    }

    /// Set the border color.
    async fn set_border_color(&self, color: Rgba) -> SdkResult<()> {
        self.item()
            .set(BORDER, &color.to_bgr_int().to_string())
            .await
    }
}

async fn read_int(item: &crate::item::Item, key: &str) -> SdkResult<i32> {
    let raw = item.get(key).await?;
    raw.trim().parse().map_err(|_| invalid_value(key, &raw))
}
