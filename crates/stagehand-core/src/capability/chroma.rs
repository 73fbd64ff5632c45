// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Chroma and color keying.

use async_trait::async_trait;

use super::{check_range, invalid_value, HasItem};
use crate::error::SdkResult;
use crate::item::flag;
use crate::value::Rgba;

const ENABLED: &str = "prop:key_chromakey";
const KEYING_TYPE: &str = "prop:key_chromakeytype";
const BRIGHTNESS: &str = "prop:key_chromabr";
const SATURATION: &str = "prop:key_chromasat";
const HUE: &str = "prop:key_chromahue";
const KEY_COLOR: &str = "prop:key_colorrgb";

/// Keying algorithm selected for the item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyingType {
    /// Host's original keyer.
    Legacy,
    /// Key out a single RGB color.
    ColorKey,
    /// Chroma keyer.
    ChromaKey,
}

impl KeyingType {
    fn from_host(raw: &str) -> Option<Self> {
        match raw.trim() {
            "0" => Some(Self::Legacy),
            "1" => Some(Self::ColorKey),
            "2" => Some(Self::ChromaKey),
            _ => None,
        }
    }

    fn host_code(self) -> &'static str {
        match self {
            Self::Legacy => "0",
            Self::ColorKey => "1",
            Self::ChromaKey => "2",
        }
    }
}

/// Keying controls.
#[async_trait]
pub trait Chroma: HasItem {
    /// Whether keying is enabled.
    async fn keying_enabled(&self) -> SdkResult<bool> {
        self.item().get_flag(ENABLED).await
    }

    /// Enable or disable keying.
    async fn set_keying_enabled(&self, enabled: bool) -> SdkResult<()> {
        self.item().set(ENABLED, flag(enabled)).await
    }

    /// Active keying algorithm.
    async fn keying_type(&self) -> SdkResult<KeyingType> {
        let raw = self.item().get(KEYING_TYPE).await?;
        KeyingType::from_host(&raw).ok_or_else(|| invalid_value(KEYING_TYPE, &raw))
    }

    /// Select the keying algorithm.
    async fn set_keying_type(&self, kind: KeyingType) -> SdkResult<()> {
        self.item().set(KEYING_TYPE, kind.host_code()).await
    }

    /// Keyer brightness, `0..=255`.
    async fn chroma_brightness(&self) -> SdkResult<u8> {
        let raw = self.item().get(BRIGHTNESS).await?;
        raw.trim().parse().map_err(|_| invalid_value(BRIGHTNESS, &raw))
    }

    /// Set keyer brightness.
    async fn set_chroma_brightness(&self, value: u8) -> SdkResult<()> {
        self.item().set(BRIGHTNESS, &value.to_string()).await
    }

    /// Keyer saturation, `0..=255`.
    async fn chroma_saturation(&self) -> SdkResult<u8> {
        let raw = self.item().get(SATURATION).await?;
        raw.trim().parse().map_err(|_| invalid_value(SATURATION, &raw))
    }

    /// Set keyer saturation.
    async fn set_chroma_saturation(&self, value: u8) -> SdkResult<()> {
        self.item().set(SATURATION, &value.to_string()).await
    }

    /// Keyer hue, `0..=180`.
    async fn chroma_hue(&self) -> SdkResult<u16> {
        let raw = self.item().get(HUE).await?;
        raw.trim().parse().map_err(|_| invalid_value(HUE, &raw))
    }

    /// Set keyer hue.
    async fn set_chroma_hue(&self, value: u16) -> SdkResult<()> {
        let value = check_range("chroma hue", value, 0..=180)?;
        self.item().set(HUE, &value.to_string()).await
    }

    /// Color removed by the color keyer.
    async fn key_color(&self) -> SdkResult<Rgba> {
        let raw = self.item().get(KEY_COLOR).await?;
        Rgba::from_hex(&raw).ok_or_else(|| invalid_value(KEY_COLOR, &raw))
    }

    /// Set the keyed color. Alpha is ignored by the host.
    async fn set_key_color(&self, color: Rgba) -> SdkResult<()> {
        self.item().set(KEY_COLOR, &color.to_hex()).await
    }
}
