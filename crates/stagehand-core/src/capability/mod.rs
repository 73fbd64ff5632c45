// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Capability bundles.
//!
//! Each bundle is a trait whose methods all have default bodies operating on
//! the base [`Item`]; implementing a bundle for a source type is an empty
//! `impl`. Bundles carry behavior only, never state.

use std::fmt;
use std::ops::RangeInclusive;

use crate::error::{SdkError, SdkResult};
use crate::item::Item;

mod chroma;
mod color;
mod layout;
mod transition;

pub use chroma::{Chroma, KeyingType};
pub use color::Color;
pub use layout::Layout;
pub use transition::Transition;

/// Access to the base item a capability operates on.
pub trait HasItem: Send + Sync {
    /// The wrapped item.
    fn item(&self) -> &Item;
}

/// Capability bundle names, as listed in the composition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Position, aspect ratio, rotation.
    Layout,
    /// Transparency and color correction.
    Color,
    /// Chroma/color keying.
    Chroma,
    /// Visibility and show/hide transitions.
    Transition,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Layout => "layout",
            Self::Color => "color",
            Self::Chroma => "chroma",
            Self::Transition => "transition",
        })
    }
}

pub(crate) fn check_range<T>(what: &str, value: T, range: RangeInclusive<T>) -> SdkResult<T>
where
    T: PartialOrd + fmt::Display + Copy,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(SdkError::InvalidParameters(format!(
            "{what} must be within {}..={}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

pub(crate) fn invalid_value(key: &str, value: &str) -> SdkError {
    SdkError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
