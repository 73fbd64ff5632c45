// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Client-side item model for scripting a live production host.
//!
//! Discovers the items visible from the calling context, collapses linked
//! instances onto one source, classifies each source into a concrete type and
//! attaches that type's capability bundles. All host I/O goes through the
//! ports in `stagehand-port`; this crate holds no host connection of its own.
//!
//! ```text
//! ItemEnumerator -> dedupe -> classify -> Item::attach -> ComposedSource
//! ```

pub mod capability;
pub mod classify;
pub mod compose;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod gate;
pub mod host;
pub mod identity;
pub mod item;
pub mod lifecycle;
pub mod ready;
pub mod value;

pub use capability::{Capability, Chroma, Color, HasItem, KeyingType, Layout, Transition};
pub use classify::{classify, SourceKind};
pub use compose::{resolve_sources, ComposedSource};
pub use config::{ConfigError, ConfigService, ConfigStore, SdkSettings};
pub use enumerate::ItemEnumerator;
pub use error::{SdkError, SdkResult};
pub use gate::{VersionGate, VersionThresholds};
pub use host::{Host, HostPorts};
pub use identity::{ItemType, SourceIdentity};
pub use item::{Item, ViewKind};
pub use lifecycle::DuplicateOptions;
pub use ready::{Readiness, ReadyEvent, ReadyOptions, ReadyPhase};
pub use value::{Rect, Rgba};
