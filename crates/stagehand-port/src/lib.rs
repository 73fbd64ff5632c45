// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Host port contract for the stagehand SDK.
//!
//! This crate defines the boundary between the SDK core and the production
//! host it drives. It contains NO serialization logic (that lives in
//! stagehand-codec) and NO host I/O (adapters implement the traits here).
//!
//! # Design Principles
//!
//! - **Stringly-typed host, typed SDK**: The host speaks `key -> string`. Ports
//!   keep that shape; interpretation happens in the core.
//! - **Slots are opaque**: An [`ItemSlot`] is only ever obtained from
//!   [`PropertyChannel::attach`] and handed back verbatim.
//! - **No shared state**: Every port call is independent; adapters decide how
//!   to serialize access to the real host.

use thiserror::Error;

/// Error type for host collaborator calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host could not find the requested item (stale or removed id).
    #[error("item not found: {0}")]
    NotFound(String),
    /// The host refused the call (unknown key, read-only property, bad command).
    #[error("host rejected call: {0}")]
    Rejected(String),
    /// Transport-level failure between the SDK and the host.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result alias for host collaborator calls.
pub type HostResult<T> = Result<T, HostError>;

mod bag;
mod context;
mod ids;
mod port;
mod version;

pub use bag::{ItemRecord, PropertyBag};
pub use context::{ExecutionContext, HostContext};
pub use ids::{ItemId, ItemSlot, SceneRef, SourceId};
pub use port::{HostCommands, PropertyChannel, SceneDirectory};
pub use version::{HostVersion, VersionOracle, VersionParseError};
