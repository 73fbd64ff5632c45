// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! SDK error taxonomy.

use std::time::Duration;

use stagehand_codec::CodecError;
use stagehand_port::{ExecutionContext, HostError, VersionParseError};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by SDK operations.
///
/// Every failure is scoped to the single operation that raised it; nothing
/// here is fatal to the process.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The current execution context structurally cannot have items.
    #[error("operation not supported in the {0} context")]
    UnsupportedContext(ExecutionContext),
    /// A required item could not be resolved.
    #[error("item not found: {0}")]
    NotFound(String),
    /// Malformed operation options; no host call was made.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
    /// The host returned a value the SDK cannot interpret.
    #[error("host returned invalid value {value:?} for {key}")]
    InvalidValue {
        /// Property key that was read.
        key: String,
        /// Raw value as returned by the host.
        value: String,
    },
    /// A host call exceeded the configured cooperative timeout.
    #[error("host call {operation} timed out after {after:?}")]
    Timeout {
        /// Name of the host operation.
        operation: &'static str,
        /// Configured timeout.
        after: Duration,
    },
    /// The readiness broadcast closed before the host signalled ready.
    #[error("host never signalled readiness")]
    NotReady,
    /// A configured version threshold could not be parsed.
    #[error(transparent)]
    Version(#[from] VersionParseError),
    /// Opaque host/transport failure.
    #[error(transparent)]
    Host(HostError),
    /// Item tree encoding failure.
    #[error(transparent)]
    Codec(#[from] CodecError),
    /// Settings could not be loaded or stored.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<HostError> for SdkError {
    fn from(err: HostError) -> Self {
        match err {
            HostError::NotFound(id) => Self::NotFound(id),
            other => Self::Host(other),
        }
    }
}

/// Result alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;
