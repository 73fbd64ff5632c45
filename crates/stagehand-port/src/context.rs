// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Execution-context port: where inside the host is this code running.

use crate::ItemId;
use std::fmt;

/// The three mutually exclusive places SDK code can be hosted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    /// A host extension panel. Has no associated item.
    Extension,
    /// A source plugin rendering as an item.
    SourcePlugin,
    /// A source's configuration window.
    SourceConfig,
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Extension => "extension",
            Self::SourcePlugin => "source plugin",
            Self::SourceConfig => "source config",
        })
    }
}

/// Environment port.
///
/// Implementors report a single [`ExecutionContext`]; the `is_*` helpers are
/// derived from it so they can never disagree.
pub trait HostContext: Send + Sync {
    /// The context this process runs in.
    fn execution_context(&self) -> ExecutionContext;

    /// The item this plugin or config window belongs to (none for extensions).
    fn base_item_id(&self) -> Option<ItemId>;

    /// Whether the host's preview editor is currently open.
    fn preview_editor_open(&self) -> bool {
        false
    }

    /// Running as an extension.
    fn is_extension(&self) -> bool {
        self.execution_context() == ExecutionContext::Extension
    }

    /// Running as a source plugin.
    fn is_source_plugin(&self) -> bool {
        self.execution_context() == ExecutionContext::SourcePlugin
    }

    /// Running as a source configuration window.
    fn is_source_config(&self) -> bool {
        self.execution_context() == ExecutionContext::SourceConfig
    }
}
