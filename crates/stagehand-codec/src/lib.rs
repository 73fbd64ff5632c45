// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tree codec for stagehand-port property bags.
//!
//! This crate provides:
//! - Item XML encode/decode (`<item .../>`, the dialect `additem` consumes)
//! - A JSON projection of property bags for tooling and fixtures
//!
//! # Design
//!
//! Serialization is deliberately separated from the port contract.
//! This keeps stagehand-port free of format dependencies.

use thiserror::Error;

/// Error type for item tree encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The XML writer or reader failed.
    #[error("xml error: {0}")]
    Xml(String),
    /// The document parsed but contained no `<item>` element.
    #[error("no <item> element in document")]
    MissingItem,
    /// A JSON value did not have the shape of a property bag.
    #[error("json shape error: {0}")]
    Json(String),
}

mod json;
mod xml;

pub use json::{bag_from_json, bag_to_json};
pub use xml::{decode_item_xml, encode_item_xml, ITEM_TAG};
