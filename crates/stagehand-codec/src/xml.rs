// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Item XML encoding and decoding.
//!
//! The host describes an item as a single self-closing element whose
//! attributes are the item's properties:
//!
//! ```xml
//! <item id="{A1}" srcid="{S1}" type="2" name="Webcam" item="@DEVICE:PNP:..."/>
//! ```
//!
//! Attribute order is preserved in both directions.

use std::io::Cursor;

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use stagehand_port::PropertyBag;

use crate::CodecError;

/// Element name of an item description.
pub const ITEM_TAG: &str = "item";

/// Encode a property bag as a self-closing `<item/>` element.
pub fn encode_item_xml(bag: &PropertyBag) -> Result<String, CodecError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    let mut elem = BytesStart::new(ITEM_TAG);
    for (name, value) in bag.iter() {
        elem.push_attribute((name, value));
    }
    writer
        .write_event(Event::Empty(elem))
        .map_err(|e| CodecError::Xml(e.to_string()))?;

    String::from_utf8(writer.into_inner().into_inner())
        .map_err(|e| CodecError::Xml(e.to_string()))
}

/// Decode the first `<item>` element of a document into a property bag.
///
/// Elements other than `item` (wrappers such as `<placement>`) are skipped.
pub fn decode_item_xml(xml: &str) -> Result<PropertyBag, CodecError> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(e) | Event::Start(e)) if e.name().as_ref() == ITEM_TAG.as_bytes() => {
                return attributes_to_bag(&e);
            }
            Ok(Event::Eof) => return Err(CodecError::MissingItem),
            Ok(_) => {}
            Err(e) => {
                return Err(CodecError::Xml(format!(
                    "at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
        }
    }
}

fn attributes_to_bag(elem: &BytesStart<'_>) -> Result<PropertyBag, CodecError> {
    let mut bag = PropertyBag::new();
    for attr in elem.attributes() {
        let attr = attr.map_err(|e| CodecError::Xml(e.to_string()))?;
        let name = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| CodecError::Xml(e.to_string()))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| CodecError::Xml(e.to_string()))?
            .into_owned();
        bag.insert(name, value);
    }
    Ok(bag)
}
