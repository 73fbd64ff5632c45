// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `stagehand classify`.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;
use stagehand_codec::{bag_from_json, bag_to_json, decode_item_xml};
use stagehand_port::PropertyBag;
use stagehand_core::{classify, SourceIdentity};
use tracing::debug;

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(input).with_context(|| format!("read {}", input.display()))
    }
}

/// Item XML, or a JSON object of properties when the input opens with `{`.
fn decode_bag(raw: &str) -> Result<PropertyBag> {
    if raw.trim_start().starts_with('{') {
        let value: serde_json::Value = serde_json::from_str(raw).context("parse json fixture")?;
        bag_from_json(&value).context("decode json fixture")
    } else {
        decode_item_xml(raw).context("decode item xml")
    }
}

pub fn run(input: &Path, as_json: bool) -> Result<()> {
    let raw = read_input(input)?;
    let bag = decode_bag(&raw)?;
    let identity = SourceIdentity::from_properties(bag, 0);
    let kind = classify(&identity);
    debug!(item = %identity.id, %kind, "classified");

    let capabilities: Vec<String> = kind
        .capabilities()
        .iter()
        .map(ToString::to_string)
        .collect();

    if as_json {
        let out = json!({
            "id": identity.id.as_str(),
            "source_id": identity.source_id.as_str(),
            "type": identity.item_type.to_string(),
            "type_code": identity.item_type.host_code(),
            "kind": kind.as_str(),
            "capabilities": capabilities,
            "properties": bag_to_json(&identity.properties),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("id:           {}", identity.id);
        println!("type:         {}", identity.item_type);
        println!("kind:         {kind}");
        if capabilities.is_empty() {
            println!("capabilities: (none)");
        } else {
            println!("capabilities: {}", capabilities.join(", "));
        }
    }
    Ok(())
}
