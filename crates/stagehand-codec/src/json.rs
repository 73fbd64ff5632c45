// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! JSON projection of property bags (tooling output, recorded fixtures).

use serde_json::{Map, Value};
use stagehand_port::PropertyBag;

use crate::CodecError;

/// Project a bag into a JSON object of strings, keeping attribute order.
pub fn bag_to_json(bag: &PropertyBag) -> Value {
    let map: Map<String, Value> = bag
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect();
    Value::Object(map)
}

/// Read a bag back from a JSON object.
///
/// Numbers and booleans are accepted and stringified the way the host would
/// report them (`true` -> `"1"`); nested values are rejected.
pub fn bag_from_json(value: &Value) -> Result<PropertyBag, CodecError> {
    let Value::Object(map) = value else {
        return Err(CodecError::Json("expected an object".into()));
    };
    let mut bag = PropertyBag::new();
    for (key, v) in map {
        let raw = match v {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
            Value::Null => String::new(),
            Value::Array(_) | Value::Object(_) => {
                return Err(CodecError::Json(format!("property {key:?} is not a scalar")));
            }
        };
        bag.insert(key.clone(), raw);
    }
    Ok(bag)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_are_stringified_like_the_host() {
        let bag = bag_from_json(&json!({
            "type": 2,
            "keeploaded": true,
            "name": "Cam",
            "cname": null
        }))
        .unwrap();
        assert_eq!(bag.get("type"), Some("2"));
        assert_eq!(bag.get("keeploaded"), Some("1"));
        assert_eq!(bag.get("cname"), Some(""));
        let keys: Vec<_> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["type", "keeploaded", "name", "cname"]);
    }

    #[test]
    fn nested_values_are_rejected() {
        assert!(bag_from_json(&json!({ "pos": [0, 0, 1, 1] })).is_err());
        assert!(bag_from_json(&json!("item")).is_err());
    }

    #[test]
    fn projection_preserves_order() {
        let bag: PropertyBag = [("z", "1"), ("a", "2")].into_iter().collect();
        let value = bag_to_json(&bag);
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
