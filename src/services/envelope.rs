// src/services/envelope.rs
// DOCUMENTATION: Content API envelope normalization
// PURPOSE: Strip the inconsistent wrappers the content API puts around payloads

use crate::errors::SiteError;
use serde_json::Value;

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extract a list payload
/// DOCUMENTATION: Accepts a bare array, `{data: [...]}` or a resource-keyed
/// object such as `{tours: [...]}`. `data` is checked first, then `keys` in order.
pub fn unwrap_list(value: Value, keys: &[&str]) -> Result<Value, SiteError> {
    match value {
        Value::Array(_) => Ok(value),
        Value::Object(mut map) => {
            for key in std::iter::once("data").chain(keys.iter().copied()) {
                if matches!(map.get(key), Some(Value::Array(_))) {
                    if let Some(inner) = map.remove(key) {
                        return Ok(inner);
                    }
                }
            }
            let found: Vec<&str> = map.keys().map(String::as_str).collect();
            Err(SiteError::UnexpectedShape(format!(
                "object without a list member (keys: {})",
                found.join(", ")
            )))
        }
        other => Err(SiteError::UnexpectedShape(format!(
            "expected a list, got {}",
            kind(&other)
        ))),
    }
}

/// Extract a single-object payload
/// DOCUMENTATION: An object whose `data` (or one of `keys`) member is itself an
/// object yields that member; otherwise the object is the payload.
/// A `data` member that is null means the API had nothing to return.
pub fn unwrap_item(value: Value, keys: &[&str]) -> Result<Value, SiteError> {
    match value {
        Value::Object(mut map) => {
            if matches!(map.get("data"), Some(Value::Null)) {
                return Err(SiteError::UnexpectedShape("empty data member".to_string()));
            }
            for key in std::iter::once("data").chain(keys.iter().copied()) {
                if matches!(map.get(key), Some(Value::Object(_))) {
                    if let Some(inner) = map.remove(key) {
                        return Ok(inner);
                    }
                }
            }
            Ok(Value::Object(map))
        }
        other => Err(SiteError::UnexpectedShape(format!(
            "expected an object, got {}",
            kind(&other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_envelopes() {
        let bare = json!([{ "slug": "a" }]);
        let data = json!({ "data": [{ "slug": "a" }], "count": 1 });
        let keyed = json!({ "tours": [{ "slug": "a" }], "success": true });

        for value in [bare, data, keyed] {
            let list = unwrap_list(value, &["tours"]).unwrap();
            assert_eq!(list, json!([{ "slug": "a" }]));
        }
    }

    #[test]
    fn test_list_prefers_data_over_resource_key() {
        let value = json!({ "tours": [1], "data": [2] });
        assert_eq!(unwrap_list(value, &["tours"]).unwrap(), json!([2]));
    }

    #[test]
    fn test_list_wrong_shapes() {
        let err = unwrap_list(json!({ "message": "ok" }), &["tours"]).unwrap_err();
        assert!(matches!(err, SiteError::UnexpectedShape(_)));
        assert!(err.to_string().contains("message"));

        // data present but not a list
        assert!(unwrap_list(json!({ "data": { "tours": 1 } }), &[]).is_err());
        assert!(unwrap_list(json!("tours"), &[]).is_err());
        assert!(unwrap_list(Value::Null, &[]).is_err());
    }

    #[test]
    fn test_item_envelopes() {
        let wrapped = json!({ "data": { "title": "Home" } });
        let keyed = json!({ "excursion": { "title": "Home" }, "success": true });
        let bare = json!({ "title": "Home" });

        for value in [wrapped, keyed, bare] {
            let item = unwrap_item(value, &["excursion"]).unwrap();
            assert_eq!(item, json!({ "title": "Home" }));
        }
    }

    #[test]
    fn test_item_null_data() {
        let err = unwrap_item(json!({ "success": false, "data": null }), &[]).unwrap_err();
        assert!(matches!(err, SiteError::UnexpectedShape(_)));
    }

    #[test]
    fn test_item_rejects_arrays() {
        let err = unwrap_item(json!([{ "title": "Home" }]), &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unexpected response shape: expected an object, got array"
        );
    }
}
