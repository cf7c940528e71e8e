//! Recursive mapping merge
//!
//! - Objects: deep-merge by key
//! - Anything else: overlay wins (arrays are replaced, nulls override)

use serde_json::{Map, Value};

/// Merge two mappings without touching either input.
///
/// Keys only in `a` are kept, keys only in `b` are added. A key present in
/// both recurses when both values are objects; otherwise `b`'s value wins.
pub fn merge(a: &Map<String, Value>, b: &Map<String, Value>) -> Map<String, Value> {
    let mut merged = a.clone();
    for (key, b_value) in b {
        let value = match (merged.remove(key), b_value) {
            (Some(Value::Object(a_map)), Value::Object(b_map)) => {
                tracing::trace!(key = %key, "merging nested mapping");
                Value::Object(merge(&a_map, b_map))
            }
            (Some(_), overlay) => {
                tracing::trace!(key = %key, "overlay value wins");
                overlay.clone()
            }
            (None, overlay) => overlay.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}

/// Owned variant of [`merge`] over whole documents.
///
/// Used to fold API document fragments and settings layers, where the
/// inputs are consumed anyway: `base`'s map is reused and overlay keys are
/// moved into it. A document root that is not an object (or any non-object
/// pair below it) is replaced by the overlay.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = if let Some(base_value) = base_map.remove(&key) {
                    deep_merge(base_value, overlay_value)
                } else {
                    overlay_value
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }

        // Arrays, scalars, null, or a shape mismatch
        (_, overlay) => overlay,
    }
}

/// Merge layers in order (first is base, last has highest precedence)
pub fn merge_layers(layers: Vec<Value>) -> Value {
    layers.into_iter().fold(Value::Null, deep_merge)
}
