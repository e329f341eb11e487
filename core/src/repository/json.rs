use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::repository::store::KeyValueStore;

/// Top-level JSON shape a key is expected to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    Array,
    Object,
}

impl Shape {
    fn fits(self, value: &Value) -> bool {
        match self {
            Shape::Array => value.is_array(),
            Shape::Object => value.is_object(),
        }
    }
}

/// Suffix of the key that keeps a copy of a value that could not be read.
pub(crate) const UNREADABLE_SUFFIX: &str = "_unreadable";

fn load_value<S: KeyValueStore>(store: &S, key: &str, shape: Shape) -> Result<Option<Value>> {
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(value) if shape.fits(&value) => Ok(Some(value)),
        Ok(_) => {
            warn!(key, expected = ?shape, "stored value has the wrong shape, ignoring it");
            Ok(None)
        }
        Err(e) => {
            warn!(key, error = %e, "stored value is not valid JSON, ignoring it");
            Ok(None)
        }
    }
}

/// Elements of the array at `key`. Missing or unreadable values yield an empty list.
pub(crate) fn load_array<S: KeyValueStore>(store: &S, key: &str) -> Result<Vec<Value>> {
    Ok(match load_value(store, key, Shape::Array)? {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    })
}

/// Entries of the object at `key`. Missing or unreadable values yield an empty map.
pub(crate) fn load_object<S: KeyValueStore>(store: &S, key: &str) -> Result<Map<String, Value>> {
    Ok(match load_value(store, key, Shape::Object)? {
        Some(Value::Object(entries)) => entries,
        _ => Map::new(),
    })
}

/// Writes `value` to `key`.
///
/// If the current value cannot be read as `shape`, it is first copied to
/// `<key>_unreadable` so the overwrite never destroys it.
pub(crate) fn save<T, S>(store: &S, key: &str, value: &T, shape: Shape) -> Result<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore,
{
    if let Some(current) = store.get(key)? {
        let readable = serde_json::from_str::<Value>(&current)
            .map(|v| shape.fits(&v))
            .unwrap_or(false);
        if !readable {
            let backup_key = format!("{key}{UNREADABLE_SUFFIX}");
            warn!(key, backup_key = %backup_key, "keeping a copy of the unreadable stored value");
            store.set(&backup_key, &current)?;
        }
    }

    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to encode value for key {key:?}"))?;
    store.set(key, &json)?;
    Ok(())
}
