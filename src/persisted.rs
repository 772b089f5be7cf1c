// Local-storage keys and the JSON read/write helpers shared by the
// profile and auto-save stores. Keys carry a schema-version suffix so a
// format change can never misread older data.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dom;

pub(crate) const PROFILE_BOOK_KEY: &str = "rangecard.profiles.v1";
pub(crate) const AUTO_SAVE_KEY: &str = "rangecard.autosave.v1";

// Corrupt JSON is logged and treated as absent so startup never crashes
// on bad data.
pub(crate) fn read_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::local_storage()?;
    let raw = storage.get_item(key).ok()??;
    if raw.is_empty() {
        return None;
    }
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            gloo::console::error!("persisted: corrupt record", key, err.to_string());
            None
        }
    }
}

// Write failures (quota, privacy mode) come back as an error message for
// the caller to surface; in-memory state is never touched.
pub(crate) fn write_json<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let raw = serde_json::to_string(value)
        .map_err(|err| format!("failed to encode {key}: {err}"))?;
    let storage = dom::local_storage().ok_or_else(|| "local storage unavailable".to_string())?;
    storage
        .set_item(key, &raw)
        .map_err(|_| format!("storage write rejected for {key} (quota or privacy mode)"))
}

pub(crate) fn remove(key: &str) {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.remove_item(key);
    }
}
