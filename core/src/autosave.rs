use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const AUTO_SAVE_VERSION: u32 = 1;

// The single always-current form snapshot: every input, select, and
// textarea id in the document, a superset of the field registry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutoSaveSnapshot {
    pub version: u32,
    pub fields: BTreeMap<String, String>,
}

impl Default for AutoSaveSnapshot {
    fn default() -> Self {
        Self {
            version: AUTO_SAVE_VERSION,
            fields: BTreeMap::new(),
        }
    }
}

impl AutoSaveSnapshot {
    pub fn from_fields(fields: BTreeMap<String, String>) -> Self {
        Self {
            version: AUTO_SAVE_VERSION,
            fields,
        }
    }
}
