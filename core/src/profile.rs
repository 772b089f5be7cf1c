use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::geometry::NormalizedPoint;

pub const PROFILE_BOOK_VERSION: u32 = 1;

// One named record: every registry field value, the rendered snapshot
// image, and the shot plots of both diagrams.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub fields: BTreeMap<String, String>,
    #[serde(default)]
    pub snapshot: Option<String>,
    #[serde(default)]
    pub hold_shots: Vec<NormalizedPoint>,
    #[serde(default)]
    pub shot_shots: Vec<NormalizedPoint>,
}

impl Profile {
    pub fn field(&self, id: &str) -> &str {
        self.fields.get(id).map(String::as_str).unwrap_or("")
    }
}

// Name-keyed collection as persisted to local storage. The name is the
// sole identity; saving under an existing name overwrites it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileBook {
    pub version: u32,
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for ProfileBook {
    fn default() -> Self {
        Self {
            version: PROFILE_BOOK_VERSION,
            profiles: BTreeMap::new(),
        }
    }
}

impl ProfileBook {
    // All names, reverse lexicographic.
    pub fn names(&self) -> Vec<String> {
        self.profiles.keys().rev().cloned().collect()
    }

    pub fn upsert(&mut self, name: &str, profile: Profile) {
        self.profiles.insert(name.to_string(), profile);
    }

    pub fn get(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.profiles.remove(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }
}
