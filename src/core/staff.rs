//! Staff identity resolution against the canonical mapping file.
//!
//! The mapping is built out of band from known name variants (documented
//! misspellings included) and maps "firstname_lastname" keys to staff ids,
//! or to null as an explicit unresolved placeholder. It is loaded once and
//! passed around immutably.

use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub type StaffId = i64;

#[derive(Debug, Clone)]
pub struct StaffDirectory {
    // BTreeMap so the fallback scan below is deterministic (lexical order).
    map: BTreeMap<String, Option<StaffId>>,
}

impl StaffDirectory {
    pub fn new(map: BTreeMap<String, Option<StaffId>>) -> Self {
        Self { map }
    }

    /// Load the JSON identity-mapping file. A missing or malformed file is
    /// fatal for the whole run.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::InvalidMapping(format!("{}: {}", path.display(), e))
        })?;
        let map: BTreeMap<String, Option<StaffId>> = serde_json::from_str(&content)
            .map_err(|e| AppError::InvalidMapping(format!("{}: {}", path.display(), e)))?;
        Ok(Self::new(map))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Normalized join key between extracted names and canonical identities.
    pub fn key(first_name: &str, last_name: &str) -> String {
        format!("{}_{}", first_name.to_lowercase(), last_name.to_lowercase())
    }

    /// Resolve an extracted name to a staff id.
    ///
    /// Exact key match first; otherwise the keys are scanned in lexical
    /// order for one whose own first-name segment prefixes the extracted
    /// first name, and the first hit wins. That fallback is a deliberate
    /// policy choice and a known limitation: two staff sharing a
    /// first-name prefix can mis-resolve (see DESIGN.md).
    pub fn resolve(&self, first_name: &str, last_name: &str) -> Option<StaffId> {
        let key = Self::key(first_name, last_name);
        if let Some(entry) = self.map.get(&key) {
            // A null value is an explicit "known but unresolved" marker.
            return *entry;
        }

        let first_lower = first_name.to_lowercase();
        for (k, v) in &self.map {
            let segment = k.split('_').next().unwrap_or(k);
            if !segment.is_empty() && first_lower.starts_with(segment) {
                return *v;
            }
        }

        None
    }
}
