//! Snapshot of asset data as JSON
//!
//! A snapshot is the input of one collection build, exported by whatever
//! fetched the assets: `{ "assets": [...], "locations": [...] }`.

use crate::collection::AssetCollection;
use crate::error::{HangarError, Result};
use hangar_api::{Asset, Location};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, Default, JsonSchema)]
pub struct Snapshot {
    #[serde(default)]
    pub assets: Vec<Asset>,
    #[serde(default)]
    pub locations: Vec<Location>,
}

impl Snapshot {
    pub fn new(assets: Vec<Asset>, locations: Vec<Location>) -> Self {
        Self { assets, locations }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let snapshot: Snapshot = serde_json::from_slice(&bytes)?;
        debug!(
            path = %path.display(),
            assets = snapshot.assets.len(),
            locations = snapshot.locations.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject duplicate IDs. The collection build tolerates them, but a
    /// snapshot containing them was exported incorrectly.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for location in &self.locations {
            if !seen.insert(location.id) {
                return Err(HangarError::InvalidSnapshot(format!(
                    "duplicate location id {}",
                    location.id
                )));
            }
        }

        seen.clear();
        for asset in &self.assets {
            if !seen.insert(asset.item_id) {
                return Err(HangarError::InvalidSnapshot(format!(
                    "duplicate asset item id {}",
                    asset.item_id
                )));
            }
        }
        Ok(())
    }

    pub fn build(&self) -> AssetCollection {
        AssetCollection::new(self.assets.iter().cloned(), self.locations.iter().cloned())
    }

    /// Number of distinct assets that did not make it into `collection`.
    pub fn orphan_count(&self, collection: &AssetCollection) -> usize {
        let distinct: HashSet<_> = self.assets.iter().map(|a| a.item_id).collect();
        distinct.len().saturating_sub(collection.len())
    }

    /// JSON schema of the snapshot format.
    pub fn json_schema() -> Result<serde_json::Value> {
        let schema = schemars::schema_for!(Snapshot);
        Ok(serde_json::to_value(&schema)?)
    }
}
