use crate::models::{ItemId, LocationId};
use std::collections::HashMap;

/// Placeholder shown for assets whose location cannot be resolved.
pub const UNKNOWN_LOCATION_LABEL: &str = "?";

/// Read-only queries answered by a built asset index.
pub trait AssetLookup: Send + Sync {
    /// Root location of an asset at any nesting depth.
    fn parent_location_id(&self, item_id: ItemId) -> Option<LocationId>;

    /// IDs of all root locations.
    fn location_ids(&self) -> Vec<LocationId>;

    /// Label of the root location of an asset, or `"?"` when the asset is
    /// unknown or has no label.
    fn location_label(&self, item_id: ItemId, labels: &HashMap<LocationId, String>) -> String {
        self.parent_location_id(item_id)
            .and_then(|id| labels.get(&id))
            .cloned()
            .unwrap_or_else(|| UNKNOWN_LOCATION_LABEL.to_string())
    }
}
