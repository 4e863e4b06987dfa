//! Asset trees grouped by location
//!
//! An `AssetCollection` arranges a flat list of assets into one tree per
//! location: a station holds ships and containers, a ship holds its modules
//! and cargo, and so on to any depth. It also answers in O(1) which location
//! an asset ultimately belongs to.
//!
//! The collection is immutable and cheap to clone. Build a new one when the
//! underlying assets change.

mod builder;
mod node;

pub use node::{AssetNode, LocationNode};

use builder::CollectionBuilder;
use hangar_api::{ApiError, ApiResult, Asset, AssetLookup, ItemId, Location, LocationId};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tracing::debug;

/// Weight of a vertex in the asset forest.
#[derive(Debug, Clone)]
pub(crate) enum TreeNode {
    Location(Location),
    Asset(Asset),
}

/// Edge from a container to an asset it directly holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Contains;

#[derive(Debug, Clone, Default)]
pub(crate) struct CollectionInner {
    pub(crate) topology: DiGraph<TreeNode, Contains>,

    /// Location ID -> root node
    pub(crate) location_index: HashMap<LocationId, NodeIndex>,

    /// Item ID -> asset node, for assets at any depth
    pub(crate) asset_index: HashMap<ItemId, NodeIndex>,

    /// Item ID -> ID of the location at the root of its tree
    pub(crate) root_locations: HashMap<ItemId, LocationId>,
}

/// A collection of asset trees, one per location.
#[derive(Debug, Clone, Default)]
pub struct AssetCollection {
    inner: Arc<CollectionInner>,
}

impl AssetCollection {
    /// Build a collection from assets and locations.
    ///
    /// Every location becomes a tree root, even when no asset is stored there.
    /// Assets whose chain of containers does not end at one of the given
    /// locations are left out. With duplicate IDs the last record wins.
    pub fn new(
        assets: impl IntoIterator<Item = Asset>,
        locations: impl IntoIterator<Item = Location>,
    ) -> Self {
        let mut builder = CollectionBuilder::new();
        for location in locations {
            builder.add_location(location);
        }

        // assets are taken out of the pool as they are placed in a tree
        let mut pool: HashMap<ItemId, Asset> =
            assets.into_iter().map(|a| (a.item_id, a)).collect();
        let mut by_container: HashMap<i64, Vec<ItemId>> = HashMap::new();
        for asset in pool.values() {
            by_container
                .entry(asset.location_id)
                .or_default()
                .push(asset.item_id);
        }

        // An ID that is both a location and an asset refers to the asset.
        let anchors: Vec<(LocationId, NodeIndex)> = builder
            .locations()
            .filter(|(id, _)| !pool.contains_key(id))
            .collect();

        let mut pending = VecDeque::new();
        for (location_id, location_idx) in anchors {
            for item_id in by_container.remove(&location_id).unwrap_or_default() {
                if let Some(asset) = pool.remove(&item_id) {
                    pending.push_back((item_id, builder.attach(location_idx, asset)));
                }
            }
        }

        while let Some((container_id, container_idx)) = pending.pop_front() {
            for item_id in by_container.remove(&container_id).unwrap_or_default() {
                if let Some(asset) = pool.remove(&item_id) {
                    pending.push_back((item_id, builder.attach(container_idx, asset)));
                }
            }
        }

        let collection = builder.build();
        debug!(
            locations = collection.location_count(),
            assets = collection.len(),
            orphaned = pool.len(),
            "built asset collection"
        );
        collection
    }

    pub(crate) fn from_inner(inner: CollectionInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    // ---- Lookups ----

    /// Root location node of an asset at any depth.
    pub fn parent_location(&self, item_id: ItemId) -> Option<LocationNode<'_>> {
        let location_id = self.inner.root_locations.get(&item_id)?;
        self.location(*location_id)
    }

    /// Node of a placed asset.
    pub fn asset(&self, item_id: ItemId) -> Option<AssetNode<'_>> {
        let idx = *self.inner.asset_index.get(&item_id)?;
        AssetNode::from_index(&self.inner, idx)
    }

    /// Like [`asset`](Self::asset), but reports a missing asset as an error.
    pub fn try_asset(&self, item_id: ItemId) -> ApiResult<AssetNode<'_>> {
        self.asset(item_id)
            .ok_or_else(|| ApiError::NotFound(format!("asset {item_id}")))
    }

    pub fn location(&self, location_id: LocationId) -> Option<LocationNode<'_>> {
        let idx = *self.inner.location_index.get(&location_id)?;
        LocationNode::from_index(&self.inner, idx)
    }

    /// Like [`location`](Self::location), but reports a missing location as an error.
    pub fn try_location(&self, location_id: LocationId) -> ApiResult<LocationNode<'_>> {
        self.location(location_id)
            .ok_or_else(|| ApiError::NotFound(format!("location {location_id}")))
    }

    /// All location nodes. Order is undefined.
    pub fn locations(&self) -> Vec<LocationNode<'_>> {
        self.inner
            .location_index
            .values()
            .filter_map(|&idx| LocationNode::from_index(&self.inner, idx))
            .collect()
    }

    pub fn location_count(&self) -> usize {
        self.inner.location_index.len()
    }

    /// Number of assets placed in a tree.
    pub fn len(&self) -> usize {
        self.inner.asset_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.asset_index.is_empty()
    }

    /// Consolidated item count of all locations, excluding items inside ships.
    pub fn item_count_filtered(&self) -> i64 {
        self.locations()
            .iter()
            .map(LocationNode::item_count_filtered)
            .sum()
    }
}

impl AssetLookup for AssetCollection {
    fn parent_location_id(&self, item_id: ItemId) -> Option<LocationId> {
        self.inner.root_locations.get(&item_id).copied()
    }

    fn location_ids(&self) -> Vec<LocationId> {
        self.inner.location_index.keys().copied().collect()
    }
}
