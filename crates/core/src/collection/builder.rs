//! Mutable construction of an `AssetCollection`
//!
//! The builder only grows the forest. `build()` derives the root location
//! lookup and freezes the result.

use super::{AssetCollection, CollectionInner, Contains, TreeNode};
use hangar_api::{Asset, ItemId, Location, LocationId};
use petgraph::Direction;
use petgraph::graph::NodeIndex;
use petgraph::visit::Dfs;
use std::collections::HashMap;

pub(crate) struct CollectionBuilder {
    inner: CollectionInner,
}

impl CollectionBuilder {
    pub(crate) fn new() -> Self {
        Self {
            inner: CollectionInner::default(),
        }
    }

    /// Add a location root. A repeated ID replaces the stored location.
    pub(crate) fn add_location(&mut self, location: Location) -> NodeIndex {
        if let Some(&idx) = self.inner.location_index.get(&location.id) {
            self.inner.topology[idx] = TreeNode::Location(location);
            idx
        } else {
            let id = location.id;
            let idx = self.inner.topology.add_node(TreeNode::Location(location));
            self.inner.location_index.insert(id, idx);
            idx
        }
    }

    pub(crate) fn locations(&self) -> impl Iterator<Item = (LocationId, NodeIndex)> + '_ {
        self.inner
            .location_index
            .iter()
            .map(|(&id, &idx)| (id, idx))
    }

    /// Add an asset as a child of `parent`, which is a location or asset node.
    pub(crate) fn attach(&mut self, parent: NodeIndex, asset: Asset) -> NodeIndex {
        let item_id = asset.item_id;
        let idx = self.inner.topology.add_node(TreeNode::Asset(asset));
        self.inner.topology.add_edge(parent, idx, Contains);
        self.inner.asset_index.insert(item_id, idx);
        idx
    }

    pub(crate) fn build(mut self) -> AssetCollection {
        self.inner.root_locations = gather_root_locations(&self.inner);
        AssetCollection::from_inner(self.inner)
    }
}

/// Maps every asset below a location, at any depth, to that location's ID.
fn gather_root_locations(inner: &CollectionInner) -> HashMap<ItemId, LocationId> {
    let mut lookup = HashMap::with_capacity(inner.asset_index.len());
    for (&location_id, &location_idx) in &inner.location_index {
        for top in inner
            .topology
            .neighbors_directed(location_idx, Direction::Outgoing)
        {
            let mut dfs = Dfs::new(&inner.topology, top);
            while let Some(idx) = dfs.next(&inner.topology) {
                if let TreeNode::Asset(asset) = &inner.topology[idx] {
                    lookup.insert(asset.item_id, location_id);
                }
            }
        }
    }
    lookup
}
