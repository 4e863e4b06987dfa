use super::{CollectionInner, TreeNode};
use hangar_api::{Asset, ItemId, Location, LocationId, NodeCategory};
use petgraph::Direction;
use petgraph::graph::NodeIndex;
use std::fmt;

/// Root of an asset tree, e.g. a station.
#[derive(Clone, Copy)]
pub struct LocationNode<'a> {
    inner: &'a CollectionInner,
    idx: NodeIndex,
    location: &'a Location,
}

/// An asset in a tree, e.g. a ship or a module fitted to it.
#[derive(Clone, Copy)]
pub struct AssetNode<'a> {
    inner: &'a CollectionInner,
    idx: NodeIndex,
    asset: &'a Asset,
}

impl<'a> LocationNode<'a> {
    pub(crate) fn from_index(inner: &'a CollectionInner, idx: NodeIndex) -> Option<Self> {
        match inner.topology.node_weight(idx)? {
            TreeNode::Location(location) => Some(Self {
                inner,
                idx,
                location,
            }),
            TreeNode::Asset(_) => None,
        }
    }

    pub fn location(&self) -> &'a Location {
        self.location
    }

    pub fn id(&self) -> LocationId {
        self.location.id
    }

    /// Assets stored directly at this location. Order is undefined.
    pub fn children(&self) -> Vec<AssetNode<'a>> {
        children_of(self.inner, self.idx)
    }

    /// All assets at this location, at any depth. Order is undefined.
    pub fn all(&self) -> Vec<AssetNode<'a>> {
        self.children().iter().flat_map(AssetNode::all).collect()
    }

    /// Number of leaf assets below this location.
    pub fn size(&self) -> usize {
        leaf_count(self.inner, self.idx)
    }

    /// Consolidated quantity of all assets at this location.
    pub fn item_count_any(&self) -> i64 {
        self.children().iter().map(AssetNode::item_count_any).sum()
    }

    /// Consolidated quantity excluding items inside ships, e.g. fittings.
    pub fn item_count_filtered(&self) -> i64 {
        self.children()
            .iter()
            .map(AssetNode::item_count_filtered)
            .sum()
    }
}

impl<'a> AssetNode<'a> {
    pub(crate) fn from_index(inner: &'a CollectionInner, idx: NodeIndex) -> Option<Self> {
        match inner.topology.node_weight(idx)? {
            TreeNode::Asset(asset) => Some(Self { inner, idx, asset }),
            TreeNode::Location(_) => None,
        }
    }

    pub fn asset(&self) -> &'a Asset {
        self.asset
    }

    pub fn item_id(&self) -> ItemId {
        self.asset.item_id
    }

    pub fn category(&self) -> NodeCategory {
        self.asset.category()
    }

    /// Assets directly inside this asset. Order is undefined.
    pub fn children(&self) -> Vec<AssetNode<'a>> {
        children_of(self.inner, self.idx)
    }

    /// The asset holding this one, or `None` for assets stored directly at a location.
    pub fn parent(&self) -> Option<AssetNode<'a>> {
        let parent = self
            .inner
            .topology
            .neighbors_directed(self.idx, Direction::Incoming)
            .next()?;
        AssetNode::from_index(self.inner, parent)
    }

    pub fn root_location(&self) -> Option<LocationNode<'a>> {
        let location_id = self.inner.root_locations.get(&self.asset.item_id)?;
        let idx = *self.inner.location_index.get(location_id)?;
        LocationNode::from_index(self.inner, idx)
    }

    /// This node and all nodes below it. Order is undefined.
    pub fn all(&self) -> Vec<AssetNode<'a>> {
        let mut nodes = Vec::new();
        let mut stack = vec![*self];
        while let Some(node) = stack.pop() {
            stack.extend(node.children());
            nodes.push(node);
        }
        nodes
    }

    /// Number of leaf assets below this asset. A leaf itself has size 0.
    pub fn size(&self) -> usize {
        leaf_count(self.inner, self.idx)
    }

    /// Consolidated quantity of this asset and everything inside it.
    pub fn item_count_any(&self) -> i64 {
        self.all()
            .iter()
            .map(|n| i64::from(n.asset.quantity))
            .sum()
    }

    /// Consolidated quantity of this sub tree excluding items inside ships,
    /// e.g. fittings or drones. An excluded asset excludes its content too.
    pub fn item_count_filtered(&self) -> i64 {
        let mut total = 0;
        let mut stack = vec![*self];
        while let Some(node) = stack.pop() {
            if node.asset.is_inside_ship() {
                continue;
            }
            total += i64::from(node.asset.quantity);
            stack.extend(node.children());
        }
        total
    }
}

fn children_of(inner: &CollectionInner, idx: NodeIndex) -> Vec<AssetNode<'_>> {
    inner
        .topology
        .neighbors_directed(idx, Direction::Outgoing)
        .filter_map(|child| AssetNode::from_index(inner, child))
        .collect()
}

fn leaf_count(inner: &CollectionInner, idx: NodeIndex) -> usize {
    let mut count = 0;
    let mut stack: Vec<NodeIndex> = inner
        .topology
        .neighbors_directed(idx, Direction::Outgoing)
        .collect();
    while let Some(current) = stack.pop() {
        let before = stack.len();
        stack.extend(inner.topology.neighbors_directed(current, Direction::Outgoing));
        if stack.len() == before {
            count += 1;
        }
    }
    count
}

impl PartialEq for LocationNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.inner, other.inner) && self.idx == other.idx
    }
}

impl Eq for LocationNode<'_> {}

impl PartialEq for AssetNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.inner, other.inner) && self.idx == other.idx
    }
}

impl Eq for AssetNode<'_> {}

impl fmt::Debug for LocationNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationNode")
            .field("id", &self.location.id)
            .field("name", &self.location.name)
            .finish()
    }
}

impl fmt::Debug for AssetNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetNode")
            .field("item_id", &self.asset.item_id)
            .field("location_id", &self.asset.location_id)
            .field("location_flag", &self.asset.location_flag)
            .finish()
    }
}
