use super::flag::{LocationFlag, NodeCategory};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Unique identifier of an asset item.
pub type ItemId = i64;

/// Unique identifier of a location (station, structure, solar system).
pub type LocationId = i64;

/// A single asset as reported by the game API.
///
/// `location_id` is the id of whatever currently holds the asset: either
/// another asset's `item_id` (e.g. a ship holding a module) or a location.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Asset {
    pub item_id: ItemId,
    pub location_id: i64,
    #[serde(default)]
    #[schemars(with = "String")]
    pub location_flag: LocationFlag,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default)]
    pub is_singleton: bool,
}

fn default_quantity() -> i32 {
    1
}

impl Asset {
    /// Create an asset in a hangar with quantity 1.
    pub fn new(item_id: ItemId, location_id: i64) -> Self {
        Self {
            item_id,
            location_id,
            location_flag: LocationFlag::default(),
            quantity: default_quantity(),
            name: None,
            type_name: None,
            is_singleton: false,
        }
    }

    pub fn with_flag(mut self, flag: LocationFlag) -> Self {
        self.location_flag = flag;
        self
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn category(&self) -> NodeCategory {
        self.location_flag.category()
    }

    /// Custom name if set, else the type name, else the item id.
    pub fn display_name(&self) -> String {
        match (&self.name, &self.type_name) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(type_name)) if !type_name.is_empty() => type_name.clone(),
            _ => format!("#{}", self.item_id),
        }
    }

    /// Reports whether this asset is stored inside a ship rather than loose in
    /// a hangar: fitted modules and the content of drone, fighter, fuel,
    /// frigate escape and cargo bays.
    pub fn is_inside_ship(&self) -> bool {
        matches!(
            self.category(),
            NodeCategory::Fitting
                | NodeCategory::DroneBay
                | NodeCategory::FighterBay
                | NodeCategory::FuelBay
                | NodeCategory::FrigateEscapeBay
                | NodeCategory::CargoBay
        )
    }
}
