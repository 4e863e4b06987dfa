use super::asset::LocationId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A location that can anchor an asset tree, e.g. a station or a structure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Location {
    pub id: LocationId,
    #[serde(default)]
    pub name: String,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Name if known, else the location id.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("Location #{}", self.id)
        } else {
            self.name.clone()
        }
    }
}
