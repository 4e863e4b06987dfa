use serde::{Deserialize, Serialize};
use std::fmt;

/// Slot or bay an asset occupies inside its container.
///
/// Parsed from the flag strings of the game API. Numbered flags are only
/// recognized with a canonical slot number (`HiSlot3`, not `HiSlot03`).
/// Everything else is kept verbatim in `Other`, so every flag round-trips to
/// the same string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum LocationFlag {
    #[default]
    Hangar,
    AssetSafety,
    AutoFit,
    CapsuleerDeliveries,
    Cargo,
    CorpDeliveries,
    CorpSag(u8),
    DroneBay,
    FighterBay,
    FighterTube(u8),
    FleetHangar,
    FrigateEscapeBay,
    HiSlot(u8),
    Impounded,
    LoSlot(u8),
    MedSlot(u8),
    MobileDepotHold,
    MoonMaterialBay,
    OfficeFolder,
    QuafeBay,
    RigSlot(u8),
    ShipHangar,
    SpecializedFuelBay,
    /// Any other `Specialized...` hold; holds the part after the prefix.
    Specialized(String),
    StructureDeedBay,
    SubSystemSlot(u8),
    Other(String),
}

/// Coarse grouping of location flags used when summarizing asset trees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    AssetSafety,
    CargoBay,
    Deliveries,
    DroneBay,
    FighterBay,
    Fitting,
    FrigateEscapeBay,
    FuelBay,
    ItemHangar,
    ShipHangar,
    Other,
}

/// Prefixes of fitting slot flags.
const FITTING_PREFIXES: [&str; 5] = ["HiSlot", "MedSlot", "LoSlot", "RigSlot", "SubSystemSlot"];

/// Slot number of a numbered flag such as `HiSlot3`.
///
/// Only plain decimal digits without leading zeros are accepted, so the
/// number prints back as the same text.
fn slot(s: &str, prefix: &str) -> Option<u8> {
    let n = s.strip_prefix(prefix)?;
    if n.is_empty() || !n.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if n.len() > 1 && n.starts_with('0') {
        return None;
    }
    n.parse().ok()
}

impl From<&str> for LocationFlag {
    fn from(s: &str) -> Self {
        match s {
            "Hangar" => return LocationFlag::Hangar,
            "AssetSafety" => return LocationFlag::AssetSafety,
            "AutoFit" => return LocationFlag::AutoFit,
            "CapsuleerDeliveries" => return LocationFlag::CapsuleerDeliveries,
            "Cargo" => return LocationFlag::Cargo,
            "CorpDeliveries" => return LocationFlag::CorpDeliveries,
            "DroneBay" => return LocationFlag::DroneBay,
            "FighterBay" => return LocationFlag::FighterBay,
            "FleetHangar" => return LocationFlag::FleetHangar,
            "FrigateEscapeBay" => return LocationFlag::FrigateEscapeBay,
            "Impounded" => return LocationFlag::Impounded,
            "MobileDepotHold" => return LocationFlag::MobileDepotHold,
            "MoonMaterialBay" => return LocationFlag::MoonMaterialBay,
            "OfficeFolder" => return LocationFlag::OfficeFolder,
            "QuafeBay" => return LocationFlag::QuafeBay,
            "ShipHangar" => return LocationFlag::ShipHangar,
            "SpecializedFuelBay" => return LocationFlag::SpecializedFuelBay,
            "StructureDeedBay" => return LocationFlag::StructureDeedBay,
            _ => {}
        }

        if let Some(n) = slot(s, "HiSlot") {
            return LocationFlag::HiSlot(n);
        }
        if let Some(n) = slot(s, "MedSlot") {
            return LocationFlag::MedSlot(n);
        }
        if let Some(n) = slot(s, "LoSlot") {
            return LocationFlag::LoSlot(n);
        }
        if let Some(n) = slot(s, "RigSlot") {
            return LocationFlag::RigSlot(n);
        }
        if let Some(n) = slot(s, "SubSystemSlot") {
            return LocationFlag::SubSystemSlot(n);
        }
        if let Some(n) = slot(s, "FighterTube") {
            return LocationFlag::FighterTube(n);
        }
        if let Some(n) = slot(s, "CorpSAG") {
            return LocationFlag::CorpSag(n);
        }

        match s.strip_prefix("Specialized") {
            Some(hold) if !hold.is_empty() => LocationFlag::Specialized(hold.to_string()),
            _ => LocationFlag::Other(s.to_string()),
        }
    }
}

impl From<String> for LocationFlag {
    fn from(s: String) -> Self {
        LocationFlag::from(s.as_str())
    }
}

impl From<LocationFlag> for String {
    fn from(flag: LocationFlag) -> Self {
        flag.to_string()
    }
}

impl fmt::Display for LocationFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationFlag::Hangar => f.write_str("Hangar"),
            LocationFlag::AssetSafety => f.write_str("AssetSafety"),
            LocationFlag::AutoFit => f.write_str("AutoFit"),
            LocationFlag::CapsuleerDeliveries => f.write_str("CapsuleerDeliveries"),
            LocationFlag::Cargo => f.write_str("Cargo"),
            LocationFlag::CorpDeliveries => f.write_str("CorpDeliveries"),
            LocationFlag::CorpSag(n) => write!(f, "CorpSAG{n}"),
            LocationFlag::DroneBay => f.write_str("DroneBay"),
            LocationFlag::FighterBay => f.write_str("FighterBay"),
            LocationFlag::FighterTube(n) => write!(f, "FighterTube{n}"),
            LocationFlag::FleetHangar => f.write_str("FleetHangar"),
            LocationFlag::FrigateEscapeBay => f.write_str("FrigateEscapeBay"),
            LocationFlag::HiSlot(n) => write!(f, "HiSlot{n}"),
            LocationFlag::Impounded => f.write_str("Impounded"),
            LocationFlag::LoSlot(n) => write!(f, "LoSlot{n}"),
            LocationFlag::MedSlot(n) => write!(f, "MedSlot{n}"),
            LocationFlag::MobileDepotHold => f.write_str("MobileDepotHold"),
            LocationFlag::MoonMaterialBay => f.write_str("MoonMaterialBay"),
            LocationFlag::OfficeFolder => f.write_str("OfficeFolder"),
            LocationFlag::QuafeBay => f.write_str("QuafeBay"),
            LocationFlag::RigSlot(n) => write!(f, "RigSlot{n}"),
            LocationFlag::ShipHangar => f.write_str("ShipHangar"),
            LocationFlag::SpecializedFuelBay => f.write_str("SpecializedFuelBay"),
            LocationFlag::Specialized(hold) => write!(f, "Specialized{hold}"),
            LocationFlag::StructureDeedBay => f.write_str("StructureDeedBay"),
            LocationFlag::SubSystemSlot(n) => write!(f, "SubSystemSlot{n}"),
            LocationFlag::Other(s) => f.write_str(s),
        }
    }
}

impl LocationFlag {
    pub fn category(&self) -> NodeCategory {
        match self {
            LocationFlag::HiSlot(_)
            | LocationFlag::MedSlot(_)
            | LocationFlag::LoSlot(_)
            | LocationFlag::RigSlot(_)
            | LocationFlag::SubSystemSlot(_) => NodeCategory::Fitting,
            LocationFlag::DroneBay => NodeCategory::DroneBay,
            LocationFlag::FighterBay | LocationFlag::FighterTube(_) => NodeCategory::FighterBay,
            LocationFlag::SpecializedFuelBay => NodeCategory::FuelBay,
            LocationFlag::FrigateEscapeBay => NodeCategory::FrigateEscapeBay,
            LocationFlag::Cargo
            | LocationFlag::FleetHangar
            | LocationFlag::MobileDepotHold
            | LocationFlag::MoonMaterialBay
            | LocationFlag::QuafeBay
            | LocationFlag::StructureDeedBay
            | LocationFlag::Specialized(_) => NodeCategory::CargoBay,
            LocationFlag::ShipHangar => NodeCategory::ShipHangar,
            LocationFlag::Hangar | LocationFlag::CorpSag(_) => NodeCategory::ItemHangar,
            LocationFlag::AssetSafety => NodeCategory::AssetSafety,
            LocationFlag::CapsuleerDeliveries | LocationFlag::CorpDeliveries => {
                NodeCategory::Deliveries
            }
            LocationFlag::Other(s) => {
                if FITTING_PREFIXES.iter().any(|p| s.starts_with(p)) {
                    NodeCategory::Fitting
                } else if s.starts_with("FighterTube") {
                    NodeCategory::FighterBay
                } else {
                    NodeCategory::Other
                }
            }
            LocationFlag::AutoFit | LocationFlag::Impounded | LocationFlag::OfficeFolder => {
                NodeCategory::Other
            }
        }
    }

    pub fn is_fitted(&self) -> bool {
        self.category() == NodeCategory::Fitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slots() {
        assert_eq!(LocationFlag::from("HiSlot0"), LocationFlag::HiSlot(0));
        assert_eq!(LocationFlag::from("SubSystemSlot7"), LocationFlag::SubSystemSlot(7));
        assert_eq!(LocationFlag::from("FighterTube4"), LocationFlag::FighterTube(4));
        assert_eq!(LocationFlag::from("CorpSAG2"), LocationFlag::CorpSag(2));
        // no slot number
        assert_eq!(
            LocationFlag::from("HiSlot"),
            LocationFlag::Other("HiSlot".to_string())
        );
        assert!(LocationFlag::from("HiSlot").is_fitted());
    }

    #[test]
    fn test_odd_slot_numbers_keep_their_text() {
        for s in ["HiSlot05", "HiSlot+1", "HiSlot300", "MedSlot-1", "RigSlot00"] {
            let flag = LocationFlag::from(s);
            assert_eq!(flag, LocationFlag::Other(s.to_string()));
            assert_eq!(flag.to_string(), s);
            assert!(flag.is_fitted(), "{s} should count as fitted");
        }

        let tube = LocationFlag::from("FighterTube07");
        assert_eq!(tube.to_string(), "FighterTube07");
        assert_eq!(tube.category(), NodeCategory::FighterBay);

        let sag = LocationFlag::from("CorpSAG01");
        assert_eq!(sag.to_string(), "CorpSAG01");
    }

    #[test]
    fn test_parse_specialized_holds() {
        assert_eq!(
            LocationFlag::from("SpecializedFuelBay"),
            LocationFlag::SpecializedFuelBay
        );
        assert_eq!(
            LocationFlag::from("SpecializedOreHold"),
            LocationFlag::Specialized("OreHold".to_string())
        );
        assert_eq!(
            LocationFlag::from("Specialized"),
            LocationFlag::Other("Specialized".to_string())
        );
    }

    #[test]
    fn test_display_matches_api_string() {
        for s in [
            "Hangar",
            "Cargo",
            "HiSlot5",
            "HiSlot10",
            "HiSlot255",
            "CorpSAG1",
            "SpecializedGasHold",
            "SpecializedFuelBay",
            "Wardrobe",
        ] {
            assert_eq!(LocationFlag::from(s).to_string(), s);
        }
    }

    #[test]
    fn test_categories() {
        assert_eq!(LocationFlag::MedSlot(1).category(), NodeCategory::Fitting);
        assert_eq!(LocationFlag::FighterTube(0).category(), NodeCategory::FighterBay);
        assert_eq!(LocationFlag::SpecializedFuelBay.category(), NodeCategory::FuelBay);
        assert_eq!(
            LocationFlag::Specialized("OreHold".into()).category(),
            NodeCategory::CargoBay
        );
        assert_eq!(LocationFlag::CorpDeliveries.category(), NodeCategory::Deliveries);
        assert_eq!(LocationFlag::Hangar.category(), NodeCategory::ItemHangar);
        assert_eq!(LocationFlag::Other("Unlocked".into()).category(), NodeCategory::Other);
        assert!(LocationFlag::LoSlot(2).is_fitted());
        assert!(!LocationFlag::Cargo.is_fitted());
    }
}
