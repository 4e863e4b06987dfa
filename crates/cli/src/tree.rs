use crate::view::render_location;
use hangar_core::{AssetCollection, LocationNode};
use std::path::PathBuf;
use tracing::info;

pub fn run(path: PathBuf, location: Option<i64>) -> Result<(), Box<dyn std::error::Error>> {
    info!("Building asset trees from: {}...", path.display());
    let collection = crate::load(path)?;

    let locations = select_locations(&collection, location)?;
    if locations.is_empty() {
        println!("No locations found.");
    }
    for location in &locations {
        println!("{}", render_location(location));
    }
    Ok(())
}

/// Locations to print, ordered by ID. A requested location must exist.
fn select_locations(
    collection: &AssetCollection,
    location: Option<i64>,
) -> hangar_core::Result<Vec<LocationNode<'_>>> {
    let mut locations = match location {
        Some(id) => vec![collection.try_location(id)?],
        None => collection.locations(),
    };
    locations.sort_by_key(|l| l.id());
    Ok(locations)
}
