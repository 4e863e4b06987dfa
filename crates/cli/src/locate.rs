use crate::view::LocateRow;
use hangar_api::{ApiError, ItemId, UNKNOWN_LOCATION_LABEL};
use hangar_core::AssetCollection;
use std::path::PathBuf;
use tabled::{Table, settings::Style};

pub fn run(path: PathBuf, item_ids: Vec<i64>) -> Result<(), Box<dyn std::error::Error>> {
    let collection = crate::load(path)?;
    let rows = locate_rows(&collection, &item_ids)?;

    println!("{}", Table::new(rows).with(Style::psql()));
    Ok(())
}

/// One row per requested item. Unknown items are listed with a placeholder
/// location; IDs that no item can have are rejected.
fn locate_rows(
    collection: &AssetCollection,
    item_ids: &[ItemId],
) -> hangar_core::Result<Vec<LocateRow>> {
    item_ids
        .iter()
        .map(|&item_id| {
            if item_id <= 0 {
                return Err(ApiError::InvalidArgument(format!(
                    "item id must be positive, got {item_id}"
                ))
                .into());
            }
            Ok(LocateRow {
                item_id,
                name: collection
                    .asset(item_id)
                    .map(|n| n.asset().display_name())
                    .unwrap_or_else(|| "-".to_string()),
                location: collection
                    .parent_location(item_id)
                    .map(|l| l.location().display_name())
                    .unwrap_or_else(|| UNKNOWN_LOCATION_LABEL.to_string()),
            })
        })
        .collect()
}
