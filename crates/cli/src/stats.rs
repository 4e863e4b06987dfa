use hangar_core::Snapshot;
use std::path::PathBuf;
use tracing::info;

pub fn run(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = Snapshot::load(&path)?;
    snapshot.validate()?;
    let collection = snapshot.build();

    info!("Snapshot: {}", path.display());
    println!("Locations:        {}", collection.location_count());
    println!("Placed assets:    {}", collection.len());
    println!("Orphaned assets:  {}", snapshot.orphan_count(&collection));
    println!("Items (filtered): {}", collection.item_count_filtered());
    Ok(())
}
