use hangar_core::Snapshot;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = Snapshot::json_schema()?;
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
