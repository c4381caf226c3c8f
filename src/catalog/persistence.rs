use std::fs;
use std::path::Path;

use crate::error::{ProteinError, Result};
use crate::models::FoodItem;

/// Write the catalog to a CSV or JSON file, chosen by extension.
pub fn export_catalog<P: AsRef<Path>>(path: P, items: &[FoodItem]) -> Result<()> {
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => export_csv(path, items),
        Some("json") => export_json(path, items),
        other => Err(ProteinError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn export_csv(path: &Path, items: &[FoodItem]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for item in items {
        writer.serialize(item)?;
    }
    writer.flush()?;
    Ok(())
}

fn export_json(path: &Path, items: &[FoodItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}
