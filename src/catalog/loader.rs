use std::fs;
use std::path::Path;

use crate::error::{ProteinError, Result};
use crate::models::FoodItem;

/// Load a catalog from a CSV or JSON file, chosen by extension.
///
/// CSV files must carry a header row with `Name`, `Price`, `Protein` and
/// `Category` columns; extra columns such as a `No` row-id are ignored.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let path = path.as_ref();
    match extension(path) {
        Some("csv") => load_csv(path),
        Some("json") => load_json(path),
        other => Err(ProteinError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

fn load_csv(path: &Path) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut items = Vec::new();
    for record in reader.deserialize() {
        let item: FoodItem = record?;
        items.push(item);
    }
    Ok(items)
}

fn load_json(path: &Path) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<FoodItem> = serde_json::from_str(&content)?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_load_csv_ignores_row_id_column() {
        let csv = "No,Name,Price,Protein,Category\n\
                   1,Egg,2000,6,Poultry\n\
                   2,Tofu,1000,8,Plant\n";

        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let items = load_catalog(file.path()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Egg");
        assert_eq!(items[1].price, 1000.0);
        assert!(items.iter().all(|item| item.efficiency.is_none()));
    }

    #[test]
    fn test_load_json() {
        let json = r#"[
            {"Name": "Chicken", "Price": 3000, "Protein": 20, "Category": "Poultry"}
        ]"#;

        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let items = load_catalog(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].protein, 20.0);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, ProteinError::UnsupportedFormat(_)));
    }
}
