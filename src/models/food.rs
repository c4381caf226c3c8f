use serde::{Deserialize, Serialize};

/// One catalog entry: a protein source with its price per reference serving.
///
/// `price` is in currency units and `protein` in grams, both per 100 g of the
/// food. `efficiency` (price per gram of protein) is `None` until the scoring
/// stage populates it and is never rewritten afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Price")]
    pub price: f64,

    #[serde(rename = "Protein")]
    pub protein: f64,

    #[serde(rename = "Category", default)]
    pub category: String,

    #[serde(rename = "Efficiency", default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<f64>,
}

impl FoodItem {
    pub fn new(name: &str, price: f64, protein: f64, category: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            protein,
            category: category.to_string(),
            efficiency: None,
        }
    }

    /// Basic validation: finite, non-negative price and finite protein.
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0 && self.protein.is_finite()
    }

    /// Whether the item can be scored at all (protein strictly positive).
    #[inline]
    pub fn is_scorable(&self) -> bool {
        self.protein > 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{}: {} per 100g, {}g protein, category {}",
            self.name, self.price, self.protein, self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> FoodItem {
        FoodItem::new("Tofu", 1000.0, 8.0, "Plant")
    }

    #[test]
    fn test_efficiency_absent_before_scoring() {
        let item = sample_item();
        assert!(item.efficiency.is_none());
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_item().is_valid());

        let mut negative_price = sample_item();
        negative_price.price = -1.0;
        assert!(!negative_price.is_valid());
    }

    #[test]
    fn test_is_scorable() {
        assert!(sample_item().is_scorable());

        let mut zero_protein = sample_item();
        zero_protein.protein = 0.0;
        assert!(!zero_protein.is_scorable());
    }

    #[test]
    fn test_serde_column_names() {
        let json = serde_json::to_string(&sample_item()).unwrap();
        assert!(json.contains("\"Name\""));
        assert!(json.contains("\"Price\""));
        assert!(json.contains("\"Protein\""));
        assert!(json.contains("\"Category\""));
        // Unscored items omit the derived column entirely
        assert!(!json.contains("Efficiency"));
    }
}
