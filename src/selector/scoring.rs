use crate::error::{ProteinError, Result};
use crate::models::FoodItem;

/// Score every item with its price-per-gram-of-protein efficiency.
///
/// Fails on the first item with non-positive protein rather than letting a
/// division by zero poison the ordering downstream. Callers that want to
/// tolerate such rows must filter them out before scoring.
pub fn score_efficiency(items: &mut [FoodItem]) -> Result<()> {
    for item in items.iter() {
        if !item.is_scorable() {
            return Err(ProteinError::InvalidItem {
                name: item.name.clone(),
                protein: item.protein,
            });
        }
    }

    for item in items.iter_mut() {
        item.efficiency = Some(item.price / item.protein);
    }

    Ok(())
}
