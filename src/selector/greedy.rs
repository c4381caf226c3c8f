use crate::models::{FoodItem, SelectionResult};

/// Accumulate ranked items until the protein target is met.
///
/// Walks the ranked sequence in order and accepts items while the running
/// protein total is still below `target`, stopping as soon as it meets or
/// exceeds it. The selection is therefore always a prefix of the input; no
/// item is skipped in favor of a later one. With items ranked by ascending
/// price per gram this is the classic greedy heuristic, which is cheap but
/// not guaranteed cost-minimal for indivisible items.
///
/// A non-positive target needs nothing, so it yields an empty selection with
/// `met = true`.
pub fn accumulate(ranked: Vec<FoodItem>, target: f64) -> SelectionResult {
    let mut result = SelectionResult::empty(target);

    for item in ranked {
        if result.total_protein >= target {
            break;
        }
        result.total_protein += item.protein;
        result.total_cost += item.price;
        result.selected.push(item);
    }

    result.met = result.total_protein >= target;
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    fn ranked_items() -> Vec<FoodItem> {
        // Already in ascending efficiency order: Tofu 125, Chicken 150, Egg 333.3
        vec![
            FoodItem::new("Tofu", 1000.0, 8.0, "Plant"),
            FoodItem::new("Chicken", 3000.0, 20.0, "Poultry"),
            FoodItem::new("Egg", 2000.0, 6.0, "Poultry"),
        ]
    }

    #[test]
    fn test_stops_at_first_item_reaching_target() {
        let result = accumulate(ranked_items(), 20.0);

        assert_eq!(result.selected_names(), ["Tofu", "Chicken"]);
        assert_float_absolute_eq!(result.total_protein, 28.0, 1e-9);
        assert_float_absolute_eq!(result.total_cost, 4000.0, 1e-9);
        assert!(result.met);
    }

    #[test]
    fn test_unreachable_target_takes_everything() {
        let result = accumulate(ranked_items(), 100.0);

        assert_eq!(result.len(), 3);
        assert_float_absolute_eq!(result.total_protein, 34.0, 1e-9);
        assert!(!result.met);
    }

    #[test]
    fn test_zero_target_selects_nothing() {
        let result = accumulate(ranked_items(), 0.0);

        assert!(result.is_empty());
        assert!(result.met);
        assert_eq!(result.total_protein, 0.0);
        assert_eq!(result.total_cost, 0.0);
    }

    #[test]
    fn test_negative_target_selects_nothing() {
        let result = accumulate(ranked_items(), -5.0);

        assert!(result.is_empty());
        assert!(result.met);
    }

    #[test]
    fn test_empty_sequence_with_positive_target() {
        let result = accumulate(Vec::new(), 70.0);

        assert!(result.is_empty());
        assert!(!result.met);
        assert_eq!(result.target_protein, 70.0);
    }

    #[test]
    fn test_selection_is_strict_prefix() {
        let items = ranked_items();
        let result = accumulate(items.clone(), 7.0);

        // Tofu alone (8g) already covers 7g
        assert_eq!(result.len(), 1);
        for (picked, expected) in result.selected.iter().zip(items.iter()) {
            assert_eq!(picked.name, expected.name);
        }
    }

    #[test]
    fn test_totals_match_selected_fields() {
        let result = accumulate(ranked_items(), 30.0);

        let protein_sum: f64 = result.selected.iter().map(|i| i.protein).sum();
        let cost_sum: f64 = result.selected.iter().map(|i| i.price).sum();
        assert_float_absolute_eq!(result.total_protein, protein_sum, 1e-9);
        assert_float_absolute_eq!(result.total_cost, cost_sum, 1e-9);
    }
}
