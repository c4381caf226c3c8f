use crate::models::FoodItem;

/// The outcome of one greedy selection run.
///
/// `selected` keeps acceptance order, which is always a prefix of the ranked
/// sequence the accumulator consumed. `met` records whether the running
/// protein total reached `target_protein` before the sequence ran out.
#[derive(Debug, Clone)]
pub struct SelectionResult {
    pub selected: Vec<FoodItem>,
    pub total_protein: f64,
    pub total_cost: f64,
    pub target_protein: f64,
    pub met: bool,
}

impl SelectionResult {
    /// An empty result for a given target. `met` is trivially true for a
    /// non-positive target (nothing is needed to satisfy it).
    pub fn empty(target_protein: f64) -> Self {
        Self {
            selected: Vec::new(),
            total_protein: 0.0,
            total_cost: 0.0,
            target_protein,
            met: target_protein <= 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Names of the selected items in acceptance order.
    pub fn selected_names(&self) -> Vec<&str> {
        self.selected.iter().map(|item| item.name.as_str()).collect()
    }

    /// Set-notation rendering of the solution, e.g. `{ Tofu, Chicken }`.
    pub fn set_notation(&self) -> String {
        if self.selected.is_empty() {
            return "{ }".to_string();
        }
        format!("{{ {} }}", self.selected_names().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_trivially_met_for_zero_target() {
        let result = SelectionResult::empty(0.0);
        assert!(result.met);
        assert!(result.is_empty());
        assert_eq!(result.total_protein, 0.0);
        assert_eq!(result.total_cost, 0.0);
    }

    #[test]
    fn test_empty_result_unmet_for_positive_target() {
        let result = SelectionResult::empty(70.0);
        assert!(!result.met);
    }

    #[test]
    fn test_set_notation() {
        let mut result = SelectionResult::empty(20.0);
        assert_eq!(result.set_notation(), "{ }");

        result.selected.push(FoodItem::new("Tofu", 1000.0, 8.0, "Plant"));
        result
            .selected
            .push(FoodItem::new("Chicken", 3000.0, 20.0, "Poultry"));
        assert_eq!(result.set_notation(), "{ Tofu, Chicken }");
    }
}
