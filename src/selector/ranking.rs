use std::cmp::Ordering;

use crate::models::FoodItem;

/// Order items ascending by efficiency (cheapest protein first).
///
/// Uses the standard library's stable sort, so items with equal efficiency
/// keep their input order and repeated runs over the same catalog produce the
/// same ranking. Items must already be scored; an unscored item (no
/// efficiency) sorts ahead of every scored one, which never happens when the
/// pipeline runs the stages in sequence.
pub fn rank_by_efficiency(mut items: Vec<FoodItem>) -> Vec<FoodItem> {
    items.sort_by(|a, b| {
        a.efficiency
            .partial_cmp(&b.efficiency)
            .unwrap_or(Ordering::Equal)
    });
    items
}
