pub mod greedy;
pub mod ranking;
pub mod scoring;

pub use greedy::accumulate;
pub use ranking::rank_by_efficiency;
pub use scoring::score_efficiency;

use crate::error::Result;
use crate::models::{FoodItem, SelectionResult};

/// Intermediate sequences of one pipeline run, for rendering stage tables.
#[derive(Debug, Clone)]
pub struct SelectionTrace {
    /// The working copy after efficiency scoring, still in catalog order.
    pub scored: Vec<FoodItem>,

    /// The scored items ranked ascending by efficiency.
    pub ranked: Vec<FoodItem>,

    /// The greedy selection taken from the ranked sequence.
    pub result: SelectionResult,
}

/// Run the full pipeline and keep the intermediate stages.
///
/// Takes a fresh working copy of the catalog (optionally narrowed to one
/// category by exact match), then scores, ranks, and accumulates. Each
/// invocation owns its copy, so repeated or parallel calls over the same
/// catalog never alias state. Any stage error aborts before the next stage.
pub fn run_traced(
    catalog: &[FoodItem],
    target: f64,
    category: Option<&str>,
) -> Result<SelectionTrace> {
    let mut working: Vec<FoodItem> = match category {
        Some(cat) => catalog
            .iter()
            .filter(|item| item.category == cat)
            .cloned()
            .collect(),
        None => catalog.to_vec(),
    };

    score_efficiency(&mut working)?;
    let scored = working.clone();

    let ranked = rank_by_efficiency(working);
    let result = accumulate(ranked.clone(), target);

    Ok(SelectionTrace {
        scored,
        ranked,
        result,
    })
}

/// Run the full pipeline, returning only the final selection.
pub fn run_greedy_selection(
    catalog: &[FoodItem],
    target: f64,
    category: Option<&str>,
) -> Result<SelectionResult> {
    Ok(run_traced(catalog, target, category)?.result)
}
