use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{ProteinError, Result};

/// Advisory daily protein range in grams. Values outside it are accepted with
/// a warning; the selection pipeline itself never enforces a range.
pub const TARGET_MIN: f64 = 10.0;
pub const TARGET_MAX: f64 = 200.0;

/// Validate a protein target supplied on the command line or via prompt.
///
/// Rejects non-finite values; anything else (including zero and negative,
/// which trivially need no food) is passed through. Out-of-range values just
/// get a warning printed.
pub fn validate_target(target: f64) -> Result<f64> {
    if !target.is_finite() {
        return Err(ProteinError::InvalidTarget(format!(
            "{target} is not a usable number"
        )));
    }

    if target > 0.0 && !(TARGET_MIN..=TARGET_MAX).contains(&target) {
        println!(
            "Note: {target} g is outside the usual daily range of {TARGET_MIN:.0}-{TARGET_MAX:.0} g."
        );
    }

    Ok(target)
}

/// Prompt for the daily protein requirement in grams.
pub fn prompt_target() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Daily protein requirement (grams)")
        .default("70".to_string())
        .interact_text()?;

    let target: f64 = input
        .trim()
        .parse()
        .map_err(|_| ProteinError::InvalidTarget(format!("'{}' is not a number", input.trim())))?;

    validate_target(target)
}

/// Prompt for a category, with "All" as the first option.
///
/// Returns `None` when the whole catalog should be used.
pub fn prompt_category(categories: &[String]) -> Result<Option<String>> {
    if categories.is_empty() {
        return Ok(None);
    }

    let mut options = vec!["All".to_string()];
    options.extend(categories.iter().cloned());

    let selection = Select::new()
        .with_prompt("Protein source category")
        .items(&options)
        .default(0)
        .interact()?;

    if selection == 0 {
        Ok(None)
    } else {
        Ok(Some(options[selection].clone()))
    }
}

/// Resolve a category name given on the command line against the known ones.
///
/// Tries an exact match (case-insensitive) first, then falls back to fuzzy
/// matching with a confirmation prompt, so `--category pultry` still finds
/// Poultry.
pub fn resolve_category(input: &str, categories: &[String]) -> Result<String> {
    let needle = input.trim().to_lowercase();

    if let Some(exact) = categories.iter().find(|c| c.to_lowercase() == needle) {
        return Ok(exact.clone());
    }

    let mut candidates: Vec<(&String, f64)> = categories
        .iter()
        .map(|c| (c, jaro_winkler(&c.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    match candidates.first() {
        Some((best, _)) => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{best}'?"))
                .default(true)
                .interact()?;

            if confirm {
                Ok((*best).clone())
            } else {
                Err(ProteinError::CategoryNotFound(input.to_string()))
            }
        }
        None => Err(ProteinError::CategoryNotFound(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_target_accepts_sane_values() {
        assert_eq!(validate_target(70.0).unwrap(), 70.0);
        assert_eq!(validate_target(0.0).unwrap(), 0.0);
        assert_eq!(validate_target(-3.0).unwrap(), -3.0);
        assert_eq!(validate_target(500.0).unwrap(), 500.0);
    }

    #[test]
    fn test_validate_target_rejects_non_finite() {
        assert!(validate_target(f64::NAN).is_err());
        assert!(validate_target(f64::INFINITY).is_err());
    }
}
