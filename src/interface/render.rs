use crate::models::{FoodItem, SelectionResult};

/// Print a catalog table with aligned columns.
///
/// The efficiency column only appears once at least one item carries the
/// derived value, so the raw dataset view stays uncluttered.
pub fn display_catalog_table(items: &[FoodItem], title: &str) {
    if items.is_empty() {
        println!("{title}: (none)");
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    let name_width = items
        .iter()
        .map(|item| item.name.len())
        .max()
        .unwrap_or(10)
        .max(4);
    let category_width = items
        .iter()
        .map(|item| item.category.len())
        .max()
        .unwrap_or(8)
        .max(8);
    let show_efficiency = items.iter().any(|item| item.efficiency.is_some());

    if show_efficiency {
        println!(
            "  {:<name_width$}  {:>10}  {:>9}  {:<category_width$}  {:>12}",
            "Name", "Price", "Protein", "Category", "Price/gram"
        );
    } else {
        println!(
            "  {:<name_width$}  {:>10}  {:>9}  {:<category_width$}",
            "Name", "Price", "Protein", "Category"
        );
    }

    for item in items {
        match item.efficiency {
            Some(efficiency) if show_efficiency => println!(
                "  {:<name_width$}  {:>10.0}  {:>9.1}  {:<category_width$}  {:>12.2}",
                item.name, item.price, item.protein, item.category, efficiency
            ),
            _ => println!(
                "  {:<name_width$}  {:>10.0}  {:>9.1}  {:<category_width$}",
                item.name, item.price, item.protein, item.category
            ),
        }
    }

    println!();
}

/// Print the selected subset, its set notation, and a feasibility warning when
/// the target could not be reached.
pub fn display_selection(result: &SelectionResult) {
    println!("=== Stage 3: Greedy selection ===");

    if result.is_empty() {
        if result.met {
            println!();
            println!("Nothing to select: the target is already covered.");
            println!();
        } else {
            println!();
            println!("No combination meets the protein requirement.");
            println!();
        }
        return;
    }

    display_catalog_table(&result.selected, "Selected items");
    println!("Solution set = {}", result.set_notation());

    if !result.met {
        println!();
        println!(
            "Warning: the full catalog only provides {:.2} g of the {:.0} g required.",
            result.total_protein, result.target_protein
        );
    }

    println!();
}

/// Print the run summary: active category, target, and totals.
pub fn display_summary(result: &SelectionResult, category: Option<&str>) {
    println!("--- Summary ---");
    println!("Active category: {}", category.unwrap_or("All"));
    println!("Protein target:  {:.0} g", result.target_protein);
    println!("Total protein:   {:.2} g", result.total_protein);
    println!("Total cost:      {:.0}", result.total_cost);
    println!(
        "Target met:      {}",
        if result.met { "yes" } else { "no" }
    );
    println!();
}

/// Print the dataset attribute documentation shown by the `dataset` command.
pub fn display_dataset_info() {
    println!("Catalog attributes:");
    println!("  Protein  - grams of protein per 100 g of the food");
    println!("  Price    - price per 100 g of the food");
    println!("  Category - kind of protein source");
}
