use std::path::Path;

use clap::Parser;

use protein_budget_rs::catalog::{export_catalog, load_catalog, Catalog};
use protein_budget_rs::cli::{Cli, Command};
use protein_budget_rs::error::Result;
use protein_budget_rs::interface::{
    display_catalog_table, display_dataset_info, display_selection, display_summary,
    prompt_category, prompt_target, resolve_category, validate_target,
};
use protein_budget_rs::models::FoodItem;
use protein_budget_rs::selector::run_traced;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Select { target, category } => cmd_select(&cli.file, target, category),
        Command::Dataset => cmd_dataset(&cli.file),
        Command::Export { output } => cmd_export(&cli.file, &output),
    }
}

fn load(file_path: &str) -> Result<Option<Catalog>> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", file_path);
        eprintln!("Provide one with --file (CSV or JSON).");
        return Ok(None);
    }

    let items = load_catalog(path)?;
    Ok(Some(Catalog::new(items)))
}

/// Run the three-stage selection and show every stage, like the dashboard the
/// tool replaces.
fn cmd_select(file_path: &str, target: Option<f64>, category: Option<String>) -> Result<()> {
    let Some(catalog) = load(file_path)? else {
        return Ok(());
    };

    if catalog.is_empty() {
        println!("The catalog has no items.");
        return Ok(());
    }

    println!("Loaded {} items", catalog.len());

    let categories = catalog.categories();
    let category = match category {
        Some(input) => Some(resolve_category(&input, &categories)?),
        None => prompt_category(&categories)?,
    };

    let target = match target {
        Some(value) => validate_target(value)?,
        None => prompt_target()?,
    };

    // Rows the scorer would reject are dropped here, loudly, so one bad row
    // does not abort the whole run.
    let working: Vec<FoodItem> = match category.as_deref() {
        Some(cat) => catalog.filtered(cat),
        None => catalog.working_copy(),
    };
    let (usable, rejected): (Vec<FoodItem>, Vec<FoodItem>) =
        working.into_iter().partition(|item| item.is_scorable());

    for item in &rejected {
        println!("Skipping '{}': protein must be positive", item.name);
    }

    if usable.is_empty() {
        println!("No usable items in this category.");
        return Ok(());
    }

    let trace = run_traced(&usable, target, None)?;

    println!();
    println!("=== Stage 1: Price efficiency (price / protein) ===");
    display_catalog_table(&trace.scored, "Scored catalog");

    println!("=== Stage 2: Ranked by price per gram (ascending) ===");
    display_catalog_table(&trace.ranked, "Ranked catalog");

    display_selection(&trace.result);
    display_summary(&trace.result, category.as_deref());

    Ok(())
}

/// Show the raw catalog with its attribute documentation.
fn cmd_dataset(file_path: &str) -> Result<()> {
    let Some(catalog) = load(file_path)? else {
        return Ok(());
    };

    display_dataset_info();
    display_catalog_table(catalog.items(), "Catalog");

    Ok(())
}

/// Export the catalog to another file (CSV or JSON by extension).
fn cmd_export(file_path: &str, output: &str) -> Result<()> {
    let Some(catalog) = load(file_path)? else {
        return Ok(());
    };

    export_catalog(output, catalog.items())?;
    println!("Exported {} items to {}", catalog.len(), output);

    Ok(())
}
