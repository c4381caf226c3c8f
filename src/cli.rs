use clap::{Parser, Subcommand};

/// ProteinBudget — picks the cheapest combination of foods that covers a daily protein target.
#[derive(Parser, Debug)]
#[command(name = "protein_budget")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog file (CSV or JSON).
    #[arg(short, long, default_value = "protein_catalog.csv")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the greedy selection against a protein target.
    Select {
        /// Daily protein requirement in grams. Prompted for when omitted.
        #[arg(short, long)]
        target: Option<f64>,

        /// Restrict the catalog to one category. Prompted for when omitted.
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show the catalog and its attribute documentation.
    Dataset,

    /// Export the catalog to another file (CSV or JSON by extension).
    Export {
        /// Destination path.
        #[arg(short, long)]
        output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Select {
            target: None,
            category: None,
        }
    }
}
