pub mod prompts;
pub mod render;

pub use prompts::{prompt_category, prompt_target, resolve_category, validate_target};
pub use render::{display_catalog_table, display_dataset_info, display_selection, display_summary};
