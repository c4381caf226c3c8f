pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod selector;

pub use error::{ProteinError, Result};
pub use models::{FoodItem, SelectionResult};
