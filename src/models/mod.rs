mod food;
mod selection;

pub use food::FoodItem;
pub use selection::SelectionResult;
