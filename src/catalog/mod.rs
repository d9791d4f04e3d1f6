mod data;
mod store;

pub use data::{builtin_foods, BUILTIN_FOOD_COUNT};
pub use store::NutritionCatalog;
