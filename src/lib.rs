pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;
pub mod workflow;

pub use catalog::NutritionCatalog;
pub use engine::SubstitutionEngine;
pub use error::{Result, SwapError};
pub use models::{FoodItem, Macros};
pub use workflow::SwapSession;
