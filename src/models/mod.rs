pub mod food;
pub mod macros;
pub mod plan;
pub mod swap;

pub use food::{Category, FoodItem};
pub use macros::{MacroKind, MacroTarget, Macros};
pub use plan::{Meal, MealPlan, PlanDay, PlanEntry};
pub use swap::{ComputedPortion, MealSlot, SwapDecision, SwapScope};
