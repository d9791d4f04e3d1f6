use serde::{Deserialize, Serialize};

use crate::models::macros::Macros;

/// Grams of a food together with the macros they deliver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedPortion {
    /// Multiple of 5.
    pub grams: f64,
    pub macros: Macros,
}

/// How far a confirmed swap propagates through a multi-day plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapScope {
    /// Only the entry the swap was opened from.
    #[default]
    SingleEntry,
    /// Every day holding the same food under a meal of the same name.
    AllDays,
}

/// Identifies the plan entry being replaced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealSlot {
    pub meal_day: String,
    pub meal_name: String,
    /// Position of the entry inside the meal, when known.
    #[serde(default)]
    pub entry_index: Option<usize>,
}

impl MealSlot {
    pub fn new(meal_day: &str, meal_name: &str) -> Self {
        Self {
            meal_day: meal_day.to_string(),
            meal_name: meal_name.to_string(),
            entry_index: None,
        }
    }

    pub fn with_entry(mut self, index: usize) -> Self {
        self.entry_index = Some(index);
        self
    }
}

/// A confirmed substitution, ready for the caller to persist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapDecision {
    pub food_id: String,
    pub food_name: String,
    pub grams: f64,
    pub macros: Macros,
    pub scope: SwapScope,
    pub meal_day: String,
    pub meal_name: String,
    /// Food the swap replaces; plan entries are matched on it.
    pub replaced_food_id: String,
    /// Entry position inside the meal for a single-entry swap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_index: Option<usize>,
}

impl SwapDecision {
    pub fn applies_to_all_days(&self) -> bool {
        self.scope == SwapScope::AllDays
    }
}
