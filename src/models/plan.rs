use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::macros::Macros;
use crate::models::swap::{SwapDecision, SwapScope};

/// A single food line inside a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    /// Catalog id; entries typed in by hand may have none.
    #[serde(default)]
    pub food_id: Option<String>,

    pub food_name: String,

    pub grams: f64,

    pub macros: Macros,
}

impl PlanEntry {
    pub fn new(food_id: &str, food_name: &str, grams: f64, macros: Macros) -> Self {
        Self {
            food_id: Some(food_id.to_string()),
            food_name: food_name.to_string(),
            grams,
            macros,
        }
    }

    fn from_decision(decision: &SwapDecision) -> Self {
        Self::new(
            &decision.food_id,
            &decision.food_name,
            decision.grams,
            decision.macros,
        )
    }

    fn matches_food(&self, food_id: &str) -> bool {
        self.food_id.as_deref() == Some(food_id)
    }
}

/// A named meal slot ("Colazione", "Pranzo", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,

    #[serde(default)]
    pub entries: Vec<PlanEntry>,
}

impl Meal {
    /// Summed macros; calories to integer, the rest to one decimal.
    pub fn totals(&self) -> Macros {
        self.entries.iter().map(|e| e.macros).sum::<Macros>().rounded()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub day: String,

    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl PlanDay {
    /// Sum of the rounded meal totals, rounded again.
    pub fn totals(&self) -> Macros {
        self.meals.iter().map(Meal::totals).sum::<Macros>().rounded()
    }

    fn meal_mut(&mut self, name: &str) -> Option<&mut Meal> {
        self.meals.iter_mut().find(|m| m.name == name)
    }
}

/// Multi-day meal plan as assigned by a coach.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(default)]
    pub days: Vec<PlanDay>,
}

impl MealPlan {
    pub fn day(&self, day: &str) -> Option<&PlanDay> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Apply a confirmed swap and return how many entries were replaced.
    ///
    /// Single-entry scope replaces one entry in the named meal of the named
    /// day: the one at `entry_index` when given (and only if it still holds
    /// the replaced food), otherwise the first entry holding the replaced food.
    /// All-days scope replaces every such entry under a meal of the same name,
    /// on every day, and ignores `entry_index`.
    pub fn apply_swap(&mut self, decision: &SwapDecision) -> usize {
        let replacement = PlanEntry::from_decision(decision);
        let original = decision.replaced_food_id.as_str();
        let mut replaced = 0;

        for day in &mut self.days {
            if decision.scope == SwapScope::SingleEntry && day.day != decision.meal_day {
                continue;
            }

            let Some(meal) = day.meal_mut(&decision.meal_name) else {
                continue;
            };

            if let (SwapScope::SingleEntry, Some(index)) = (decision.scope, decision.entry_index) {
                match meal.entries.get_mut(index) {
                    Some(entry) if entry.matches_food(original) => {
                        *entry = replacement.clone();
                        replaced = 1;
                    }
                    _ => warn!(
                        "Entry {} of {} / {} does not hold '{}', plan left unchanged",
                        index, decision.meal_day, decision.meal_name, original
                    ),
                }
                break;
            }

            for entry in meal.entries.iter_mut().filter(|e| e.matches_food(original)) {
                *entry = replacement.clone();
                replaced += 1;
                if decision.scope == SwapScope::SingleEntry {
                    break;
                }
            }

            if decision.scope == SwapScope::SingleEntry {
                break;
            }
        }

        debug!(
            "Replaced {} entries of '{}' with '{}' ({:?})",
            replaced, original, decision.food_id, decision.scope
        );
        replaced
    }
}
