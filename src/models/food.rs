use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SwapError;
use crate::models::macros::Macros;

/// Fixed food categories of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Carbs,
    Proteins,
    Fats,
    Vegetables,
    Fruits,
    Dairy,
    Supplements,
}

impl Category {
    /// All categories in browsing order.
    pub const ALL: [Category; 7] = [
        Category::Carbs,
        Category::Proteins,
        Category::Fats,
        Category::Vegetables,
        Category::Fruits,
        Category::Dairy,
        Category::Supplements,
    ];

    /// Catalog key, e.g. `CARBS`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Carbs => "CARBS",
            Category::Proteins => "PROTEINS",
            Category::Fats => "FATS",
            Category::Vegetables => "VEGETABLES",
            Category::Fruits => "FRUITS",
            Category::Dairy => "DAIRY",
            Category::Supplements => "SUPPLEMENTS",
        }
    }

    /// Display label shown to the operator.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Carbs => "Carboidrati",
            Category::Proteins => "Proteine",
            Category::Fats => "Grassi",
            Category::Vegetables => "Verdure",
            Category::Fruits => "Frutta",
            Category::Dairy => "Latticini",
            Category::Supplements => "Integratori",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = SwapError;

    /// Accepts the catalog key or the display label, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle) || c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| SwapError::UnknownCategory(s.to_string()))
    }
}

/// A catalog food with its macro profile per 100 grams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: String,

    pub name: String,

    pub category: Category,

    #[serde(rename = "macros")]
    pub per_100g: Macros,
}

impl FoodItem {
    pub fn new(id: &str, name: &str, category: Category, per_100g: Macros) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            per_100g,
        }
    }

    /// Non-negative, finite macro values.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && self.per_100g.is_valid()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): {} kcal, P:{} C:{} F:{} per 100g",
            self.name,
            self.id,
            self.per_100g.calories,
            self.per_100g.proteins,
            self.per_100g.carbs,
            self.per_100g.fats
        )
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FoodItem {}

impl std::hash::Hash for FoodItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
