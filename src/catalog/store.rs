use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{debug, warn};

use crate::catalog::data::builtin_foods;
use crate::models::{Category, FoodItem};

static BUILTIN: LazyLock<NutritionCatalog> =
    LazyLock::new(|| NutritionCatalog::new(builtin_foods()));

/// Read-only food table with an id index and a per-category index.
///
/// Built once and never mutated; safe to share across threads.
#[derive(Debug, Clone)]
pub struct NutritionCatalog {
    /// Foods in insertion order.
    foods: Vec<FoodItem>,
    /// Position in `foods` keyed by id.
    by_id: HashMap<String, usize>,
    /// Positions in `foods` per category, in insertion order.
    by_category: HashMap<Category, Vec<usize>>,
}

impl NutritionCatalog {
    /// Build a catalog from a list of foods.
    ///
    /// The first occurrence of an id wins. Rows with negative or non-finite
    /// macros are skipped.
    pub fn new(items: Vec<FoodItem>) -> Self {
        let mut foods = Vec::with_capacity(items.len());
        let mut by_id = HashMap::new();
        let mut by_category: HashMap<Category, Vec<usize>> = HashMap::new();

        for food in items {
            if !food.is_valid() {
                warn!("Skipping invalid catalog row: {}", food.debug_string());
                continue;
            }
            if by_id.contains_key(&food.id) {
                warn!("Skipping duplicate catalog id: {}", food.id);
                continue;
            }

            let idx = foods.len();
            by_id.insert(food.id.clone(), idx);
            by_category.entry(food.category).or_default().push(idx);
            foods.push(food);
        }

        debug!("Built nutrition catalog with {} foods", foods.len());
        Self {
            foods,
            by_id,
            by_category,
        }
    }

    /// The built-in catalog, initialized on first use.
    pub fn builtin() -> &'static NutritionCatalog {
        &BUILTIN
    }

    /// Get a food by id. `None` is an expected outcome, not a fault.
    pub fn get_food_by_id(&self, id: &str) -> Option<&FoodItem> {
        self.by_id.get(id).map(|&idx| &self.foods[idx])
    }

    /// Foods of one category in catalog order.
    pub fn get_foods_by_category(&self, category: Category) -> Vec<&FoodItem> {
        self.by_category
            .get(&category)
            .map(|indices| indices.iter().map(|&idx| &self.foods[idx]).collect())
            .unwrap_or_default()
    }

    /// Case-insensitive substring search on food names, in catalog order.
    pub fn search(&self, term: &str) -> Vec<&FoodItem> {
        let needle = term.trim().to_lowercase();
        self.foods
            .iter()
            .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Categories holding at least one food, in browsing order.
    pub fn categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.by_category.contains_key(c))
            .collect()
    }

    /// All foods in catalog order.
    pub fn all(&self) -> &[FoodItem] {
        &self.foods
    }

    /// Count of foods in the catalog.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the catalog has no foods.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Macros;

    fn sample_foods() -> Vec<FoodItem> {
        vec![
            FoodItem::new("pasta", "Pasta (secca)", Category::Carbs, Macros::new(350.0, 12.0, 70.0, 1.5)),
            FoodItem::new("mela", "Mela", Category::Fruits, Macros::new(52.0, 0.3, 14.0, 0.2)),
            FoodItem::new("riso_bianco", "Riso bianco", Category::Carbs, Macros::new(350.0, 7.0, 77.0, 0.5)),
        ]
    }

    #[test]
    fn test_get_food_by_id() {
        let catalog = NutritionCatalog::new(sample_foods());
        assert_eq!(catalog.get_food_by_id("mela").unwrap().name, "Mela");
        assert!(catalog.get_food_by_id("nonexistent").is_none());
        // Ids are exact, not case-folded
        assert!(catalog.get_food_by_id("MELA").is_none());
    }

    #[test]
    fn test_get_foods_by_category_keeps_order() {
        let catalog = NutritionCatalog::new(sample_foods());
        let ids: Vec<&str> = catalog
            .get_foods_by_category(Category::Carbs)
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(ids, vec!["pasta", "riso_bianco"]);
        assert!(catalog.get_foods_by_category(Category::Dairy).is_empty());
    }

    #[test]
    fn test_duplicates_and_invalid_rows_skipped() {
        let mut foods = sample_foods();
        foods.push(FoodItem::new("mela", "Mela verde", Category::Fruits, Macros::new(50.0, 0.3, 13.0, 0.1)));
        foods.push(FoodItem::new("bad", "Bad", Category::Fats, Macros::new(-1.0, 0.0, 0.0, 0.0)));

        let catalog = NutritionCatalog::new(foods);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get_food_by_id("mela").unwrap().name, "Mela");
        assert!(catalog.get_food_by_id("bad").is_none());
    }

    #[test]
    fn test_search_and_categories() {
        let catalog = NutritionCatalog::new(sample_foods());
        assert_eq!(catalog.search("RISO").len(), 1);
        assert_eq!(catalog.search("").len(), 3);
        assert_eq!(catalog.categories(), vec![Category::Carbs, Category::Fruits]);
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = NutritionCatalog::builtin();
        let b = NutritionCatalog::builtin();
        assert!(std::ptr::eq(a, b));
        assert!(!a.is_empty());
    }
}
