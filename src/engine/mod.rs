pub mod constants;
pub mod portion;
pub mod similarity;
pub mod verdict;

pub use constants::*;
pub use portion::{grams_for_target, macros_for_grams, portion_for, primary_macro};
pub use similarity::{dissimilarity, rank_similar_foods};
pub use verdict::{
    check_variance, classify, distance_to_targets, MacroDelta, MacroRange, MatchVerdict,
    VarianceReport,
};

use crate::catalog::NutritionCatalog;
use crate::models::{ComputedPortion, FoodItem, MacroTarget, Macros};

/// The substitution calculations bound to one catalog, addressed by food id.
///
/// Every method is a pure read; an unknown id yields `None`.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionEngine<'a> {
    catalog: &'a NutritionCatalog,
}

impl<'a> SubstitutionEngine<'a> {
    pub fn new(catalog: &'a NutritionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a NutritionCatalog {
        self.catalog
    }

    pub fn food(&self, id: &str) -> Option<&'a FoodItem> {
        self.catalog.get_food_by_id(id)
    }

    pub fn grams_for_target(&self, food_id: &str, target: &MacroTarget) -> Option<f64> {
        grams_for_target(self.food(food_id)?, target)
    }

    pub fn macros_for_grams(&self, food_id: &str, grams: f64) -> Option<Macros> {
        macros_for_grams(self.food(food_id)?, grams)
    }

    pub fn portion_for(&self, food_id: &str, target: &MacroTarget) -> Option<ComputedPortion> {
        portion_for(self.food(food_id)?, target)
    }

    pub fn rank_similar_foods(&self, source_id: &str, limit: usize) -> Vec<&'a FoodItem> {
        rank_similar_foods(self.catalog, source_id, limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_unknown_ids() {
        let engine = SubstitutionEngine::new(NutritionCatalog::builtin());
        let target = Macros::new(350.0, 12.0, 70.0, 1.5);
        assert!(engine.food("nonexistent").is_none());
        assert!(engine.grams_for_target("nonexistent", &target).is_none());
        assert!(engine.macros_for_grams("nonexistent", 100.0).is_none());
        assert!(engine.portion_for("nonexistent", &target).is_none());
        assert!(engine.rank_similar_foods("nonexistent", 5).is_empty());
    }

    #[test]
    fn test_engine_portion_by_id() {
        let engine = SubstitutionEngine::new(NutritionCatalog::builtin());
        let target = Macros::new(350.0, 12.0, 70.0, 1.5);
        let portion = engine.portion_for("riso_bianco", &target).unwrap();
        assert_eq!(portion.grams, 90.0);
        assert_eq!(portion.macros.calories, 315.0);
    }
}
