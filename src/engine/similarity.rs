use crate::catalog::NutritionCatalog;
use crate::engine::constants::{SIMILARITY_CALORIE_WEIGHT, SIMILARITY_MACRO_WEIGHT};
use crate::models::{FoodItem, Macros};

/// Candidate food with its dissimilarity to the source.
#[derive(Debug)]
struct Candidate<'a> {
    food: &'a FoodItem,
    score: f64,
}

/// Dissimilarity of two per-100g profiles. Lower is more similar.
///
/// Calories weigh less than the macro split: many different splits share a
/// calorie count.
pub fn dissimilarity(a: &Macros, b: &Macros) -> f64 {
    SIMILARITY_CALORIE_WEIGHT * (a.calories - b.calories).abs()
        + SIMILARITY_MACRO_WEIGHT * (a.proteins - b.proteins).abs()
        + SIMILARITY_MACRO_WEIGHT * (a.carbs - b.carbs).abs()
        + SIMILARITY_MACRO_WEIGHT * (a.fats - b.fats).abs()
}

/// Rank foods of the source's category by similarity to the source.
///
/// The source itself is excluded. Ties keep catalog order. Returns at most
/// `limit` foods, and nothing when the source id is unknown.
pub fn rank_similar_foods<'a>(
    catalog: &'a NutritionCatalog,
    source_id: &str,
    limit: usize,
) -> Vec<&'a FoodItem> {
    let Some(source) = catalog.get_food_by_id(source_id) else {
        return Vec::new();
    };

    let mut candidates: Vec<Candidate> = catalog
        .get_foods_by_category(source.category)
        .into_iter()
        .filter(|f| f.id != source.id)
        .map(|food| Candidate {
            food,
            score: dissimilarity(&food.per_100g, &source.per_100g),
        })
        .collect();

    // sort_by is stable, equal scores stay in catalog order
    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));

    candidates
        .into_iter()
        .take(limit)
        .map(|c| c.food)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn sample_catalog() -> NutritionCatalog {
        NutritionCatalog::new(vec![
            FoodItem::new("pasta", "Pasta", Category::Carbs, Macros::new(350.0, 12.0, 70.0, 1.5)),
            FoodItem::new("patate", "Patate", Category::Carbs, Macros::new(77.0, 2.0, 17.0, 0.1)),
            FoodItem::new("orzo", "Orzo", Category::Carbs, Macros::new(350.0, 10.0, 73.0, 1.5)),
            FoodItem::new("twin_a", "Twin A", Category::Carbs, Macros::new(340.0, 13.0, 67.0, 2.5)),
            FoodItem::new("twin_b", "Twin B", Category::Carbs, Macros::new(340.0, 13.0, 67.0, 2.5)),
            FoodItem::new("mela", "Mela", Category::Fruits, Macros::new(350.0, 12.0, 70.0, 1.5)),
        ])
    }

    #[test]
    fn test_dissimilarity_weights() {
        let a = Macros::new(100.0, 10.0, 10.0, 10.0);
        let b = Macros::new(110.0, 11.0, 9.0, 10.5);
        // 0.3*10 + 2*1 + 2*1 + 2*0.5
        assert!((dissimilarity(&a, &b) - 8.0).abs() < 1e-9);
        assert_eq!(dissimilarity(&a, &a), 0.0);
    }

    #[test]
    fn test_rank_orders_by_score() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = rank_similar_foods(&catalog, "pasta", 10)
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        // orzo: 0 + 4 + 6 + 0 = 10; twins: 3 + 2 + 6 + 2 = 13; patate far away
        assert_eq!(ids, vec!["orzo", "twin_a", "twin_b", "patate"]);
    }

    #[test]
    fn test_rank_excludes_source_and_other_categories() {
        let catalog = sample_catalog();
        let ranked = rank_similar_foods(&catalog, "pasta", 10);
        assert!(ranked.iter().all(|f| f.id != "pasta"));
        assert!(ranked.iter().all(|f| f.category == Category::Carbs));
    }

    #[test]
    fn test_rank_respects_limit_and_unknown_source() {
        let catalog = sample_catalog();
        assert_eq!(rank_similar_foods(&catalog, "pasta", 2).len(), 2);
        assert!(rank_similar_foods(&catalog, "pasta", 0).is_empty());
        assert!(rank_similar_foods(&catalog, "nonexistent", 5).is_empty());
        // Only food in its category
        assert!(rank_similar_foods(&catalog, "mela", 5).is_empty());
    }
}
