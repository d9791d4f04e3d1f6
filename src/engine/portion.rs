use crate::engine::constants::GRAM_STEP;
use crate::models::macros::round_to_step;
use crate::models::{Category, ComputedPortion, FoodItem, MacroKind, MacroTarget, Macros};

/// The value a substitute must reproduce, chosen by category.
pub fn primary_macro(category: Category) -> MacroKind {
    match category {
        Category::Carbs => MacroKind::Carbs,
        Category::Proteins => MacroKind::Proteins,
        Category::Fats => MacroKind::Fats,
        Category::Vegetables | Category::Fruits | Category::Dairy | Category::Supplements => {
            MacroKind::Calories
        }
    }
}

/// Grams of `food` that deliver the target's primary macro.
///
/// Rounded half-up to the nearest 5 g. Returns `None` when the food has none
/// of its primary macro, or when the target gives no usable amount.
pub fn grams_for_target(food: &FoodItem, target: &MacroTarget) -> Option<f64> {
    let kind = primary_macro(food.category);
    let per_100g = food.per_100g.get(kind);
    let wanted = target.get(kind);

    if per_100g == 0.0 || !wanted.is_finite() || wanted < 0.0 {
        return None;
    }

    let grams = round_to_step(wanted / per_100g * 100.0, GRAM_STEP);
    grams.is_finite().then_some(grams)
}

/// Macros delivered by `grams` of `food`.
///
/// Calories are rounded to an integer, the rest to one decimal. Returns
/// `None` for zero, negative or non-finite grams.
pub fn macros_for_grams(food: &FoodItem, grams: f64) -> Option<Macros> {
    if grams == 0.0 || !grams.is_finite() || grams < 0.0 {
        return None;
    }
    Some(food.per_100g.scale(grams / 100.0).rounded())
}

/// Both calculations in one step: grams for the target, then their macros.
pub fn portion_for(food: &FoodItem, target: &MacroTarget) -> Option<ComputedPortion> {
    let grams = grams_for_target(food, target)?;
    let macros = macros_for_grams(food, grams)?;
    Some(ComputedPortion { grams, macros })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(category: Category, m: Macros) -> FoodItem {
        FoodItem::new("test", "Test", category, m)
    }

    #[test]
    fn test_primary_macro_mapping() {
        assert_eq!(primary_macro(Category::Carbs), MacroKind::Carbs);
        assert_eq!(primary_macro(Category::Proteins), MacroKind::Proteins);
        assert_eq!(primary_macro(Category::Fats), MacroKind::Fats);
        for other in [
            Category::Vegetables,
            Category::Fruits,
            Category::Dairy,
            Category::Supplements,
        ] {
            assert_eq!(primary_macro(other), MacroKind::Calories);
        }
    }

    #[test]
    fn test_grams_for_target_rounds_to_five() {
        let rice = food(Category::Carbs, Macros::new(350.0, 7.0, 77.0, 0.5));
        let target = Macros::new(350.0, 12.0, 70.0, 1.5);
        // 70 / 77 * 100 = 90.9
        assert_eq!(grams_for_target(&rice, &target), Some(90.0));
    }

    #[test]
    fn test_grams_for_target_half_rounds_up() {
        // 30 / 80 * 100 = 37.5 -> 40
        let f = food(Category::Fats, Macros::new(720.0, 0.0, 0.0, 80.0));
        let target = Macros::new(0.0, 0.0, 0.0, 30.0);
        assert_eq!(grams_for_target(&f, &target), Some(40.0));
    }

    #[test]
    fn test_grams_for_target_zero_primary_is_undefined() {
        let oil = food(Category::Carbs, Macros::new(884.0, 0.0, 0.0, 100.0));
        let target = Macros::new(350.0, 12.0, 70.0, 1.5);
        assert_eq!(grams_for_target(&oil, &target), None);

        let creatine = food(Category::Supplements, Macros::default());
        assert_eq!(grams_for_target(&creatine, &target), None);
    }

    #[test]
    fn test_grams_for_target_uses_calories_for_other_categories() {
        let apple = food(Category::Fruits, Macros::new(52.0, 0.3, 14.0, 0.2));
        let target = Macros::new(104.0, 0.0, 0.0, 0.0);
        assert_eq!(grams_for_target(&apple, &target), Some(200.0));
    }

    #[test]
    fn test_macros_for_grams() {
        let rice = food(Category::Carbs, Macros::new(350.0, 7.0, 77.0, 0.5));
        let m = macros_for_grams(&rice, 90.0).unwrap();
        assert_eq!(m.calories, 315.0);
        assert!((m.proteins - 6.3).abs() < 1e-9);
        assert!((m.carbs - 69.3).abs() < 1e-9);
    }

    #[test]
    fn test_macros_for_grams_zero_is_undefined() {
        let rice = food(Category::Carbs, Macros::new(350.0, 7.0, 77.0, 0.5));
        assert!(macros_for_grams(&rice, 0.0).is_none());
        assert!(macros_for_grams(&rice, -5.0).is_none());
        assert!(macros_for_grams(&rice, f64::NAN).is_none());
    }

    #[test]
    fn test_portion_for_target_of_zero_is_undefined() {
        // Zero grams are computed, but zero grams deliver no portion
        let rice = food(Category::Carbs, Macros::new(350.0, 7.0, 77.0, 0.5));
        assert!(portion_for(&rice, &Macros::default()).is_none());
    }
}
