use crate::engine::MatchVerdict;
use crate::models::{FoodItem, Macros};
use crate::workflow::{Alternative, Evaluation, SwapSession};

/// Compact one-line macro summary.
pub fn format_macros(m: &Macros) -> String {
    format!(
        "{} kcal | P: {}g  C: {}g  F: {}g",
        m.calories, m.proteins, m.carbs, m.fats
    )
}

fn signed(value: f64, unit: &str) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("({}{}{})", sign, value, unit)
}

/// Display a list of foods with their per-100g profile.
pub fn display_food_list(foods: &[&FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let max_id_len = foods.iter().map(|f| f.id.len()).max().unwrap_or(10);
    let max_name_len = foods.iter().map(|f| f.name.len()).max().unwrap_or(10);

    for food in foods {
        println!(
            "  {:<id_w$}  {:<name_w$}  {:>4} kcal/100g  P:{:<5} C:{:<5} F:{}",
            food.id,
            food.name,
            food.per_100g.calories,
            food.per_100g.proteins,
            food.per_100g.carbs,
            food.per_100g.fats,
            id_w = max_id_len,
            name_w = max_name_len
        );
    }

    println!();
}

/// Display the entry being replaced.
pub fn display_original(session: &SwapSession) {
    let slot = session.slot();
    println!();
    println!("=== Swap {} ===", session.original().name);
    if !slot.meal_name.is_empty() || !slot.meal_day.is_empty() {
        println!("{} - {}", slot.meal_name, slot.meal_day);
    }
    println!(
        "Current: {}g -> {}",
        session.original_grams(),
        format_macros(session.baseline())
    );
    if let Some(coach) = session.coach_targets() {
        println!(
            "Coach targets (±{:.0}%): {}",
            coach.allowed_variance * 100.0,
            format_macros(&coach.macros)
        );
    }
    println!();
}

/// Display a candidate's computed portion, deltas and verdict.
pub fn display_evaluation(evaluation: &Evaluation) {
    let m = &evaluation.portion.macros;
    let d = &evaluation.delta;

    println!();
    println!("--- {} ---", evaluation.food.name);
    println!("Computed amount: {}g", evaluation.portion.grams);
    println!("  Calories: {} kcal {}", m.calories, signed(d.calories, ""));
    println!("  Proteins: {}g {}", m.proteins, signed(d.proteins, "g"));
    println!("  Carbs:    {}g {}", m.carbs, signed(d.carbs, "g"));
    println!("  Fats:     {}g {}", m.fats, signed(d.fats, "g"));

    match evaluation.verdict {
        MatchVerdict::Good => println!("Good match: macros are nearly identical."),
        MatchVerdict::Approximate { tolerance_kcal } => println!(
            "Approximate match: small macro difference (within {} kcal).",
            tolerance_kcal
        ),
    }

    if let Some(report) = &evaluation.variance {
        if report.is_valid() {
            for warning in report.violations() {
                println!("  note: {}", warning);
            }
        } else {
            println!("Outside the coach's allowed range:");
            for violation in report.violations() {
                println!("  - {}", violation);
            }
        }
    }
    println!();
}

/// Display alternatives that satisfy the coach targets.
pub fn display_alternatives(alternatives: &[Alternative]) {
    if alternatives.is_empty() {
        return;
    }

    println!("Alternatives within the coach's range:");
    for alt in alternatives {
        println!(
            "  {} - {}g ({})",
            alt.food.name,
            alt.portion.grams,
            format_macros(&alt.portion.macros)
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_macros() {
        let m = Macros::new(315.0, 6.3, 69.3, 0.5);
        assert_eq!(format_macros(&m), "315 kcal | P: 6.3g  C: 69.3g  F: 0.5g");
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(5.0, "g"), "(+5g)");
        assert_eq!(signed(-0.7, "g"), "(-0.7g)");
        assert_eq!(signed(0.0, ""), "(0)");
    }
}
