use std::fs;
use std::path::Path;

use tracing::info;

use crate::catalog::NutritionCatalog;
use crate::error::Result;
use crate::models::{MealPlan, SwapDecision};

/// Load a meal plan from a JSON file.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    let content = fs::read_to_string(path)?;
    let plan: MealPlan = serde_json::from_str(&content)?;
    Ok(plan)
}

/// Save a meal plan to a JSON file.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path.as_ref(), json)?;
    info!("Saved meal plan to {}", path.as_ref().display());
    Ok(())
}

/// Load a plan, apply a decision and write it back.
///
/// Returns the number of replaced entries. The file is left untouched when
/// nothing matched.
pub fn apply_to_plan_file<P: AsRef<Path>>(path: P, decision: &SwapDecision) -> Result<usize> {
    let mut plan = load_plan(path.as_ref())?;
    let replaced = plan.apply_swap(decision);
    if replaced > 0 {
        save_plan(path.as_ref(), &plan)?;
    }
    info!(
        "Applied swap to {}: {} entries replaced",
        path.as_ref().display(),
        replaced
    );
    Ok(replaced)
}

/// Write the catalog as CSV: id, name, category, then per-100g macros.
pub fn export_catalog_csv<P: AsRef<Path>>(path: P, catalog: &NutritionCatalog) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;

    wtr.write_record(["id", "name", "category", "calories", "proteins", "carbs", "fats"])?;

    for food in catalog.all() {
        wtr.write_record([
            food.id.clone(),
            food.name.clone(),
            food.category.as_str().to_string(),
            food.per_100g.calories.to_string(),
            food.per_100g.proteins.to_string(),
            food.per_100g.carbs.to_string(),
            food.per_100g.fats.to_string(),
        ])?;
    }

    wtr.flush()?;
    info!(
        "Exported {} foods to {}",
        catalog.len(),
        path.as_ref().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Macros, SwapScope};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const PLAN_JSON: &str = r#"{
        "days": [
            {"day": "Lunedi", "meals": [
                {"name": "Pranzo", "entries": [
                    {"food_id": "pasta", "food_name": "Pasta (secca)", "grams": 80,
                     "macros": {"calories": 280, "proteins": 9.6, "carbs": 56, "fats": 1.2}},
                    {"food_name": "Sale", "grams": 2,
                     "macros": {"calories": 0, "proteins": 0, "carbs": 0, "fats": 0}}
                ]}
            ]}
        ]
    }"#;

    fn decision() -> SwapDecision {
        SwapDecision {
            food_id: "farro".to_string(),
            food_name: "Farro".to_string(),
            grams: 85.0,
            macros: Macros::new(285.0, 12.8, 57.0, 2.1),
            scope: SwapScope::SingleEntry,
            meal_day: "Lunedi".to_string(),
            meal_name: "Pranzo".to_string(),
            replaced_food_id: "pasta".to_string(),
            entry_index: None,
        }
    }

    #[test]
    fn test_load_plan_optional_food_id() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(PLAN_JSON.as_bytes()).unwrap();

        let plan = load_plan(file.path()).unwrap();
        let entries = &plan.days[0].meals[0].entries;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].food_id.as_deref(), Some("pasta"));
        assert!(entries[1].food_id.is_none());
    }

    #[test]
    fn test_apply_to_plan_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(PLAN_JSON.as_bytes()).unwrap();

        assert_eq!(apply_to_plan_file(file.path(), &decision()).unwrap(), 1);

        let reloaded = load_plan(file.path()).unwrap();
        let entry = &reloaded.days[0].meals[0].entries[0];
        assert_eq!(entry.food_id.as_deref(), Some("farro"));
        assert_eq!(entry.grams, 85.0);

        // Pasta is gone, so a second apply changes nothing
        assert_eq!(apply_to_plan_file(file.path(), &decision()).unwrap(), 0);
    }

    #[test]
    fn test_export_catalog_csv() {
        let out = NamedTempFile::new().unwrap();
        let catalog = NutritionCatalog::builtin();
        export_catalog_csv(out.path(), catalog).unwrap();

        let mut rdr = csv::Reader::from_path(out.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), catalog.len());
        assert_eq!(&rows[0][0], "pasta");
        assert_eq!(&rows[0][2], "CARBS");
        assert_eq!(&rows[0][6], "1.5");
    }
}
