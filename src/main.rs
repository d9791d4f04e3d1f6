use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use food_swap_rs::catalog::NutritionCatalog;
use food_swap_rs::cli::{Cli, Command};
use food_swap_rs::config::SwapConfig;
use food_swap_rs::engine::SubstitutionEngine;
use food_swap_rs::error::{Result, SwapError};
use food_swap_rs::interface::{
    display_evaluation, display_food_list, format_macros, prompt_yes_no, resolve_food,
    run_swap_session,
};
use food_swap_rs::models::{Category, Macros, MealSlot};
use food_swap_rs::state::{apply_to_plan_file, export_catalog_csv};
use food_swap_rs::workflow::SwapSession;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = SwapConfig::load(&cli.config)?;
    let catalog = NutritionCatalog::builtin();

    match cli.command {
        Command::Foods { category } => cmd_foods(catalog, category),
        Command::Similar { food_id, limit } => {
            cmd_similar(catalog, &food_id, limit.unwrap_or(config.suggestion_limit))
        }
        Command::Portion { food_id, grams } => cmd_portion(catalog, &food_id, grams),
        Command::Compare {
            source_id,
            candidate_id,
            grams,
        } => cmd_compare(catalog, &config, &source_id, &candidate_id, grams),
        Command::Swap {
            food,
            grams,
            day,
            meal,
            entry,
            plan,
            targets,
        } => {
            let slot = MealSlot::new(&day, &meal);
            let slot = match entry {
                Some(index) => slot.with_entry(index),
                None => slot,
            };
            cmd_swap(catalog, &config, &food, grams, slot, plan, targets)
        }
        Command::Export { csv } => cmd_export(catalog, &csv),
    }
}

/// List the catalog, grouped by category.
fn cmd_foods(catalog: &NutritionCatalog, category: Option<Category>) -> Result<()> {
    let categories = match category {
        Some(c) => vec![c],
        None => catalog.categories(),
    };

    for c in categories {
        display_food_list(&catalog.get_foods_by_category(c), c.label());
    }
    Ok(())
}

/// Rank same-category foods by macro similarity.
fn cmd_similar(catalog: &NutritionCatalog, food_id: &str, limit: usize) -> Result<()> {
    let engine = SubstitutionEngine::new(catalog);
    let source = engine
        .food(food_id)
        .ok_or_else(|| SwapError::FoodNotFound(food_id.to_string()))?;

    let similar = engine.rank_similar_foods(food_id, limit);
    display_food_list(&similar, &format!("Similar to {}", source.name));
    Ok(())
}

fn cmd_portion(catalog: &NutritionCatalog, food_id: &str, grams: f64) -> Result<()> {
    let engine = SubstitutionEngine::new(catalog);
    let food = engine
        .food(food_id)
        .ok_or_else(|| SwapError::FoodNotFound(food_id.to_string()))?;
    let macros = engine.macros_for_grams(food_id, grams).ok_or_else(|| {
        SwapError::UndefinedCalculation(format!("{}g of {}", grams, food.name))
    })?;

    println!("{}g {}: {}", grams, food.name, format_macros(&macros));
    Ok(())
}

/// One-shot evaluation of a candidate against an amount of the source food.
fn cmd_compare(
    catalog: &NutritionCatalog,
    config: &SwapConfig,
    source_id: &str,
    candidate_id: &str,
    grams: f64,
) -> Result<()> {
    let mut session =
        SwapSession::from_grams(catalog, source_id, grams, MealSlot::default(), config)?;

    println!(
        "{}g {}: {}",
        grams,
        session.original().name,
        format_macros(session.baseline())
    );

    match session.select_candidate(candidate_id)? {
        Some(evaluation) => {
            display_evaluation(evaluation);
            Ok(())
        }
        None => Err(SwapError::UndefinedCalculation(format!(
            "no portion of {} matches {}g of {}",
            candidate_id, grams, source_id
        ))),
    }
}

/// Interactive swap; the decision is printed as JSON and optionally applied to a plan.
fn cmd_swap(
    catalog: &NutritionCatalog,
    config: &SwapConfig,
    food: &str,
    grams: f64,
    slot: MealSlot,
    plan: Option<PathBuf>,
    targets: Option<[f64; 4]>,
) -> Result<()> {
    let original = resolve_food(catalog, food)?;
    let mut session = SwapSession::from_grams(catalog, &original.id, grams, slot, config)?;

    if let Some([calories, proteins, carbs, fats]) = targets {
        session = session.with_coach_targets(Macros::new(calories, proteins, carbs, fats))?;
    }

    let Some(decision) = run_swap_session(catalog, session)? else {
        println!("Swap cancelled.");
        return Ok(());
    };

    println!("{}", serde_json::to_string_pretty(&decision)?);

    if let Some(path) = plan {
        if !path.exists() {
            eprintln!("Meal plan file not found: {}", path.display());
            return Ok(());
        }

        if prompt_yes_no(&format!("Apply swap to {}?", path.display()), true)? {
            let replaced = apply_to_plan_file(&path, &decision)?;
            if replaced == 0 {
                println!("No matching entry found in the plan.");
            } else {
                println!("Replaced {} entries. Plan saved.", replaced);
            }
        }
    }

    Ok(())
}

fn cmd_export(catalog: &NutritionCatalog, path: &Path) -> Result<()> {
    export_catalog_csv(path, catalog)?;
    println!("Exported {} foods to {}", catalog.len(), path.display());
    Ok(())
}
