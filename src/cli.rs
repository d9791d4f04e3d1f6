use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::Category;

/// food_swap: swap foods in a meal plan while keeping its macros.
#[derive(Parser, Debug)]
#[command(name = "food_swap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the JSON config file.
    #[arg(short, long, default_value = "food_swap.json")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog foods, optionally for one category.
    Foods {
        /// Category key or label (e.g. CARBS, Latticini).
        #[arg(long)]
        category: Option<Category>,
    },

    /// Rank foods similar to a given food.
    Similar {
        /// Catalog id of the source food.
        food_id: String,

        /// Maximum number of results (defaults to the configured limit).
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the macros delivered by an amount of a food.
    Portion {
        food_id: String,

        #[arg(short, long)]
        grams: f64,
    },

    /// Compute the portion of a candidate that replaces an amount of a source food.
    Compare {
        source_id: String,

        candidate_id: String,

        /// Grams of the source food in the meal slot.
        #[arg(short, long)]
        grams: f64,
    },

    /// Interactively swap a food in a meal slot.
    Swap {
        /// Catalog id (or name) of the food being replaced.
        food: String,

        /// Grams of that food in the meal slot.
        #[arg(short, long)]
        grams: f64,

        /// Day of the plan holding the entry.
        #[arg(long, default_value = "")]
        day: String,

        /// Meal name holding the entry.
        #[arg(long, default_value = "")]
        meal: String,

        /// Position of the entry inside the meal (0-based).
        #[arg(long)]
        entry: Option<usize>,

        /// Meal plan JSON file to apply the confirmed swap to.
        #[arg(long)]
        plan: Option<PathBuf>,

        /// Coach targets as kcal,proteins,carbs,fats (enables the variance check).
        #[arg(long, value_parser = parse_macros)]
        targets: Option<[f64; 4]>,
    },

    /// Export the catalog as CSV.
    Export {
        #[arg(long, default_value = "foods.csv")]
        csv: PathBuf,
    },
}

/// Parse `kcal,proteins,carbs,fats`.
pub fn parse_macros(s: &str) -> Result<[f64; 4], String> {
    let values: Vec<f64> = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid number in '{}': {}", s, e))?;

    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(format!("targets must be non-negative numbers, got {}", bad));
    }

    <[f64; 4]>::try_from(values)
        .map_err(|v| format!("expected 4 comma-separated values, got {}", v.len()))
}
