use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::NutritionCatalog;
use crate::error::{Result, SwapError};
use crate::interface::render::{display_alternatives, display_evaluation, display_original};
use crate::models::{Category, FoodItem, SwapDecision, SwapScope};
use crate::workflow::SwapSession;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Fuzzy candidates shown at most.
const FUZZY_MAX_OPTIONS: usize = 5;

/// Catalog foods whose name is close to `input`, best first.
pub fn fuzzy_matches<'a>(catalog: &'a NutritionCatalog, input: &str) -> Vec<&'a FoodItem> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&FoodItem, f64)> = catalog
        .all()
        .iter()
        .map(|f| (f, jaro_winkler(&f.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates.into_iter().map(|(f, _)| f).collect()
}

/// Resolve user input to a catalog food: id, then exact name, then fuzzy.
pub fn resolve_food<'a>(catalog: &'a NutritionCatalog, input: &str) -> Result<&'a FoodItem> {
    let input = input.trim();

    if let Some(food) = catalog.get_food_by_id(input) {
        return Ok(food);
    }

    if let Some(food) = catalog
        .all()
        .iter()
        .find(|f| f.name.to_lowercase() == input.to_lowercase())
    {
        return Ok(food);
    }

    let candidates = fuzzy_matches(catalog, input);
    match candidates.as_slice() {
        [] => Err(SwapError::FoodNotFound(input.to_string())),
        [only] => {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", only.name))
                .default(true)
                .interact()?;
            if confirm {
                Ok(only)
            } else {
                Err(SwapError::FoodNotFound(input.to_string()))
            }
        }
        many => {
            let options: Vec<&FoodItem> = many.iter().copied().take(FUZZY_MAX_OPTIONS).collect();
            let mut labels: Vec<String> = options.iter().map(|f| f.name.clone()).collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            options
                .get(selection)
                .copied()
                .ok_or_else(|| SwapError::FoodNotFound(input.to_string()))
        }
    }
}

/// Let the operator pick a food of one category.
fn prompt_browse<'a>(session: &mut SwapSession<'a>) -> Result<Option<&'a FoodItem>> {
    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let current = Category::ALL
        .iter()
        .position(|c| *c == session.browse_category())
        .unwrap_or(0);

    let picked = Select::new()
        .with_prompt("Category")
        .items(&labels)
        .default(current)
        .interact()?;
    session.browse(Category::ALL[picked]);

    prompt_pick_food(&session.browse_foods(), session.selected())
}

/// Let the operator search foods by name.
fn prompt_search<'a>(catalog: &'a NutritionCatalog, selected: &FoodItem) -> Result<Option<&'a FoodItem>> {
    let term: String = Input::new()
        .with_prompt("Search food by name")
        .allow_empty(true)
        .interact_text()?;

    let mut found = catalog.search(&term);
    if found.is_empty() {
        found = fuzzy_matches(catalog, &term);
    }
    if found.is_empty() {
        println!("No food matches '{}'", term.trim());
        return Ok(None);
    }
    prompt_pick_food(&found, selected)
}

fn prompt_pick_food<'a>(foods: &[&'a FoodItem], selected: &FoodItem) -> Result<Option<&'a FoodItem>> {
    let mut labels: Vec<String> = foods
        .iter()
        .map(|f| {
            let marker = if f.id == selected.id { "*" } else { " " };
            format!("{} {} ({} kcal/100g)", marker, f.name, f.per_100g.calories)
        })
        .collect();
    labels.push("Back".to_string());

    let selection = Select::new()
        .with_prompt("Pick a food")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(foods.get(selection).copied())
}

enum MenuAction<'a> {
    Pick(&'a FoodItem),
    Browse,
    Search,
    ToggleScope,
    Confirm,
    Cancel,
}

/// Run an interactive swap session until the operator confirms or cancels.
///
/// Returns `None` when cancelled.
pub fn run_swap_session<'a>(
    catalog: &'a NutritionCatalog,
    mut session: SwapSession<'a>,
) -> Result<Option<SwapDecision>> {
    display_original(&session);

    loop {
        let mut menu: Vec<(String, MenuAction<'a>)> = Vec::new();

        for food in session.suggestions() {
            let label = format!("Suggested: {} ({} kcal/100g)", food.name, food.per_100g.calories);
            menu.push((label, MenuAction::Pick(food)));
        }
        for alt in session.alternatives() {
            let label = format!("Alternative: {} ({}g)", alt.food.name, alt.portion.grams);
            menu.push((label, MenuAction::Pick(alt.food)));
        }
        menu.push(("Browse a category...".to_string(), MenuAction::Browse));
        menu.push(("Search by name...".to_string(), MenuAction::Search));

        let all_days = session.scope() == SwapScope::AllDays;
        menu.push((
            format!("Apply to all days: [{}]", if all_days { "x" } else { " " }),
            MenuAction::ToggleScope,
        ));
        if session.can_confirm() {
            menu.push((
                format!("Confirm swap with {}", session.selected().name),
                MenuAction::Confirm,
            ));
        }
        menu.push(("Cancel".to_string(), MenuAction::Cancel));

        let labels: Vec<&str> = menu.iter().map(|(label, _)| label.as_str()).collect();
        let selection = Select::new()
            .with_prompt("Choose a replacement")
            .items(&labels)
            .default(0)
            .interact()?;

        let candidate = match &menu[selection].1 {
            MenuAction::Pick(food) => Some(*food),
            MenuAction::Browse => prompt_browse(&mut session)?,
            MenuAction::Search => prompt_search(catalog, session.selected())?,
            MenuAction::ToggleScope => {
                let scope = if all_days {
                    SwapScope::SingleEntry
                } else {
                    SwapScope::AllDays
                };
                session.set_scope(scope);
                None
            }
            MenuAction::Confirm => return session.confirm().map(Some),
            MenuAction::Cancel => {
                session.cancel();
                return Ok(None);
            }
        };

        if let Some(food) = candidate {
            match session.select_candidate(&food.id)? {
                Some(evaluation) => display_evaluation(evaluation),
                None => println!(
                    "\nCannot compute a portion of {}: it has none of the macro it is matched on. Pick another food.\n",
                    food.name
                ),
            }
            if food.id == session.original().id {
                println!("That is the current food; pick a different one to swap.");
            }
            display_alternatives(&session.alternatives());
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
