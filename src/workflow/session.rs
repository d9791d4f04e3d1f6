use tracing::{debug, info};

use crate::catalog::NutritionCatalog;
use crate::config::SwapConfig;
use crate::engine::{
    check_variance, classify, distance_to_targets, macros_for_grams, portion_for,
    rank_similar_foods, MacroDelta, MatchVerdict, VarianceReport,
};
use crate::error::{Result, SwapError};
use crate::models::{
    Category, ComputedPortion, FoodItem, MacroTarget, Macros, MealSlot, SwapDecision, SwapScope,
};

/// Where a session stands before it is confirmed or cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Opened on the original food, no candidate picked yet.
    Seeded,
    /// A candidate was picked and its portion evaluated.
    Evaluated,
    /// A candidate was picked but no portion can be computed for it.
    Unresolved,
}

/// Macro targets set by the coach, with the deviation they tolerate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoachTargets {
    pub macros: Macros,
    pub allowed_variance: f64,
}

/// A candidate's computed portion compared against the baseline.
#[derive(Debug, Clone)]
pub struct Evaluation<'a> {
    pub food: &'a FoodItem,
    pub portion: ComputedPortion,
    pub delta: MacroDelta,
    pub verdict: MatchVerdict,
    /// Present only when coach targets are attached.
    pub variance: Option<VarianceReport>,
}

impl Evaluation<'_> {
    pub fn within_coach_targets(&self) -> bool {
        self.variance.as_ref().is_none_or(VarianceReport::is_valid)
    }
}

/// A food that satisfies the coach targets, closest first.
#[derive(Debug, Clone)]
pub struct Alternative<'a> {
    pub food: &'a FoodItem,
    pub portion: ComputedPortion,
    pub distance: f64,
}

/// One substitution attempt on one meal-plan entry.
///
/// The baseline macros are captured when the session opens; every candidate
/// is compared against that snapshot. `confirm` and `cancel` consume the
/// session.
#[derive(Debug)]
pub struct SwapSession<'a> {
    catalog: &'a NutritionCatalog,
    original: &'a FoodItem,
    original_grams: f64,
    baseline: MacroTarget,
    slot: MealSlot,
    selected: &'a FoodItem,
    candidate_chosen: bool,
    evaluation: Option<Evaluation<'a>>,
    browse_category: Category,
    scope: SwapScope,
    coach: Option<CoachTargets>,
    suggestion_limit: usize,
    alternatives_limit: usize,
    allowed_variance: f64,
}

impl<'a> SwapSession<'a> {
    /// Open a session on an entry with known grams and macros.
    pub fn new(
        catalog: &'a NutritionCatalog,
        food_id: &str,
        grams: f64,
        macros: Macros,
        slot: MealSlot,
        config: &SwapConfig,
    ) -> Result<Self> {
        let original = catalog
            .get_food_by_id(food_id)
            .ok_or_else(|| SwapError::FoodNotFound(food_id.to_string()))?;

        if !grams.is_finite() || grams < 0.0 {
            return Err(SwapError::InvalidInput(format!(
                "grams must be a non-negative number, got {}",
                grams
            )));
        }
        if !macros.is_valid() {
            return Err(SwapError::InvalidInput(
                "current macros must be non-negative numbers".to_string(),
            ));
        }

        debug!(
            "Opened swap on {} at {}g for {} / {}",
            original.id, grams, slot.meal_day, slot.meal_name
        );

        Ok(Self {
            catalog,
            original,
            original_grams: grams,
            baseline: macros,
            slot,
            selected: original,
            candidate_chosen: false,
            evaluation: None,
            browse_category: original.category,
            scope: SwapScope::SingleEntry,
            coach: None,
            suggestion_limit: config.suggestion_limit,
            alternatives_limit: config.alternatives_limit,
            allowed_variance: config.allowed_variance,
        })
    }

    /// Open a session whose current macros come from the catalog profile.
    pub fn from_grams(
        catalog: &'a NutritionCatalog,
        food_id: &str,
        grams: f64,
        slot: MealSlot,
        config: &SwapConfig,
    ) -> Result<Self> {
        let food = catalog
            .get_food_by_id(food_id)
            .ok_or_else(|| SwapError::FoodNotFound(food_id.to_string()))?;
        let macros = macros_for_grams(food, grams).ok_or_else(|| {
            SwapError::UndefinedCalculation(format!("{}g of {}", grams, food.name))
        })?;
        Self::new(catalog, food_id, grams, macros, slot, config)
    }

    /// Attach coach targets checked with the configured variance.
    pub fn with_coach_targets(mut self, targets: Macros) -> Result<Self> {
        if !targets.is_valid() {
            return Err(SwapError::InvalidInput(
                "coach targets must be non-negative numbers".to_string(),
            ));
        }

        self.coach = Some(CoachTargets {
            macros: targets,
            allowed_variance: self.allowed_variance,
        });
        if self.candidate_chosen {
            self.evaluation = self.evaluate(self.selected);
        }
        Ok(self)
    }

    pub fn original(&self) -> &'a FoodItem {
        self.original
    }

    pub fn original_grams(&self) -> f64 {
        self.original_grams
    }

    pub fn baseline(&self) -> &MacroTarget {
        &self.baseline
    }

    pub fn slot(&self) -> &MealSlot {
        &self.slot
    }

    pub fn selected(&self) -> &'a FoodItem {
        self.selected
    }

    pub fn evaluation(&self) -> Option<&Evaluation<'a>> {
        self.evaluation.as_ref()
    }

    pub fn coach_targets(&self) -> Option<&CoachTargets> {
        self.coach.as_ref()
    }

    pub fn scope(&self) -> SwapScope {
        self.scope
    }

    pub fn set_scope(&mut self, scope: SwapScope) {
        self.scope = scope;
    }

    pub fn state(&self) -> SessionState {
        match (self.candidate_chosen, self.evaluation.is_some()) {
            (false, _) => SessionState::Seeded,
            (true, true) => SessionState::Evaluated,
            (true, false) => SessionState::Unresolved,
        }
    }

    /// Foods most similar to the original, same category.
    pub fn suggestions(&self) -> Vec<&'a FoodItem> {
        rank_similar_foods(self.catalog, &self.original.id, self.suggestion_limit)
    }

    pub fn browse_category(&self) -> Category {
        self.browse_category
    }

    pub fn browse(&mut self, category: Category) {
        self.browse_category = category;
    }

    /// Foods of the category being browsed, catalog order.
    pub fn browse_foods(&self) -> Vec<&'a FoodItem> {
        self.catalog.get_foods_by_category(self.browse_category)
    }

    /// Pick a candidate and recompute its portion against the baseline.
    ///
    /// An unknown id leaves the session unchanged. `Ok(None)` means the
    /// candidate has none of its primary macro and needs manual entry.
    pub fn select_candidate(&mut self, food_id: &str) -> Result<Option<&Evaluation<'a>>> {
        let food = self
            .catalog
            .get_food_by_id(food_id)
            .ok_or_else(|| SwapError::FoodNotFound(food_id.to_string()))?;

        self.selected = food;
        self.candidate_chosen = true;
        self.evaluation = self.evaluate(food);

        match &self.evaluation {
            Some(e) => debug!(
                "Candidate {} -> {}g, verdict {:?}",
                food.id, e.portion.grams, e.verdict
            ),
            None => debug!("Candidate {} has no computable portion", food.id),
        }
        Ok(self.evaluation.as_ref())
    }

    fn evaluate(&self, food: &'a FoodItem) -> Option<Evaluation<'a>> {
        let portion = portion_for(food, &self.baseline)?;
        let delta = MacroDelta::between(&self.baseline, &portion.macros);
        let variance = self
            .coach
            .map(|c| check_variance(&portion.macros, &c.macros, c.allowed_variance));

        Some(Evaluation {
            food,
            portion,
            delta,
            verdict: classify(&delta),
            variance,
        })
    }

    /// Same-category foods that satisfy the coach targets.
    ///
    /// Empty unless coach targets are attached and the selected candidate
    /// fails them (or has no computable portion).
    pub fn alternatives(&self) -> Vec<Alternative<'a>> {
        let Some(coach) = self.coach else {
            return Vec::new();
        };
        if !self.candidate_chosen
            || self
                .evaluation
                .as_ref()
                .is_some_and(Evaluation::within_coach_targets)
        {
            return Vec::new();
        }

        let mut alternatives: Vec<Alternative<'a>> = self
            .catalog
            .get_foods_by_category(self.original.category)
            .into_iter()
            .filter(|f| f.id != self.selected.id && f.id != self.original.id)
            .filter_map(|food| {
                let portion = portion_for(food, &self.baseline)?;
                check_variance(&portion.macros, &coach.macros, coach.allowed_variance)
                    .is_valid()
                    .then(|| Alternative {
                        food,
                        portion,
                        distance: distance_to_targets(&portion.macros, &coach.macros),
                    })
            })
            .collect();

        alternatives.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        alternatives.truncate(self.alternatives_limit);
        alternatives
    }

    fn ready_evaluation(&self) -> Result<&Evaluation<'a>> {
        if self.selected.id == self.original.id {
            return Err(SwapError::NoOpSwap);
        }

        let evaluation = self.evaluation.as_ref().ok_or_else(|| {
            SwapError::UndefinedCalculation(format!(
                "{} has no {} to match",
                self.selected.name,
                crate::engine::primary_macro(self.selected.category)
            ))
        })?;

        if let Some(report) = &evaluation.variance {
            if !report.is_valid() {
                return Err(SwapError::OutOfRange(report.violations()));
            }
        }
        Ok(evaluation)
    }

    /// Whether `confirm` would succeed.
    pub fn can_confirm(&self) -> bool {
        self.ready_evaluation().is_ok()
    }

    /// Finish the session and emit the decision for the caller to persist.
    pub fn confirm(self) -> Result<SwapDecision> {
        let evaluation = self.ready_evaluation()?;

        let decision = SwapDecision {
            food_id: evaluation.food.id.clone(),
            food_name: evaluation.food.name.clone(),
            grams: evaluation.portion.grams,
            macros: evaluation.portion.macros,
            scope: self.scope,
            meal_day: self.slot.meal_day.clone(),
            meal_name: self.slot.meal_name.clone(),
            replaced_food_id: self.original.id.clone(),
            entry_index: self.slot.entry_index,
        };

        info!(
            "Confirmed swap {} -> {} ({}g, {:?})",
            decision.replaced_food_id, decision.food_id, decision.grams, decision.scope
        );
        Ok(decision)
    }

    /// Abandon the session; nothing is emitted.
    pub fn cancel(self) {
        debug!("Cancelled swap on {}", self.original.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static NutritionCatalog {
        NutritionCatalog::builtin()
    }

    fn pasta_session() -> SwapSession<'static> {
        SwapSession::new(
            catalog(),
            "pasta",
            100.0,
            Macros::new(350.0, 12.0, 70.0, 1.5),
            MealSlot::new("Lunedi", "Pranzo"),
            &SwapConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_unknown_food() {
        let err = SwapSession::from_grams(
            catalog(),
            "nonexistent",
            100.0,
            MealSlot::default(),
            &SwapConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SwapError::FoodNotFound(_)));
    }

    #[test]
    fn test_seeded_state() {
        let session = pasta_session();
        assert_eq!(session.state(), SessionState::Seeded);
        assert_eq!(session.selected().id, "pasta");
        assert_eq!(session.browse_category(), Category::Carbs);
        assert!(!session.can_confirm());
        assert_eq!(session.suggestions().len(), 6);
    }

    #[test]
    fn test_select_unknown_candidate_keeps_state() {
        let mut session = pasta_session();
        session.select_candidate("riso_bianco").unwrap();
        assert!(session.select_candidate("nonexistent").is_err());
        assert_eq!(session.selected().id, "riso_bianco");
        assert_eq!(session.state(), SessionState::Evaluated);
    }

    #[test]
    fn test_undefined_candidate_blocks_confirm() {
        let mut session = pasta_session();
        // Creatine has zero calories, its primary macro for Supplements
        assert!(session.select_candidate("creatina").unwrap().is_none());
        assert_eq!(session.state(), SessionState::Unresolved);
        assert!(matches!(
            session.confirm(),
            Err(SwapError::UndefinedCalculation(_))
        ));
    }

    #[test]
    fn test_reselecting_original_is_noop() {
        let mut session = pasta_session();
        session.select_candidate("pasta").unwrap();
        assert!(matches!(session.confirm(), Err(SwapError::NoOpSwap)));
    }

    #[test]
    fn test_baseline_stays_fixed_across_candidates() {
        let mut session = pasta_session();
        let first = session.select_candidate("riso_bianco").unwrap().unwrap().portion;
        session.select_candidate("farro").unwrap();
        let again = session.select_candidate("riso_bianco").unwrap().unwrap().portion;
        assert_eq!(first, again);
        assert_eq!(*session.baseline(), Macros::new(350.0, 12.0, 70.0, 1.5));
    }

    #[test]
    fn test_confirm_emits_decision() {
        let mut session = pasta_session();
        session.select_candidate("riso_bianco").unwrap();
        session.set_scope(SwapScope::AllDays);

        let decision = session.confirm().unwrap();
        assert_eq!(decision.food_id, "riso_bianco");
        assert_eq!(decision.food_name, "Riso bianco");
        assert_eq!(decision.grams, 90.0);
        assert_eq!(decision.scope, SwapScope::AllDays);
        assert_eq!(decision.meal_name, "Pranzo");
        assert_eq!(decision.replaced_food_id, "pasta");
    }

    #[test]
    fn test_browse_other_category() {
        let mut session = pasta_session();
        session.browse(Category::Fruits);
        let foods = session.browse_foods();
        assert!(!foods.is_empty());
        assert!(foods.iter().all(|f| f.category == Category::Fruits));
    }

    #[test]
    fn test_valid_candidate_has_no_alternatives() {
        let mut session = pasta_session()
            .with_coach_targets(Macros::new(350.0, 12.0, 70.0, 1.5))
            .unwrap();
        // 410g of potatoes: 316 kcal is within ±15% of 350
        session.select_candidate("patate").unwrap();
        assert!(session.evaluation().unwrap().within_coach_targets());
        assert!(session.alternatives().is_empty());
        assert!(session.can_confirm());
    }

    #[test]
    fn test_coach_targets_suggest_alternatives() {
        let mut session = pasta_session()
            .with_coach_targets(Macros::new(350.0, 12.0, 70.0, 1.5))
            .unwrap();
        session.select_candidate("quinoa").unwrap();

        let alternatives = session.alternatives();
        assert_eq!(alternatives.len(), 3);
        // 95g of couscous lands within a few units of every target
        assert_eq!(alternatives[0].food.id, "couscous");
        assert!(
            alternatives
                .iter()
                .all(|a| a.food.id != "quinoa" && a.food.id != "pasta")
        );
        for pair in alternatives.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_invalid_coach_targets_rejected() {
        for targets in [
            Macros::new(-350.0, 12.0, 70.0, 1.5),
            Macros::new(350.0, f64::NAN, 70.0, 1.5),
            Macros::new(350.0, 12.0, f64::INFINITY, 1.5),
        ] {
            let err = pasta_session().with_coach_targets(targets).unwrap_err();
            assert!(matches!(err, SwapError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_no_alternatives_without_coach() {
        let mut session = pasta_session();
        session.select_candidate("quinoa").unwrap();
        assert!(session.alternatives().is_empty());
    }

    #[test]
    fn test_out_of_range_candidate_cannot_confirm() {
        let mut session = pasta_session()
            .with_coach_targets(Macros::new(350.0, 12.0, 70.0, 1.5))
            .unwrap();
        // Quinoa at 110g: 407 kcal, 15.4P, 70.4C, 6.6F -> only carbs in range
        session.select_candidate("quinoa").unwrap();
        assert!(!session.can_confirm());
        assert!(matches!(session.confirm(), Err(SwapError::OutOfRange(_))));
    }

    #[test]
    fn test_cancel_consumes() {
        let mut session = pasta_session();
        session.select_candidate("riso_bianco").unwrap();
        session.cancel();
    }
}
