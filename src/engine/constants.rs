/// Portions are rounded to a multiple of this many grams.
pub const GRAM_STEP: f64 = 5.0;

// ─────────────────────────────────────────────────────────────────────────────
// Similarity weights
// ─────────────────────────────────────────────────────────────────────────────

/// Weight of the calorie difference in the similarity score.
pub const SIMILARITY_CALORIE_WEIGHT: f64 = 0.3;

/// Weight of each macro gram difference in the similarity score.
pub const SIMILARITY_MACRO_WEIGHT: f64 = 2.0;

/// Suggestions shown by default when opening a swap.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Match verdict
// ─────────────────────────────────────────────────────────────────────────────

/// Largest calorie delta (inclusive) still counted as a good match.
pub const GOOD_MATCH_MAX_CALORIES: f64 = 10.0;

/// Largest protein delta in grams (inclusive) for a good match.
pub const GOOD_MATCH_MAX_PROTEINS: f64 = 2.0;

/// Largest carb delta in grams (inclusive) for a good match.
pub const GOOD_MATCH_MAX_CARBS: f64 = 3.0;

/// Largest fat delta in grams (inclusive) for a good match.
pub const GOOD_MATCH_MAX_FATS: f64 = 2.0;

/// kcal per gram of protein.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// kcal per gram of carbohydrate.
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// kcal per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Coach target variance
// ─────────────────────────────────────────────────────────────────────────────

/// Default allowed relative deviation from coach targets (±15%).
pub const DEFAULT_ALLOWED_VARIANCE: f64 = 0.15;

/// Macros that must be in range when calories are not.
pub const MIN_MACROS_IN_RANGE: usize = 3;

/// Alternatives proposed when a candidate breaks the coach targets.
pub const DEFAULT_ALTERNATIVES_LIMIT: usize = 3;
