use serde::Serialize;

use crate::engine::constants::*;
use crate::models::macros::{round_half_up, round_to_tenth};
use crate::models::{MacroKind, Macros};

/// `new - original` for each macro.
///
/// Gram deltas are rounded to one decimal, the way they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroDelta {
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroDelta {
    pub fn between(original: &Macros, new: &Macros) -> Self {
        Self {
            calories: new.calories - original.calories,
            proteins: round_to_tenth(new.proteins - original.proteins),
            carbs: round_to_tenth(new.carbs - original.carbs),
            fats: round_to_tenth(new.fats - original.fats),
        }
    }

    /// Worst deviation in kcal: the raw calorie delta or the 4/4/9 calorie
    /// equivalent of a macro delta, whichever is largest.
    pub fn worst_case_kcal(&self) -> f64 {
        [
            self.calories.abs(),
            (self.proteins * KCAL_PER_G_PROTEIN).abs(),
            (self.carbs * KCAL_PER_G_CARB).abs(),
            (self.fats * KCAL_PER_G_FAT).abs(),
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }
}

/// How closely a substitute preserves the original slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum MatchVerdict {
    Good,
    Approximate { tolerance_kcal: f64 },
}

impl MatchVerdict {
    pub fn is_good(&self) -> bool {
        matches!(self, MatchVerdict::Good)
    }
}

/// Classify a delta. Thresholds are inclusive.
pub fn classify(delta: &MacroDelta) -> MatchVerdict {
    let good = delta.calories.abs() <= GOOD_MATCH_MAX_CALORIES
        && delta.proteins.abs() <= GOOD_MATCH_MAX_PROTEINS
        && delta.carbs.abs() <= GOOD_MATCH_MAX_CARBS
        && delta.fats.abs() <= GOOD_MATCH_MAX_FATS;

    if good {
        MatchVerdict::Good
    } else {
        MatchVerdict::Approximate {
            tolerance_kcal: delta.worst_case_kcal(),
        }
    }
}

/// Allowed range for one macro around a coach target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroRange {
    pub kind: MacroKind,
    pub min: f64,
    pub max: f64,
    pub actual: f64,
}

impl MacroRange {
    fn new(kind: MacroKind, target: f64, variance: f64, actual: f64) -> Self {
        Self {
            kind,
            min: target * (1.0 - variance),
            max: target * (1.0 + variance),
            actual,
        }
    }

    pub fn contains_actual(&self) -> bool {
        self.actual >= self.min && self.actual <= self.max
    }

    /// Operator-facing description of a violated range.
    pub fn describe(&self) -> String {
        format!(
            "{}: {:.0}-{:.0} {} (actual: {:.0} {})",
            self.kind,
            round_half_up(self.min),
            round_half_up(self.max),
            self.kind.unit(),
            round_half_up(self.actual),
            self.kind.unit()
        )
    }
}

/// Result of checking portion macros against coach targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarianceReport {
    pub ranges: Vec<MacroRange>,
}

impl VarianceReport {
    pub fn calories_in_range(&self) -> bool {
        self.ranges
            .iter()
            .any(|r| r.kind == MacroKind::Calories && r.contains_actual())
    }

    pub fn in_range_count(&self) -> usize {
        self.ranges.iter().filter(|r| r.contains_actual()).count()
    }

    /// Calories have priority; otherwise at least three of four must hold.
    pub fn is_valid(&self) -> bool {
        self.calories_in_range() || self.in_range_count() >= MIN_MACROS_IN_RANGE
    }

    /// Descriptions of every out-of-range macro.
    pub fn violations(&self) -> Vec<String> {
        self.ranges
            .iter()
            .filter(|r| !r.contains_actual())
            .map(MacroRange::describe)
            .collect()
    }
}

/// Check `actual` against `targets` with a relative `variance` (0.15 = ±15%).
pub fn check_variance(actual: &Macros, targets: &Macros, variance: f64) -> VarianceReport {
    let ranges = MacroKind::ALL
        .into_iter()
        .map(|kind| MacroRange::new(kind, targets.get(kind), variance, actual.get(kind)))
        .collect();
    VarianceReport { ranges }
}

/// Sum of absolute differences to the targets, for ordering alternatives.
pub fn distance_to_targets(actual: &Macros, targets: &Macros) -> f64 {
    MacroKind::ALL
        .into_iter()
        .map(|kind| (actual.get(kind) - targets.get(kind)).abs())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_match_boundary_inclusive() {
        let original = Macros::new(300.0, 20.0, 30.0, 10.0);
        let new = Macros::new(310.0, 22.0, 33.0, 12.0);
        let delta = MacroDelta::between(&original, &new);
        assert_eq!(classify(&delta), MatchVerdict::Good);
    }

    #[test]
    fn test_one_calorie_over_is_approximate() {
        let original = Macros::new(300.0, 20.0, 30.0, 10.0);
        let new = Macros::new(311.0, 22.0, 33.0, 12.0);
        let delta = MacroDelta::between(&original, &new);
        // max(11, 8, 12, 18) = 18
        assert_eq!(
            classify(&delta),
            MatchVerdict::Approximate { tolerance_kcal: 18.0 }
        );
    }

    #[test]
    fn test_negative_deltas_use_magnitude() {
        let delta = MacroDelta {
            calories: -35.0,
            proteins: -5.7,
            carbs: -0.7,
            fats: -1.0,
        };
        assert!(!classify(&delta).is_good());
        assert!((delta.worst_case_kcal() - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_variance_calories_priority() {
        let targets = Macros::new(400.0, 30.0, 40.0, 10.0);
        // Calories in range, every macro out of range
        let actual = Macros::new(420.0, 10.0, 80.0, 1.0);
        let report = check_variance(&actual, &targets, 0.15);
        assert!(report.calories_in_range());
        assert_eq!(report.in_range_count(), 1);
        assert!(report.is_valid());
        assert_eq!(report.violations().len(), 3);
    }

    #[test]
    fn test_variance_three_of_four() {
        let targets = Macros::new(400.0, 30.0, 40.0, 10.0);
        let actual = Macros::new(500.0, 31.0, 41.0, 10.5);
        let report = check_variance(&actual, &targets, 0.15);
        assert!(!report.calories_in_range());
        assert_eq!(report.in_range_count(), 3);
        assert!(report.is_valid());
    }

    #[test]
    fn test_variance_rejects() {
        let targets = Macros::new(400.0, 30.0, 40.0, 10.0);
        let actual = Macros::new(500.0, 10.0, 41.0, 10.5);
        let report = check_variance(&actual, &targets, 0.15);
        assert!(!report.is_valid());
        let violations = report.violations();
        assert_eq!(violations.len(), 2);
        assert!(violations[0].starts_with("calories: 340-460 kcal"));
    }

    #[test]
    fn test_distance_to_targets() {
        let targets = Macros::new(400.0, 30.0, 40.0, 10.0);
        let actual = Macros::new(390.0, 32.0, 40.0, 9.0);
        assert!((distance_to_targets(&actual, &targets) - 13.0).abs() < 1e-9);
    }
}
