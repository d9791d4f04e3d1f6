use serde::{Deserialize, Serialize};

/// One of the four tracked macro values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacroKind {
    Calories,
    Proteins,
    Carbs,
    Fats,
}

impl MacroKind {
    pub const ALL: [MacroKind; 4] = [
        MacroKind::Calories,
        MacroKind::Proteins,
        MacroKind::Carbs,
        MacroKind::Fats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MacroKind::Calories => "calories",
            MacroKind::Proteins => "proteins",
            MacroKind::Carbs => "carbs",
            MacroKind::Fats => "fats",
        }
    }

    /// Unit shown next to a value of this kind.
    pub fn unit(&self) -> &'static str {
        match self {
            MacroKind::Calories => "kcal",
            _ => "g",
        }
    }
}

impl std::fmt::Display for MacroKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calories plus protein, carb and fat grams.
///
/// The same shape is used for per-100g profiles, caller-supplied targets and
/// the macros delivered by a computed portion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Macro composition a meal slot should retain after a substitution.
pub type MacroTarget = Macros;

impl Macros {
    pub const fn new(calories: f64, proteins: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            proteins,
            carbs,
            fats,
        }
    }

    #[inline]
    pub fn get(&self, kind: MacroKind) -> f64 {
        match kind {
            MacroKind::Calories => self.calories,
            MacroKind::Proteins => self.proteins,
            MacroKind::Carbs => self.carbs,
            MacroKind::Fats => self.fats,
        }
    }

    /// Multiply every value by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            proteins: self.proteins * factor,
            carbs: self.carbs * factor,
            fats: self.fats * factor,
        }
    }

    /// Calories to the nearest integer, the three macros to one decimal.
    pub fn rounded(&self) -> Self {
        Self {
            calories: round_half_up(self.calories),
            proteins: round_to_tenth(self.proteins),
            carbs: round_to_tenth(self.carbs),
            fats: round_to_tenth(self.fats),
        }
    }

    /// True when every value is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        MacroKind::ALL
            .iter()
            .map(|k| self.get(*k))
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

impl std::ops::Add for Macros {
    type Output = Macros;

    fn add(self, other: Macros) -> Macros {
        Macros {
            calories: self.calories + other.calories,
            proteins: self.proteins + other.proteins,
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
        }
    }
}

impl std::iter::Sum for Macros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Macros::default(), |acc, m| acc + m)
    }
}

/// Round to the nearest integer, halves going up (toward +inf).
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, halves going up.
#[inline]
pub fn round_to_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Round to the nearest multiple of `step`, halves going up.
#[inline]
pub fn round_to_step(value: f64, step: f64) -> f64 {
    round_half_up(value / step) * step
}
