use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty labels form a closed set; anything else is rejected at
/// construction with `ValidationError::UnknownDifficulty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(ValidationError::UnknownDifficulty(other.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// One recipe's structured data, immutable once loaded.
///
/// The name doubles as the record's identifier and compares
/// case-insensitively. Price is validated non-negative and finite at
/// construction; duration and calories are non-negative by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub time_minutes: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub calories: u32,
    pub difficulty: Difficulty,
}

impl Recipe {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        time_minutes: u32,
        ingredients: Vec<String>,
        steps: Vec<String>,
        calories: u32,
        difficulty: Difficulty,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !price.is_finite() {
            return Err(ValidationError::NonFinitePrice { name });
        }
        if price < 0.0 {
            return Err(ValidationError::NegativePrice { name, price });
        }
        Ok(Self {
            name,
            category: category.into(),
            price,
            time_minutes,
            ingredients,
            steps,
            calories,
            difficulty,
        })
    }

    /// Case-insensitive identity comparison against another recipe name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Whether any ingredient contains `needle`, case-insensitively.
    pub fn has_ingredient(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.ingredients
            .iter()
            .any(|i| i.to_lowercase().contains(&needle))
    }
}

impl fmt::Display for Recipe {
    /// One-line summary: `Chicken Salad [main] - $5.50 (15 min)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] - ${:.2} ({} min)",
            self.name, self.category, self.price, self.time_minutes
        )
    }
}
