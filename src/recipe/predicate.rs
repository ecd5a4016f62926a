use crate::logic::Environment;
use crate::recipe::record::{Difficulty, Recipe};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named boolean test over a recipe.
pub type RecipePredicate = Box<dyn Fn(&Recipe) -> bool + Send + Sync>;

/// Caller-supplied cutoffs for the derived predicates. These are
/// configuration, not evaluator semantics: the expression core never sees
/// them, only the booleans they produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// `cheap` holds when price is strictly below this.
    pub cheap_price: f64,
    /// `quick` holds when the duration is at most this many minutes.
    pub quick_minutes: u32,
    /// `healthy` holds when calories are strictly below this.
    pub healthy_calories: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cheap_price: 4.0,
            quick_minutes: 15,
            healthy_calories: 400,
        }
    }
}

impl Thresholds {
    /// Loads thresholds from a JSON file; absent fields take the defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let thresholds = serde_json::from_str(&content)?;
        Ok(thresholds)
    }
}

/// An ordered set of named predicates that turns a recipe into the boolean
/// [`Environment`] the expression evaluator consumes.
///
/// # Example
///
/// ```
/// use larder::recipe::{PredicateSet, Thresholds};
///
/// let predicates = PredicateSet::from_thresholds(Thresholds::default())
///     .with_ingredient("chicken");
/// // defines: cheap, quick, healthy, easy, contains_chicken
/// ```
pub struct PredicateSet {
    predicates: Vec<(String, RecipePredicate)>,
}

impl PredicateSet {
    /// An empty set; use [`define`](Self::define) to add predicates.
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// The conventional predicate vocabulary, derived from thresholds:
    /// `cheap`, `quick`, `healthy`, and `easy`.
    pub fn from_thresholds(thresholds: Thresholds) -> Self {
        Self::new()
            .define("cheap", move |r| r.price < thresholds.cheap_price)
            .define("quick", move |r| r.time_minutes <= thresholds.quick_minutes)
            .define("healthy", move |r| r.calories < thresholds.healthy_calories)
            .define("easy", |r| r.difficulty == Difficulty::Easy)
    }

    /// Adds (or replaces) a named predicate.
    pub fn define(
        mut self,
        name: impl Into<String>,
        predicate: impl Fn(&Recipe) -> bool + Send + Sync + 'static,
    ) -> Self {
        let name = name.into();
        self.predicates.retain(|(n, _)| *n != name);
        self.predicates.push((name, Box::new(predicate)));
        self
    }

    /// Adds a `contains_<ingredient>` predicate, matching the ingredient
    /// list case-insensitively.
    pub fn with_ingredient(self, ingredient: &str) -> Self {
        let needle = ingredient.to_lowercase();
        let name = format!("contains_{}", needle);
        self.define(name, move |r| r.has_ingredient(&needle))
    }

    /// The defined predicate names, in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.predicates.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Evaluates every predicate against one recipe, producing the
    /// environment for a single expression evaluation.
    pub fn environment(&self, recipe: &Recipe) -> Environment {
        self.predicates
            .iter()
            .map(|(name, predicate)| (name.clone(), predicate(recipe)))
            .collect()
    }
}

impl Default for PredicateSet {
    fn default() -> Self {
        Self::from_thresholds(Thresholds::default())
    }
}
