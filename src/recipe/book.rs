use crate::error::{EvalError, StoreError};
use crate::logic::Expression;
use crate::recipe::predicate::PredicateSet;
use crate::recipe::record::Recipe;
use crate::sort::Algorithm;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// One row of the flat-file format. `ingredients` and `steps` are
/// semicolon-joined inside a single CSV field.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    name: String,
    category: String,
    price: f64,
    time_minutes: u32,
    ingredients: String,
    steps: String,
    calories: u32,
    difficulty: String,
}

impl CsvRow {
    fn into_recipe(self) -> Result<Recipe, StoreError> {
        let difficulty = self.difficulty.parse()?;
        let recipe = Recipe::new(
            self.name,
            self.category,
            self.price,
            self.time_minutes,
            split_list(&self.ingredients),
            split_list(&self.steps),
            self.calories,
            difficulty,
        )?;
        Ok(recipe)
    }

    fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            category: recipe.category.clone(),
            price: recipe.price,
            time_minutes: recipe.time_minutes,
            ingredients: recipe.ingredients.join(";"),
            steps: recipe.steps.join(";"),
            calories: recipe.calories,
            difficulty: recipe.difficulty.to_string(),
        }
    }
}

fn split_list(field: &str) -> Vec<String> {
    field
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The in-memory recipe collection: flat-file persistence, search, boolean
/// filtering, and sorted views.
#[derive(Debug, Default)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a book from a CSV file with the columns
    /// `name,category,price,time_minutes,ingredients,steps,calories,difficulty`.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut recipes = Vec::new();
        for row in reader.deserialize() {
            let row: CsvRow = row?;
            recipes.push(row.into_recipe()?);
        }
        Ok(Self { recipes })
    }

    /// Writes the whole book back out in the same flat-file format.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_path(path)?;
        for recipe in &self.recipes {
            writer.serialize(CsvRow::from_recipe(recipe))?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn add(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
    }

    /// Removes every recipe with the given name (case-insensitive). Returns
    /// whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| !r.is_named(name));
        self.recipes.len() < before
    }

    /// Exact-name lookup, case-insensitive.
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.is_named(name))
    }

    /// Substring name search, case-insensitive.
    pub fn search_name(&self, term: &str) -> Vec<&Recipe> {
        let term = term.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Exact category match, case-insensitive.
    pub fn search_category(&self, category: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Recipes whose ingredient list mentions `ingredient` anywhere.
    pub fn search_ingredient(&self, ingredient: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|r| r.has_ingredient(ingredient))
            .collect()
    }

    /// Arbitrary caller-supplied filter.
    pub fn search_where(&self, predicate: impl Fn(&Recipe) -> bool) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| predicate(r)).collect()
    }

    /// Filters the book with a boolean expression over the predicate set's
    /// vocabulary, e.g. `"(cheap or quick) and healthy"`.
    ///
    /// The expression is parsed once and evaluated per recipe against the
    /// environment the predicate set builds for it.
    pub fn filter_expr(
        &self,
        expression: &str,
        predicates: &PredicateSet,
    ) -> Result<Vec<&Recipe>, EvalError> {
        let expr = Expression::from_str(expression)?;
        let mut matches = Vec::new();
        for recipe in &self.recipes {
            if expr.eval(&predicates.environment(recipe))? {
                matches.push(recipe);
            }
        }
        Ok(matches)
    }

    /// A sorted copy of the book's recipes, ordered ascending by `key` using
    /// the chosen algorithm. The book itself is left untouched.
    pub fn sorted_by<K, F>(&self, algorithm: Algorithm, key: F) -> Vec<Recipe>
    where
        K: Ord,
        F: Fn(&Recipe) -> K,
    {
        algorithm.sort_by_key(&self.recipes, key)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }
}

impl FromIterator<Recipe> for RecipeBook {
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        Self {
            recipes: iter.into_iter().collect(),
        }
    }
}
