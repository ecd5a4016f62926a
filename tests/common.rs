//! Common test utilities for building recipes and environments.
use larder::prelude::*;

/// Builds an environment from name/value pairs.
#[allow(dead_code)]
pub fn env_of(pairs: &[(&str, bool)]) -> Environment {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

#[allow(dead_code)]
pub fn recipe(
    name: &str,
    category: &str,
    price: f64,
    time_minutes: u32,
    calories: u32,
    difficulty: Difficulty,
) -> Recipe {
    Recipe::new(
        name,
        category,
        price,
        time_minutes,
        vec!["salt".to_string(), "pepper".to_string()],
        vec!["Cook it".to_string()],
        calories,
        difficulty,
    )
    .unwrap()
}

/// A small fixture collection with known prices, times, and calories.
#[allow(dead_code)]
pub fn sample_book() -> RecipeBook {
    let mut book = RecipeBook::new();
    book.add(
        Recipe::new(
            "Chicken Salad",
            "main",
            5.50,
            15,
            vec![
                "chicken".to_string(),
                "lettuce".to_string(),
                "dressing".to_string(),
            ],
            vec!["Combine everything".to_string()],
            350,
            Difficulty::Easy,
        )
        .unwrap(),
    );
    book.add(
        Recipe::new(
            "Lentil Soup",
            "soup",
            3.00,
            25,
            vec![
                "lentils".to_string(),
                "carrot".to_string(),
                "onion".to_string(),
            ],
            vec!["Simmer until soft".to_string()],
            320,
            Difficulty::Easy,
        )
        .unwrap(),
    );
    book.add(
        Recipe::new(
            "Tomato Pasta",
            "main",
            2.50,
            12,
            vec![
                "pasta".to_string(),
                "tomato".to_string(),
                "garlic".to_string(),
            ],
            vec!["Boil pasta".to_string(), "Add sauce".to_string()],
            550,
            Difficulty::Medium,
        )
        .unwrap(),
    );
    book.add(
        Recipe::new(
            "Fruit Bowl",
            "dessert",
            2.00,
            5,
            vec!["apple".to_string(), "banana".to_string()],
            vec!["Chop and mix".to_string()],
            180,
            Difficulty::Easy,
        )
        .unwrap(),
    );
    book.add(
        Recipe::new(
            "Beef Stew",
            "main",
            6.00,
            90,
            vec![
                "beef".to_string(),
                "potato".to_string(),
                "carrot".to_string(),
            ],
            vec!["Brown the beef".to_string(), "Stew slowly".to_string()],
            700,
            Difficulty::Hard,
        )
        .unwrap(),
    );
    book
}
