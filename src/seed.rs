//! Built-in starter data used when the store has nothing saved yet.

use crate::types::{new_id, Ingredient, PantryItem, Recipe};

fn ingredient(name: &str, amount: f64, unit: &str) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        amount,
        unit: unit.to_string(),
    }
}

/// The default recipe collection for a fresh install.
pub fn default_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: new_id(),
            title: "Spinach Ricotta Cannelloni".to_string(),
            description: "A melting Italian classic, perfect for the whole family.".to_string(),
            servings: 4,
            ingredients: vec![
                ingredient("Cannelloni tubes", 12.0, "tubes"),
                ingredient("Ricotta", 500.0, "g"),
                ingredient("Fresh spinach", 400.0, "g"),
                ingredient("Parmesan", 100.0, "g"),
                ingredient("Tomato sauce", 500.0, "ml"),
                ingredient("Garlic", 2.0, "cloves"),
            ],
            steps: vec![
                "Saute the spinach with the garlic.".to_string(),
                "Mix the chopped spinach with the ricotta and parmesan.".to_string(),
                "Fill the cannelloni with the mixture.".to_string(),
                "Cover with tomato sauce and bake 25 min at 200C.".to_string(),
            ],
            image_url: None,
            prep_time: Some("45 min".to_string()),
            category: Some("Italian".to_string()),
        },
        Recipe {
            id: new_id(),
            title: "Avocado Toast with Poached Egg".to_string(),
            description: "The ideal breakfast, or a quick and healthy brunch.".to_string(),
            servings: 1,
            ingredients: vec![
                ingredient("Sourdough bread", 2.0, "slices"),
                ingredient("Avocado", 1.0, "unit"),
                ingredient("Eggs", 2.0, "units"),
                ingredient("Chili flakes", 1.0, "pinch"),
            ],
            steps: vec![
                "Toast the bread.".to_string(),
                "Mash the avocado with salt and lemon.".to_string(),
                "Poach the eggs for 3 minutes in simmering water.".to_string(),
                "Assemble and sprinkle with chili flakes.".to_string(),
            ],
            image_url: None,
            prep_time: Some("15 min".to_string()),
            category: Some("Brunch".to_string()),
        },
    ]
}

/// The default pantry for a fresh install.
pub fn default_pantry() -> Vec<PantryItem> {
    vec![
        PantryItem {
            id: new_id(),
            name: "Flour".to_string(),
            amount: 1000.0,
            unit: "g".to_string(),
            category: "Dry goods".to_string(),
        },
        PantryItem {
            id: new_id(),
            name: "Eggs".to_string(),
            amount: 6.0,
            unit: "units".to_string(),
            category: "Fresh".to_string(),
        },
        PantryItem {
            id: new_id(),
            name: "Tomato sauce".to_string(),
            amount: 200.0,
            unit: "ml".to_string(),
            category: "Canned".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique() {
        let pantry = default_pantry();
        let mut ids: Vec<_> = pantry.iter().map(|i| i.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), pantry.len());
    }

    #[test]
    fn seed_recipes_have_positive_servings() {
        for recipe in default_recipes() {
            assert!(recipe.servings >= 1, "{}", recipe.title);
        }
    }
}
