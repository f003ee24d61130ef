use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generate a fresh entity identifier.
///
/// All collections use the same scheme: a random UUID rendered as a string.
/// Ids are unique within a collection; nothing relies on cross-collection
/// uniqueness.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A quantity of a named ingredient. Value type with no identity; embedded
/// in recipes and shopping-list items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// A stored recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Recipe {
    /// Ingredients scaled to a target serving count.
    pub fn ingredients_for_servings(&self, servings: u32) -> Vec<Ingredient> {
        scale_ingredients(&self.ingredients, self.servings, servings)
    }
}

/// A tracked pantry entry with an on-hand quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: String,
}

/// Fields for a pantry entry before an id has been assigned.
#[derive(Debug, Clone)]
pub struct NewPantryItem {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub category: String,
}

/// An entry on the shopping list.
///
/// `is_missing` is a derived signal (not enough of the ingredient on hand in
/// the pantry). It is recomputed from current pantry contents on every read
/// and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub checked: bool,
    #[serde(skip)]
    pub is_missing: bool,
}

/// The partial recipe shape returned by the structured AI parse.
///
/// Every field is defaulted so a sparse or malformed response decodes to
/// something usable; the caller applies per-field fallbacks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl RecipeDraft {
    /// True if the parse produced nothing at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.servings.is_none()
            && self.ingredients.is_empty()
            && self.steps.is_empty()
    }
}

/// Scale a list of ingredients from one serving count to another.
///
/// Each amount is multiplied by `to / from` and rounded to one decimal
/// place. A `from` of zero would make the ratio meaningless, so the list is
/// returned unscaled in that case.
pub fn scale_ingredients(ingredients: &[Ingredient], from: u32, to: u32) -> Vec<Ingredient> {
    if from == 0 || from == to {
        return ingredients.to_vec();
    }

    let factor = f64::from(to) / f64::from(from);
    ingredients
        .iter()
        .map(|ing| Ingredient {
            name: ing.name.clone(),
            amount: (ing.amount * factor * 10.0).round() / 10.0,
            unit: ing.unit.clone(),
        })
        .collect()
}
