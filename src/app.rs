//! Application state controller.
//!
//! Sole owner of the recipe, pantry, and shopping-list collections plus the
//! currently selected recipe and the AI busy flag. Every mutation goes
//! through a named operation here, and any operation that changes a
//! collection writes it through to the store before returning.

use thiserror::Error;

use crate::ai::{AiError, RecipeAi};
use crate::ai::prompts;
use crate::store::{KvStore, StateStore};
use crate::types::{new_id, Ingredient, NewPantryItem, PantryItem, Recipe, ShoppingItem};

/// Dish name used when the suggestion step returns nothing usable.
const FALLBACK_DISH: &str = "Ratatouille Express";

/// Category tag applied to generated recipes.
const GENERATED_CATEGORY: &str = "AI-inspired";

/// Prep-time placeholder for generated recipes.
const GENERATED_PREP_TIME: &str = "25 min";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("A recipe generation is already in flight")]
    Busy,

    #[error(transparent)]
    Ai(#[from] AiError),
}

/// The application state controller.
pub struct App<S: KvStore> {
    recipes: Vec<Recipe>,
    pantry: Vec<PantryItem>,
    shopping_list: Vec<ShoppingItem>,
    selected: Option<Recipe>,
    ai_busy: bool,
    store: StateStore<S>,
}

impl<S: KvStore> App<S> {
    /// Hydrate the controller from the store. Absent keys fall back to the
    /// built-in seed collections.
    pub fn load(store: S) -> Self {
        let store = StateStore::new(store);
        Self {
            recipes: store.load_recipes(),
            pantry: store.load_pantry(),
            shopping_list: store.load_shopping(),
            selected: None,
            ai_busy: false,
            store,
        }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn pantry(&self) -> &[PantryItem] {
        &self.pantry
    }

    /// The shopping list with `is_missing` recomputed from current pantry
    /// contents: missing means no pantry entry of the same name
    /// (case-insensitive) holds at least the required amount.
    pub fn shopping_list(&self) -> Vec<ShoppingItem> {
        self.shopping_list
            .iter()
            .map(|item| {
                let in_stock = self
                    .pantry
                    .iter()
                    .find(|p| p.name.eq_ignore_ascii_case(&item.name));
                ShoppingItem {
                    is_missing: in_stock.map_or(true, |p| p.amount < item.amount),
                    ..item.clone()
                }
            })
            .collect()
    }

    pub fn selected_recipe(&self) -> Option<&Recipe> {
        self.selected.as_ref()
    }

    pub fn is_ai_busy(&self) -> bool {
        self.ai_busy
    }

    /// Append a pantry item with a fresh id, returning the id.
    pub fn add_pantry_item(&mut self, item: NewPantryItem) -> String {
        let id = new_id();
        self.pantry.push(PantryItem {
            id: id.clone(),
            name: item.name,
            amount: item.amount,
            unit: item.unit,
            category: item.category,
        });
        self.store.save_pantry(&self.pantry);
        id
    }

    /// Replace a pantry item's amount, clamped at zero. Unknown ids are a
    /// silent no-op.
    pub fn update_pantry_amount(&mut self, id: &str, amount: f64) {
        let Some(item) = self.pantry.iter_mut().find(|i| i.id == id) else {
            return;
        };
        item.amount = amount.max(0.0);
        self.store.save_pantry(&self.pantry);
    }

    /// Remove a pantry item. Unknown ids are a silent no-op.
    pub fn remove_pantry_item(&mut self, id: &str) {
        let before = self.pantry.len();
        self.pantry.retain(|i| i.id != id);
        if self.pantry.len() != before {
            self.store.save_pantry(&self.pantry);
        }
    }

    /// Append a batch of ingredients to the shopping list, each with a fresh
    /// id and `checked = false`. Returns the number of items added.
    pub fn add_ingredients_to_shopping_list(&mut self, ingredients: Vec<Ingredient>) -> usize {
        let count = ingredients.len();
        self.shopping_list
            .extend(ingredients.into_iter().map(|ing| ShoppingItem {
                id: new_id(),
                name: ing.name,
                amount: ing.amount,
                unit: ing.unit,
                checked: false,
                is_missing: false,
            }));
        if count > 0 {
            self.store.save_shopping(&self.shopping_list);
        }
        count
    }

    /// Flip an item's checked state. Unknown ids are a silent no-op.
    pub fn toggle_shopping_item(&mut self, id: &str) {
        let Some(item) = self.shopping_list.iter_mut().find(|i| i.id == id) else {
            return;
        };
        item.checked = !item.checked;
        self.store.save_shopping(&self.shopping_list);
    }

    /// Remove a shopping-list item. Unknown ids are a silent no-op.
    pub fn remove_shopping_item(&mut self, id: &str) {
        let before = self.shopping_list.len();
        self.shopping_list.retain(|i| i.id != id);
        if self.shopping_list.len() != before {
            self.store.save_shopping(&self.shopping_list);
        }
    }

    /// Remove every shopping-list item.
    pub fn clear_shopping_list(&mut self) {
        self.shopping_list.clear();
        self.store.save_shopping(&self.shopping_list);
    }

    /// Set or clear the currently viewed recipe. UI state only; collections
    /// and the store are untouched.
    pub fn select_recipe(&mut self, recipe: Option<Recipe>) {
        self.selected = recipe;
    }

    /// Append a recipe created outside the AI workflow.
    pub fn add_recipe(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
        self.store.save_recipes(&self.recipes);
    }

    /// The AI-assisted generation workflow: suggest a dish from pantry
    /// contents, parse a structured recipe for it, illustrate it, then
    /// prepend and select the assembled recipe.
    ///
    /// A second invocation while one is in flight is rejected with
    /// [`GenerateError::Busy`]. Any provider failure aborts the workflow
    /// with the recipe collection unchanged; the busy flag is cleared on
    /// every exit path.
    pub async fn generate_recipe(&mut self, ai: &RecipeAi) -> Result<Recipe, GenerateError> {
        if self.ai_busy {
            return Err(GenerateError::Busy);
        }
        self.ai_busy = true;
        let result = self.run_generation(ai).await;
        self.ai_busy = false;
        result
    }

    async fn run_generation(&mut self, ai: &RecipeAi) -> Result<Recipe, GenerateError> {
        let pantry_names: Vec<String> = self.pantry.iter().map(|i| i.name.clone()).collect();

        let suggestions = ai.suggest_recipe_names(&pantry_names).await?;
        let dish = suggestions
            .first()
            .map(|s| s.trim_start_matches(['-', '*', ' ']).to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| FALLBACK_DISH.to_string());

        let instruction = prompts::render_generation_instruction(&dish, &pantry_names);
        let draft = ai.parse_recipe_text(&instruction).await?;

        let title = draft.title.unwrap_or_else(|| dish.clone());
        let image_url = ai.generate_image(&title).await?;

        let recipe = Recipe {
            id: new_id(),
            title,
            description: draft
                .description
                .unwrap_or_else(|| "A delicious recipe generated just for you.".to_string()),
            servings: draft.servings.unwrap_or(4),
            ingredients: draft.ingredients,
            steps: draft.steps,
            image_url,
            prep_time: Some(GENERATED_PREP_TIME.to_string()),
            category: Some(GENERATED_CATEGORY.to_string()),
        };

        self.recipes.insert(0, recipe.clone());
        self.selected = Some(recipe.clone());
        self.store.save_recipes(&self.recipes);

        Ok(recipe)
    }
}
