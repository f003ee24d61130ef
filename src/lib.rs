pub mod ai;
pub mod app;
pub mod error;
pub mod seed;
pub mod store;
pub mod types;

pub use ai::{
    AiConfig, AiError, CompletionRequest, FakeProvider, GeminiProvider, GenerativeProvider,
    InlineImage, RecipeAi,
};
pub use app::{App, GenerateError};
pub use error::StoreError;
pub use store::{DiskStore, KvStore, MemoryStore, StateStore, PANTRY_KEY, RECIPES_KEY, SHOPPING_KEY};
pub use types::{
    new_id, scale_ingredients, Ingredient, NewPantryItem, PantryItem, Recipe, RecipeDraft,
    ShoppingItem,
};
