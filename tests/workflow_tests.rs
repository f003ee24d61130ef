//! Workflow-level tests driving the public API with a fake provider and an
//! in-memory store.

use larder::{
    App, FakeProvider, Ingredient, InlineImage, MemoryStore, RecipeAi, PANTRY_KEY, RECIPES_KEY,
};

fn fake_ai(provider: FakeProvider) -> RecipeAi {
    RecipeAi::new(Box::new(provider))
}

#[tokio::test]
async fn generation_prepends_and_selects_the_new_recipe() {
    let store = MemoryStore::new();
    let mut app = App::load(store.clone());
    let before = app.recipes().len();

    let provider = FakeProvider::with_kitchen_responses()
        .with_image(InlineImage::from_bytes("image/png", b"galette pixels"));
    let recipe = app.generate_recipe(&fake_ai(provider)).await.unwrap();

    assert_eq!(app.recipes().len(), before + 1);
    assert_eq!(app.recipes()[0], recipe, "new recipe is prepended");
    assert_eq!(recipe.title, "Rustic Flour Galette");
    assert_eq!(recipe.servings, 2);
    assert_eq!(recipe.category.as_deref(), Some("AI-inspired"));
    assert_eq!(recipe.prep_time.as_deref(), Some("25 min"));
    assert!(recipe
        .image_url
        .as_deref()
        .unwrap()
        .starts_with("data:image/png;base64,"));
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.steps.len(), 3);

    assert_eq!(app.selected_recipe(), Some(&recipe));
    assert!(!app.is_ai_busy());

    // The grown collection was written through.
    let payload = store.writes_for(RECIPES_KEY).pop().unwrap();
    assert!(payload.contains("Rustic Flour Galette"));
}

#[tokio::test]
async fn generation_applies_fallbacks_for_sparse_results() {
    let mut app = App::load(MemoryStore::new());

    // Suggestions degenerate to a bare list marker; the parse returns an
    // empty object; no image comes back.
    let provider =
        FakeProvider::with_response("Suggest", "- ").with_default_response("{}");
    let recipe = app.generate_recipe(&fake_ai(provider)).await.unwrap();

    assert_eq!(recipe.title, "Ratatouille Express");
    assert_eq!(recipe.description, "A delicious recipe generated just for you.");
    assert_eq!(recipe.servings, 4);
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.steps.is_empty());
    assert!(recipe.image_url.is_none());
}

#[tokio::test]
async fn suggestion_failure_leaves_recipes_unchanged() {
    let store = MemoryStore::new();
    let mut app = App::load(store.clone());
    let before = app.recipes().to_vec();

    // No responses registered and no default: the first call fails.
    let err = app.generate_recipe(&fake_ai(FakeProvider::new())).await;

    assert!(err.is_err());
    assert_eq!(app.recipes(), before);
    assert!(app.selected_recipe().is_none());
    assert!(!app.is_ai_busy());
    assert!(store.writes_for(RECIPES_KEY).is_empty());
}

#[tokio::test]
async fn parse_failure_leaves_recipes_unchanged() {
    let store = MemoryStore::new();
    let mut app = App::load(store.clone());
    let before = app.recipes().to_vec();

    // Suggestions succeed, then the parse call has nothing to answer with.
    let provider = FakeProvider::with_response("Suggest", "- Tomato Egg Shakshuka");
    let err = app.generate_recipe(&fake_ai(provider)).await;

    assert!(err.is_err());
    assert_eq!(app.recipes(), before);
    assert!(!app.is_ai_busy());
    assert!(store.writes_for(RECIPES_KEY).is_empty());
}

#[tokio::test]
async fn image_failure_leaves_recipes_unchanged() {
    let store = MemoryStore::new();
    let mut app = App::load(store.clone());
    let before = app.recipes().to_vec();

    let provider = FakeProvider::with_kitchen_responses().with_failing_images();
    let err = app.generate_recipe(&fake_ai(provider)).await;

    assert!(err.is_err());
    assert_eq!(app.recipes(), before, "no partial recipe is committed");
    assert!(!app.is_ai_busy());
    assert!(store.writes_for(RECIPES_KEY).is_empty());
}

#[tokio::test]
async fn generation_can_be_retried_after_a_failure() {
    let mut app = App::load(MemoryStore::new());

    let failing = FakeProvider::with_kitchen_responses().with_failing_images();
    assert!(app.generate_recipe(&fake_ai(failing)).await.is_err());

    let working = FakeProvider::with_kitchen_responses();
    let recipe = app.generate_recipe(&fake_ai(working)).await.unwrap();
    assert_eq!(recipe.title, "Rustic Flour Galette");
}

#[test]
fn pantry_update_writes_through_the_exact_collection() {
    let store = MemoryStore::new();
    let mut app = App::load(store.clone());

    // Seed pantry: Flour 1000 g, Eggs 6 units, Tomato sauce 200 ml.
    let eggs_id = app
        .pantry()
        .iter()
        .find(|i| i.name == "Eggs")
        .unwrap()
        .id
        .clone();
    app.update_pantry_amount(&eggs_id, 4.0);

    let amounts: Vec<(String, f64)> = app
        .pantry()
        .iter()
        .map(|i| (i.name.clone(), i.amount))
        .collect();
    assert_eq!(
        amounts,
        vec![
            ("Flour".to_string(), 1000.0),
            ("Eggs".to_string(), 4.0),
            ("Tomato sauce".to_string(), 200.0),
        ]
    );

    // The write-through payload for the pantry key carries exactly the
    // in-memory collection.
    let payload = store.writes_for(PANTRY_KEY).pop().unwrap();
    assert_eq!(payload, serde_json::to_string(app.pantry()).unwrap());
}

#[test]
fn shopping_mutations_write_through() {
    let store = MemoryStore::new();
    let mut app = App::load(store.clone());

    app.add_ingredients_to_shopping_list(vec![Ingredient {
        name: "Ricotta".to_string(),
        amount: 250.0,
        unit: "g".to_string(),
    }]);
    let id = app.shopping_list()[0].id.clone();
    app.toggle_shopping_item(&id);
    app.remove_shopping_item(&id);

    let writes = store.writes_for(larder::SHOPPING_KEY);
    assert_eq!(writes.len(), 3, "add, toggle, and remove each write through");
    assert_eq!(writes.last().unwrap(), "[]");
}
