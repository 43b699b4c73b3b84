pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod instructions;
pub mod loader;
pub mod model;
pub mod render;

pub use config::ViewConfig;
pub use error::{ImageGenerationError, RecipeFetchError, ViewError};
pub use loader::{
    ImageState, LoadOutcome, LoadState, LoadTicket, RecipeLoader, DEFAULT_RECIPE_NAME,
};
pub use model::Recipe;
pub use render::{render, CardView, RecipeCard};

use api::image::ImageSynthesizer;
use api::recipe::RecipeStore;

/// Builds a loader wired to the configured collaborators.
pub fn loader_from_config(config: &ViewConfig) -> RecipeLoader {
    let store = RecipeStore::new(config.recipe_api.clone());
    let synthesizer = ImageSynthesizer::new(config.image_api.clone(), config.image_api_key.clone());
    RecipeLoader::new(store, synthesizer)
}

/// Fetches a recipe by id, returning the raw record without rendering.
pub async fn fetch_recipe(config: &ViewConfig, id: &str) -> Result<Recipe, RecipeFetchError> {
    RecipeStore::new(config.recipe_api.clone()).fetch(id).await
}

/// Loads a recipe and its illustrative image, then renders the card view.
///
/// Never fails: fetch failures settle into the not-found view or the image
/// placeholder, matching what the loader would show interactively.
pub async fn view_recipe(config: &ViewConfig, id: &str) -> CardView {
    let mut loader = loader_from_config(config);
    loader.load(id).await;
    render(loader.load_state(), loader.image_state())
}

/// Loads and renders a recipe, then exports the view as a document.
pub async fn export_recipe(
    config: &ViewConfig,
    id: &str,
    path: &std::path::Path,
) -> Result<CardView, ViewError> {
    let view = view_recipe(config, id).await;
    export::export_card(&view, path)?;
    Ok(view)
}
