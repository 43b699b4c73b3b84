use log::error;

use crate::api::image::ImageSynthesizer;
use crate::api::recipe::RecipeStore;
use crate::instructions::ParsedInstructions;
use crate::model::Recipe;

/// Display name used when the instructions carry no `Recipe Name` section.
pub const DEFAULT_RECIPE_NAME: &str = "Delicious Recipe";

/// Outcome of the recipe fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Recipe),
    NotFound,
}

/// Outcome of the image fetch, tracked independently of [`LoadState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageState {
    #[default]
    Pending,
    Ready(String),
    Failed,
}

/// Tag for one load attempt.
///
/// Settling with a stale ticket is a no-op, so an in-flight load that was
/// superseded by a newer `begin` cannot overwrite fresher state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// Settled results of both fetches.
///
/// Each source's failure is captured here instead of propagating; an image
/// failure never degrades a loaded recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub load: LoadState,
    pub image: ImageState,
}

/// Orchestrates the two remote fetches and owns the resulting view state.
///
/// Single-writer: only `begin` and `settle` touch the state pair, and the
/// renderer only reads it.
pub struct RecipeLoader {
    store: RecipeStore,
    synthesizer: ImageSynthesizer,
    generation: u64,
    load: LoadState,
    image: ImageState,
}

impl RecipeLoader {
    pub fn new(store: RecipeStore, synthesizer: ImageSynthesizer) -> Self {
        RecipeLoader {
            store,
            synthesizer,
            generation: 0,
            load: LoadState::Loading,
            image: ImageState::Pending,
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn image_state(&self) -> &ImageState {
        &self.image
    }

    /// Starts a new load attempt: resets both state axes and returns the
    /// ticket the attempt's outcome must present to [`RecipeLoader::settle`].
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.load = LoadState::Loading;
        self.image = ImageState::Pending;
        LoadTicket {
            generation: self.generation,
        }
    }

    /// Runs both fetches in sequence and returns once both have settled.
    ///
    /// The image request is parameterized by the display name derived from
    /// the recipe, so it cannot start before the recipe fetch resolves. Its
    /// failure is folded into the outcome and never fails the recipe side.
    /// Neither request carries a timeout; a hung collaborator hangs the
    /// load.
    pub async fn fetch(&self, id: &str) -> LoadOutcome {
        let recipe = match self.store.fetch(id).await {
            Ok(recipe) => recipe,
            Err(err) => {
                error!("recipe fetch failed: {err}");
                return LoadOutcome {
                    load: LoadState::NotFound,
                    image: ImageState::Failed,
                };
            }
        };

        let name = display_name(&recipe);
        let image = match self.synthesizer.generate(&name).await {
            Ok(url) => ImageState::Ready(url),
            Err(err) => {
                error!("image generation failed: {err}");
                ImageState::Failed
            }
        };

        LoadOutcome {
            load: LoadState::Loaded(recipe),
            image,
        }
    }

    /// Applies an outcome if its ticket is still current. Returns whether
    /// it was applied.
    pub fn settle(&mut self, ticket: LoadTicket, outcome: LoadOutcome) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.load = outcome.load;
        self.image = outcome.image;
        true
    }

    /// Convenience composition of `begin`, `fetch` and `settle`.
    pub async fn load(&mut self, id: &str) {
        let ticket = self.begin();
        let outcome = self.fetch(id).await;
        self.settle(ticket, outcome);
    }
}

/// Display name from the `Recipe Name` section of the instructions; an
/// absent or empty section falls back to [`DEFAULT_RECIPE_NAME`].
pub fn display_name(recipe: &Recipe) -> String {
    ParsedInstructions::parse(&recipe.instructions)
        .recipe_name()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_RECIPE_NAME)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> RecipeLoader {
        // Endpoints are never hit by these tests.
        RecipeLoader::new(
            RecipeStore::new("http://127.0.0.1:9"),
            ImageSynthesizer::new("http://127.0.0.1:9/text2img", "unused"),
        )
    }

    #[test]
    fn test_begin_resets_both_axes() {
        let mut loader = loader();
        let ticket = loader.begin();
        let applied = loader.settle(
            ticket,
            LoadOutcome {
                load: LoadState::NotFound,
                image: ImageState::Failed,
            },
        );
        assert!(applied);
        assert_eq!(loader.load_state(), &LoadState::NotFound);

        loader.begin();
        assert_eq!(loader.load_state(), &LoadState::Loading);
        assert_eq!(loader.image_state(), &ImageState::Pending);
    }

    #[test]
    fn test_stale_ticket_does_not_settle() {
        let mut loader = loader();
        let stale = loader.begin();
        let current = loader.begin();

        let applied = loader.settle(
            stale,
            LoadOutcome {
                load: LoadState::NotFound,
                image: ImageState::Failed,
            },
        );
        assert!(!applied);
        assert_eq!(loader.load_state(), &LoadState::Loading);

        let applied = loader.settle(
            current,
            LoadOutcome {
                load: LoadState::Loaded(Recipe::default()),
                image: ImageState::Ready("https://img.example/dish.png".to_string()),
            },
        );
        assert!(applied);
        assert!(matches!(loader.load_state(), LoadState::Loaded(_)));
    }

    #[test]
    fn test_display_name_falls_back_when_absent_or_empty() {
        let mut recipe = Recipe::default();
        assert_eq!(display_name(&recipe), DEFAULT_RECIPE_NAME);

        recipe.instructions = "Recipe Name:\nInstructions: stir".to_string();
        assert_eq!(display_name(&recipe), DEFAULT_RECIPE_NAME);

        recipe.instructions = "Recipe Name: Tacos".to_string();
        assert_eq!(display_name(&recipe), "Tacos");
    }
}
