use log::debug;
use reqwest::{Client, StatusCode};

use crate::error::RecipeFetchError;
use crate::model::Recipe;

/// Client for the recipe storage API.
pub struct RecipeStore {
    client: Client,
    base_url: String,
}

impl RecipeStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        RecipeStore {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Reads a single recipe by id.
    ///
    /// The id is used verbatim in the request path. Any failure is terminal
    /// for the load; no retry, no timeout.
    pub async fn fetch(&self, id: &str) -> Result<Recipe, RecipeFetchError> {
        let response = self
            .client
            .get(format!("{}/api/recipe/{}", self.base_url, id))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RecipeFetchError::NotFound(id.to_string()));
        }

        let recipe: Recipe = response.error_for_status()?.json().await?;
        debug!("fetched recipe {id}: {recipe:?}");
        Ok(recipe)
    }
}
