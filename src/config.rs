use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Endpoints and credentials for the two remote collaborators.
#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    /// Base URL of the recipe storage API
    #[serde(default = "default_recipe_api")]
    pub recipe_api: String,
    /// Endpoint of the text-to-image service
    #[serde(default = "default_image_api")]
    pub image_api: String,
    /// Credential sent in the body of every image request
    #[serde(default)]
    pub image_api_key: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            recipe_api: default_recipe_api(),
            image_api: default_image_api(),
            image_api_key: String::new(),
        }
    }
}

fn default_recipe_api() -> String {
    "http://localhost:5000".to_string()
}

fn default_image_api() -> String {
    "https://stablediffusionapi.com/api/v3/text2img".to_string()
}

impl ViewConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_CARD__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_CARD__IMAGE_API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

/// See [`ViewConfig::load`].
pub fn load_config() -> Result<ViewConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_CARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
