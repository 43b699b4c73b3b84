use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::error::ImageGenerationError;

/// Negative prompt sent with every request to keep the dish renders usable.
const NEGATIVE_PROMPT: &str = "((out of frame)), ((extra fingers)), mutated hands, ((poorly drawn hands)), ((poorly drawn face)), (((mutation))), (((deformed))), (((tiling))), ((naked)), ((tile)), ((fleshpile)), ((ugly)), (((abstract))), blurry, ((bad anatomy)), ((bad proportions)), ((extra limbs)), cloned face, (((skinny))), glitchy, ((extra breasts)), ((double torso)), ((extra arms)), ((extra hands)), ((mangled fingers)), ((missing breasts)), (missing lips), ((ugly face)), ((fat)), ((extra legs)), anime";

// Fixed generation parameters; only the prompt varies per request. The
// service expects the numeric-looking ones as strings.
const WIDTH: &str = "512";
const HEIGHT: &str = "512";
const SAMPLES: &str = "1";
const INFERENCE_STEPS: &str = "20";
const GUIDANCE_SCALE: f64 = 7.5;

/// Client for the text-to-image service.
pub struct ImageSynthesizer {
    client: Client,
    endpoint: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct SynthesisResponse {
    status: String,
    #[serde(default)]
    output: Vec<String>,
    message: Option<String>,
}

impl ImageSynthesizer {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        ImageSynthesizer {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Requests one illustrative image for the named dish and returns its
    /// URL (the first element of the service's output array).
    pub async fn generate(&self, recipe_name: &str) -> Result<String, ImageGenerationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({
                "key": self.api_key,
                "prompt": format!("A delicious {recipe_name} dish"),
                "negative_prompt": NEGATIVE_PROMPT,
                "width": WIDTH,
                "height": HEIGHT,
                "samples": SAMPLES,
                "num_inference_steps": INFERENCE_STEPS,
                "seed": null,
                "guidance_scale": GUIDANCE_SCALE,
                "webhook": null,
                "track_id": null
            }))
            .send()
            .await?;

        let body: SynthesisResponse = response.json().await?;
        debug!("image service response: {body:?}");

        if body.status != "success" {
            return Err(ImageGenerationError::Rejected(
                body.message.unwrap_or(body.status),
            ));
        }

        body.output
            .into_iter()
            .next()
            .ok_or(ImageGenerationError::EmptyOutput)
    }
}
