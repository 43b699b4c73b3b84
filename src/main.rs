use std::env;
use std::path::Path;

use recipe_card::export::{export_card, EXPORT_FILE_NAME};
use recipe_card::{loader_from_config, render, ViewConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let id = args.get(1).ok_or("Please provide a recipe id as an argument")?;

    let config = ViewConfig::load()?;
    let mut loader = loader_from_config(&config);
    loader.load(id).await;

    let view = render(loader.load_state(), loader.image_state());
    println!("{view}");

    if let Some(position) = args.iter().position(|arg| arg == "--export") {
        let path = args
            .get(position + 1)
            .map(String::as_str)
            .unwrap_or(EXPORT_FILE_NAME);
        export_card(&view, Path::new(path))?;
    }

    Ok(())
}
