use std::fmt;

use crate::instructions::{capitalize_first, split_steps, ParsedInstructions};
use crate::loader::{ImageState, LoadState, DEFAULT_RECIPE_NAME};

/// Nutrition rows in display order.
pub const NUTRITION_FIELDS: [&str; 7] = [
    "Protein",
    "Carbs",
    "Fat",
    "Cholesterol",
    "Calories",
    "Texture",
    "Taste",
];

pub const LOADING_MESSAGE: &str = "Preparing your culinary masterpiece...";
pub const NOT_FOUND_MESSAGE: &str = "Oops! We could not find that recipe. Please try again.";

/// How the image slot renders alongside the recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageView {
    Pending,
    Ready(String),
    Failed,
}

/// Fully resolved card data, ready for display or export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeCard {
    pub name: String,
    pub ingredients: Vec<String>,
    pub nutrition: Vec<(&'static str, String)>,
    pub steps: Vec<String>,
    pub image: ImageView,
}

/// What the page shows for a given pair of loader states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardView {
    Loading,
    NotFound,
    Card(RecipeCard),
}

/// Resolves the loader's state pair into a displayable card.
///
/// Pure: upstream failures are reflected verbatim and never reinterpreted
/// here. A not-found load renders only the not-found message; nothing of a
/// partially fetched recipe leaks through.
pub fn render(load: &LoadState, image: &ImageState) -> CardView {
    let recipe = match load {
        LoadState::Loading => return CardView::Loading,
        LoadState::NotFound => return CardView::NotFound,
        LoadState::Loaded(recipe) => recipe,
    };

    let parsed = ParsedInstructions::parse(&recipe.instructions);
    let name = parsed
        .recipe_name()
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_RECIPE_NAME)
        .to_string();

    let ingredients = recipe
        .ingredient_list()
        .iter()
        .map(|item| capitalize_first(item))
        .collect();

    // A nutrition value may live on the recipe record or, failing that, in
    // a section of the instruction text with the same label.
    let nutrition = NUTRITION_FIELDS
        .iter()
        .map(|&field| {
            let value = recipe
                .nutrition(&field.to_lowercase())
                .filter(|value| !value.is_empty())
                .or_else(|| parsed.section(field).filter(|value| !value.is_empty()))
                .unwrap_or("N/A")
                .to_string();
            (field, value)
        })
        .collect();

    let steps = split_steps(parsed.instructions())
        .iter()
        .map(|step| capitalize_first(step))
        .collect();

    let image = match image {
        ImageState::Pending => ImageView::Pending,
        ImageState::Ready(url) => ImageView::Ready(url.clone()),
        ImageState::Failed => ImageView::Failed,
    };

    CardView::Card(RecipeCard {
        name,
        ingredients,
        nutrition,
        steps,
        image,
    })
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardView::Loading => writeln!(f, "{LOADING_MESSAGE}"),
            CardView::NotFound => writeln!(f, "{NOT_FOUND_MESSAGE}"),
            CardView::Card(card) => fmt::Display::fmt(card, f),
        }
    }
}

impl fmt::Display for RecipeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f)?;

        match &self.image {
            ImageView::Ready(url) => writeln!(f, "[image: {url}]")?,
            ImageView::Pending => writeln!(f, "[image pending]")?,
            ImageView::Failed => {
                writeln!(f, "[Image generation failed. Please use your imagination!]")?
            }
        }
        writeln!(f)?;

        writeln!(f, "Ingredients")?;
        for ingredient in &self.ingredients {
            writeln!(f, "  - {ingredient}")?;
        }
        writeln!(f)?;

        writeln!(f, "Nutrition")?;
        for (field, value) in &self.nutrition {
            writeln!(f, "  {field}: {value}")?;
        }
        writeln!(f)?;

        writeln!(f, "Instructions")?;
        for (index, step) in self.steps.iter().enumerate() {
            writeln!(f, "  {}. {}", index + 1, step)?;
        }
        writeln!(f)?;

        writeln!(f, "Enjoy your homemade {}! Bon appétit!", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Recipe;

    fn taco_recipe() -> Recipe {
        Recipe {
            id: "t-1".to_string(),
            ingredients: "beef, tortillas, cheese".to_string(),
            instructions: "Recipe Name: Tacos\nTaste: savory\nInstructions:\nbrown the beef\nfill the tortillas.".to_string(),
            protein: Some("22g".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_loading_and_not_found() {
        assert_eq!(render(&LoadState::Loading, &ImageState::Pending), CardView::Loading);
        assert_eq!(render(&LoadState::NotFound, &ImageState::Failed), CardView::NotFound);
    }

    #[test]
    fn test_render_full_card() {
        let view = render(
            &LoadState::Loaded(taco_recipe()),
            &ImageState::Ready("https://img.example/tacos.png".to_string()),
        );
        let CardView::Card(card) = view else {
            panic!("expected a card");
        };

        assert_eq!(card.name, "Tacos");
        assert_eq!(card.ingredients, vec!["Beef", "Tortillas", "Cheese"]);
        assert_eq!(card.steps, vec!["Brown the beef", "Fill the tortillas"]);
        assert_eq!(card.image, ImageView::Ready("https://img.example/tacos.png".to_string()));
    }

    #[test]
    fn test_nutrition_prefers_recipe_field_then_section_then_na() {
        let view = render(&LoadState::Loaded(taco_recipe()), &ImageState::Failed);
        let CardView::Card(card) = view else {
            panic!("expected a card");
        };

        let value = |field: &str| {
            card.nutrition
                .iter()
                .find(|(name, _)| *name == field)
                .map(|(_, value)| value.as_str())
                .unwrap()
        };
        // Recipe field wins
        assert_eq!(value("Protein"), "22g");
        // Falls back to the parsed section with the same label
        assert_eq!(value("Taste"), "savory");
        // Nothing anywhere
        assert_eq!(value("Carbs"), "N/A");
    }

    #[test]
    fn test_render_without_recipe_name_uses_default() {
        let recipe = Recipe {
            ingredients: String::new(),
            instructions: "Instructions: stir".to_string(),
            ..Default::default()
        };
        let view = render(&LoadState::Loaded(recipe), &ImageState::Failed);
        let CardView::Card(card) = view else {
            panic!("expected a card");
        };
        assert_eq!(card.name, DEFAULT_RECIPE_NAME);
        assert!(card.ingredients.is_empty());
    }

    #[test]
    fn test_display_shows_image_placeholder_on_failure() {
        let view = render(&LoadState::Loaded(taco_recipe()), &ImageState::Failed);
        let text = view.to_string();
        assert!(text.contains("Image generation failed"));
        assert!(text.contains("1. Brown the beef"));
        assert!(text.contains("Enjoy your homemade Tacos!"));
    }
}
