use serde::Deserialize;

/// A stored recipe as served by the backend.
///
/// `ingredients` is a single comma-separated string and `instructions` is a
/// labeled-text blob; both are parsed client-side. The nutrition fields are
/// free-form strings and may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub instructions: String,
    pub protein: Option<String>,
    pub carbs: Option<String>,
    pub fat: Option<String>,
    pub cholesterol: Option<String>,
    pub calories: Option<String>,
    pub texture: Option<String>,
    pub taste: Option<String>,
}

impl Recipe {
    /// Ingredient items split out of the comma-separated field. Commas
    /// embedded in an item are not escaped, so they split too; an empty
    /// field yields an empty list.
    pub fn ingredient_list(&self) -> Vec<String> {
        self.ingredients
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Looks up a nutrition-like field by its lower-cased name.
    pub fn nutrition(&self, field: &str) -> Option<&str> {
        let value = match field {
            "protein" => &self.protein,
            "carbs" => &self.carbs,
            "fat" => &self.fat,
            "cholesterol" => &self.cholesterol,
            "calories" => &self.calories,
            "texture" => &self.texture,
            "taste" => &self.taste,
            _ => return None,
        };
        value.as_deref()
    }
}
