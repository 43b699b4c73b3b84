use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::render::CardView;

/// Default file name for the exported document.
pub const EXPORT_FILE_NAME: &str = "recipe.pdf";

/// Serializes the rendered view and writes it as a document at `path`.
///
/// The document encoding is handed off at this boundary; the rendered text
/// is written as-is, whatever state the view is in.
pub fn export_card(view: &CardView, path: &Path) -> io::Result<()> {
    fs::write(path, view.to_string())?;
    info!("exported card to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ImageView, RecipeCard};

    #[test]
    fn test_export_writes_rendered_card() {
        let view = CardView::Card(RecipeCard {
            name: "Tacos".to_string(),
            ingredients: vec!["Beef".to_string()],
            nutrition: vec![("Protein", "22g".to_string())],
            steps: vec!["Brown the beef".to_string()],
            image: ImageView::Failed,
        });

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILE_NAME);
        export_card(&view, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, view.to_string());
        assert!(written.contains("Tacos"));
    }
}
