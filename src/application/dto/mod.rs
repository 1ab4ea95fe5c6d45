use crate::domain::entities::{Recipe, RecipeId};

/// Everything the book panel paints for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct BookView {
    pub search_term: String,
    pub filter_buttons: Vec<FilterButtonView>,
    pub show_favorites_only: bool,
    pub favorites_button_label: &'static str,
    pub favorite_count: usize,
    pub total_count: usize,
    pub cards: Vec<RecipeCardView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterButtonView {
    pub tag: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCardView {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    pub time_line: String,
    pub dietary_line: String,
    pub image_name: String,
    pub is_favorite: bool,
    pub favorite_button_label: &'static str,
}

impl RecipeCardView {
    pub fn new(recipe: &Recipe, is_favorite: bool) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            time_line: format!("Time: {}", recipe.time),
            dietary_line: format!("Dietary: {}", recipe.dietary_line()),
            image_name: recipe.image_name.clone(),
            is_favorite,
            favorite_button_label: if is_favorite {
                "Remove from Favorites"
            } else {
                "Add to Favorites"
            },
        }
    }
}
