use crate::application::book_state::BookState;
use crate::application::dto::{BookView, FilterButtonView, RecipeCardView};
use crate::domain::entities::{DIETARY_TAGS, Recipe, RecipeId};

/// User input accepted by the book. Cards only ever emit `FavoriteToggled`.
#[derive(Debug, Clone, PartialEq)]
pub enum BookEvent {
    SearchChanged(String),
    FilterToggled(String),
    FiltersCleared,
    FavoriteToggled(RecipeId),
    ShowFavoritesToggled,
}

/// Owns the dataset and the view state. The filtered list is recomputed on
/// every call and never cached.
pub struct RecipeBook {
    recipes: Vec<Recipe>,
    state: BookState,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes,
            state: BookState::new(),
        }
    }

    pub fn state(&self) -> &BookState {
        &self.state
    }

    pub fn handle(&mut self, event: BookEvent) {
        match event {
            BookEvent::SearchChanged(term) => self.set_search_term(term),
            BookEvent::FilterToggled(tag) => self.toggle_filter(&tag),
            BookEvent::FiltersCleared => self.clear_filters(),
            BookEvent::FavoriteToggled(id) => self.toggle_favorite(id),
            BookEvent::ShowFavoritesToggled => self.toggle_show_favorites_only(),
        }
    }

    pub fn set_search_term(&mut self, term: String) {
        tracing::debug!("Search term changed to {:?}", term);
        self.state.set_search_term(term);
    }

    pub fn toggle_filter(&mut self, tag: &str) {
        self.state.toggle_filter(tag);
        tracing::debug!(
            "Filter {} {}",
            tag,
            if self.state.is_filter_active(tag) { "enabled" } else { "disabled" }
        );
    }

    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
        tracing::debug!("Cleared dietary filters");
    }

    /// Ids that are not in the dataset are ignored so the favorite set stays a
    /// subset of known recipes.
    pub fn toggle_favorite(&mut self, id: RecipeId) {
        let Some(recipe) = self.recipes.iter().find(|r| r.id == id) else {
            tracing::warn!("Ignoring favorite toggle for unknown recipe {}", id);
            return;
        };

        self.state.toggle_favorite(id);
        if self.state.is_favorite(id) {
            tracing::info!("Added {} to favorites", recipe.name);
        } else {
            tracing::info!("Removed {} from favorites", recipe.name);
        }
    }

    pub fn toggle_show_favorites_only(&mut self) {
        self.state.toggle_show_favorites_only();
        tracing::debug!("Show favorites only: {}", self.state.show_favorites_only());
    }

    pub fn visible_recipes(&self) -> Vec<&Recipe> {
        self.state.filter().apply(&self.recipes)
    }

    pub fn view(&self) -> BookView {
        let cards = self
            .visible_recipes()
            .into_iter()
            .map(|recipe| RecipeCardView::new(recipe, self.state.is_favorite(recipe.id)))
            .collect();

        BookView {
            search_term: self.state.search_term().to_string(),
            filter_buttons: DIETARY_TAGS
                .iter()
                .map(|&tag| FilterButtonView {
                    tag,
                    active: self.state.is_filter_active(tag),
                })
                .collect(),
            show_favorites_only: self.state.show_favorites_only(),
            favorites_button_label: if self.state.show_favorites_only() {
                "Show All"
            } else {
                "Show Favorites"
            },
            favorite_count: self.state.favorite_ids().len(),
            total_count: self.recipes.len(),
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> RecipeBook {
        RecipeBook::new(vec![
            Recipe::new(RecipeId(1), "Veggie Soup").with_dietary(["Vegetarian"]),
            Recipe::new(RecipeId(2), "Keto Steak").with_dietary(["Keto"]),
        ])
    }

    fn visible_ids(book: &RecipeBook) -> Vec<u64> {
        book.visible_recipes().iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn defaults_show_whole_dataset() {
        let book = book();
        assert_eq!(visible_ids(&book), vec![1, 2]);
    }

    #[test]
    fn search_narrows_to_matching_name() {
        let mut book = book();
        book.handle(BookEvent::SearchChanged("steak".to_string()));
        assert_eq!(visible_ids(&book), vec![2]);
    }

    #[test]
    fn disjoint_filters_show_nothing() {
        let mut book = book();
        book.handle(BookEvent::FilterToggled("Vegetarian".to_string()));
        book.handle(BookEvent::FilterToggled("Keto".to_string()));
        assert!(visible_ids(&book).is_empty());
    }

    #[test]
    fn favorites_only_shows_marked_recipe() {
        let mut book = book();
        book.handle(BookEvent::FavoriteToggled(RecipeId(1)));
        book.handle(BookEvent::ShowFavoritesToggled);
        assert_eq!(visible_ids(&book), vec![1]);
    }

    #[test]
    fn favorite_toggled_back_off_is_hidden() {
        let mut book = book();
        book.handle(BookEvent::FavoriteToggled(RecipeId(1)));
        book.handle(BookEvent::FavoriteToggled(RecipeId(1)));
        book.handle(BookEvent::ShowFavoritesToggled);
        assert!(visible_ids(&book).is_empty());
    }

    #[test]
    fn clearing_filters_restores_list() {
        let mut book = book();
        book.handle(BookEvent::FilterToggled("Keto".to_string()));
        assert_eq!(visible_ids(&book), vec![2]);

        book.handle(BookEvent::FiltersCleared);
        assert_eq!(visible_ids(&book), vec![1, 2]);
    }

    #[test]
    fn unknown_favorite_id_is_ignored() {
        let mut book = book();
        book.handle(BookEvent::FavoriteToggled(RecipeId(99)));
        assert!(book.state().favorite_ids().is_empty());
    }

    #[test]
    fn view_is_idempotent() {
        let mut book = book();
        book.handle(BookEvent::FavoriteToggled(RecipeId(2)));
        book.handle(BookEvent::SearchChanged("e".to_string()));

        assert_eq!(book.view(), book.view());
    }

    #[test]
    fn view_reflects_state() {
        let mut book = book();
        book.handle(BookEvent::FilterToggled("Keto".to_string()));
        book.handle(BookEvent::FavoriteToggled(RecipeId(2)));

        let view = book.view();

        let active: Vec<&str> = view
            .filter_buttons
            .iter()
            .filter(|b| b.active)
            .map(|b| b.tag)
            .collect();
        assert_eq!(active, vec!["Keto"]);
        assert_eq!(view.filter_buttons.len(), DIETARY_TAGS.len());
        assert_eq!(view.favorites_button_label, "Show Favorites");
        assert_eq!(view.favorite_count, 1);
        assert_eq!(view.total_count, 2);

        assert_eq!(view.cards.len(), 1);
        let card = &view.cards[0];
        assert_eq!(card.name, "Keto Steak");
        assert_eq!(card.dietary_line, "Dietary: Keto");
        assert!(card.is_favorite);
        assert_eq!(card.favorite_button_label, "Remove from Favorites");
    }

    #[test]
    fn card_favorite_state_survives_being_filtered_out() {
        let mut book = book();
        book.handle(BookEvent::FavoriteToggled(RecipeId(1)));
        book.handle(BookEvent::SearchChanged("steak".to_string()));
        assert!(book.view().cards.iter().all(|c| c.id != RecipeId(1)));

        book.handle(BookEvent::SearchChanged(String::new()));
        let view = book.view();
        let card = view.cards.iter().find(|c| c.id == RecipeId(1)).unwrap();

        assert!(card.is_favorite);
        assert_eq!(card.favorite_button_label, "Remove from Favorites");
    }

    #[test]
    fn show_all_label_when_favorites_only() {
        let mut book = book();
        book.handle(BookEvent::ShowFavoritesToggled);

        let view = book.view();

        assert!(view.show_favorites_only);
        assert_eq!(view.favorites_button_label, "Show All");
        assert!(view.cards.is_empty());
    }
}
