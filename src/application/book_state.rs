use crate::domain::entities::RecipeId;
use crate::domain::services::RecipeFilter;
use std::collections::HashSet;

/// All view state of the recipe book. Each field has exactly one mutator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookState {
    search_term: String,
    active_filters: HashSet<String>,
    favorite_ids: HashSet<RecipeId>,
    show_favorites_only: bool,
}

impl BookState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Stored verbatim, no trimming.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn active_filters(&self) -> &HashSet<String> {
        &self.active_filters
    }

    pub fn is_filter_active(&self, tag: &str) -> bool {
        self.active_filters.contains(tag)
    }

    pub fn toggle_filter(&mut self, tag: &str) {
        if !self.active_filters.remove(tag) {
            self.active_filters.insert(tag.to_string());
        }
    }

    pub fn clear_filters(&mut self) {
        self.active_filters.clear();
    }

    pub fn favorite_ids(&self) -> &HashSet<RecipeId> {
        &self.favorite_ids
    }

    pub fn is_favorite(&self, id: RecipeId) -> bool {
        self.favorite_ids.contains(&id)
    }

    pub fn toggle_favorite(&mut self, id: RecipeId) {
        if !self.favorite_ids.remove(&id) {
            self.favorite_ids.insert(id);
        }
    }

    pub fn show_favorites_only(&self) -> bool {
        self.show_favorites_only
    }

    pub fn toggle_show_favorites_only(&mut self) {
        self.show_favorites_only = !self.show_favorites_only;
    }

    pub fn filter(&self) -> RecipeFilter<'_> {
        let filter = RecipeFilter::new(&self.search_term, &self.active_filters);
        if self.show_favorites_only {
            filter.favorites_only(&self.favorite_ids)
        } else {
            filter
        }
    }
}
