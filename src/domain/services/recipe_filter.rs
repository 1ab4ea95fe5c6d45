use crate::domain::entities::{Recipe, RecipeId};
use std::collections::HashSet;

/// Conjunction of the three book predicates: name search, required dietary
/// tags and favorites-only. An empty search, an empty tag set or a missing
/// favorites restriction is vacuously satisfied.
pub struct RecipeFilter<'a> {
    search_lower: Option<String>,
    required_tags: &'a HashSet<String>,
    favorites: Option<&'a HashSet<RecipeId>>,
}

impl<'a> RecipeFilter<'a> {
    pub fn new(search_term: &str, required_tags: &'a HashSet<String>) -> Self {
        let search_lower = if search_term.is_empty() {
            None
        } else {
            Some(search_term.to_lowercase())
        };

        Self {
            search_lower,
            required_tags,
            favorites: None,
        }
    }

    pub fn favorites_only(mut self, favorites: &'a HashSet<RecipeId>) -> Self {
        self.favorites = Some(favorites);
        self
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(search) = &self.search_lower {
            if !recipe.name.to_lowercase().contains(search.as_str()) {
                return false;
            }
        }

        if !self
            .required_tags
            .iter()
            .all(|tag| recipe.has_dietary(tag))
        {
            return false;
        }

        if let Some(favorites) = self.favorites {
            if !favorites.contains(&recipe.id) {
                return false;
            }
        }

        true
    }

    /// Keeps matching recipes in dataset order.
    pub fn apply<'r>(&self, recipes: &'r [Recipe]) -> Vec<&'r Recipe> {
        recipes.iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Recipe> {
        vec![
            Recipe::new(RecipeId(1), "Veggie Soup").with_dietary(["Vegetarian", "Gluten-free"]),
            Recipe::new(RecipeId(2), "Keto Steak").with_dietary(["Keto", "Gluten-free"]),
            Recipe::new(RecipeId(3), "Chocolate Mousse").with_dietary(["Dessert", "Vegetarian"]),
            Recipe::new(RecipeId(4), "Souper Stew"),
        ]
    }

    fn ids(recipes: &[&Recipe]) -> Vec<u64> {
        recipes.iter().map(|r| r.id.0).collect()
    }

    fn tags(values: &[&str]) -> HashSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_criteria_keep_everything() {
        let recipes = sample();
        let none = HashSet::new();

        let filtered = RecipeFilter::new("", &none).apply(&recipes);

        assert_eq!(ids(&filtered), vec![1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let recipes = sample();
        let none = HashSet::new();

        assert_eq!(ids(&RecipeFilter::new("SOUP", &none).apply(&recipes)), vec![1, 4]);
        assert_eq!(ids(&RecipeFilter::new("eak", &none).apply(&recipes)), vec![2]);
        assert!(RecipeFilter::new("soup steak", &none).apply(&recipes).is_empty());
    }

    #[test]
    fn search_term_is_not_trimmed() {
        let recipes = sample();
        let none = HashSet::new();

        assert!(RecipeFilter::new(" soup ", &none).apply(&recipes).is_empty());
    }

    #[test]
    fn required_tags_use_and_semantics() {
        let recipes = sample();

        let gluten_free = tags(&["Gluten-free"]);
        assert_eq!(ids(&RecipeFilter::new("", &gluten_free).apply(&recipes)), vec![1, 2]);

        let veg_and_gf = tags(&["Vegetarian", "Gluten-free"]);
        assert_eq!(ids(&RecipeFilter::new("", &veg_and_gf).apply(&recipes)), vec![1]);

        let veg_and_keto = tags(&["Vegetarian", "Keto"]);
        assert!(RecipeFilter::new("", &veg_and_keto).apply(&recipes).is_empty());
    }

    #[test]
    fn tag_matching_is_exact() {
        let recipes = sample();

        let lowercase = tags(&["vegetarian"]);
        assert!(RecipeFilter::new("", &lowercase).apply(&recipes).is_empty());

        let unknown = tags(&["Paleo"]);
        assert!(RecipeFilter::new("", &unknown).apply(&recipes).is_empty());
    }

    #[test]
    fn favorites_only_restricts_to_marked_ids() {
        let recipes = sample();
        let none = HashSet::new();
        let favorites: HashSet<RecipeId> = [RecipeId(3), RecipeId(1)].into_iter().collect();

        let filtered = RecipeFilter::new("", &none)
            .favorites_only(&favorites)
            .apply(&recipes);

        assert_eq!(ids(&filtered), vec![1, 3]);

        let empty = HashSet::new();
        assert!(
            RecipeFilter::new("", &none)
                .favorites_only(&empty)
                .apply(&recipes)
                .is_empty()
        );
    }

    #[test]
    fn all_predicates_combine() {
        let recipes = sample();
        let vegetarian = tags(&["Vegetarian"]);
        let favorites: HashSet<RecipeId> = [RecipeId(1), RecipeId(2), RecipeId(3)].into_iter().collect();

        let filtered = RecipeFilter::new("o", &vegetarian)
            .favorites_only(&favorites)
            .apply(&recipes);

        assert_eq!(ids(&filtered), vec![1, 3]);
    }

    #[test]
    fn output_is_subsequence_of_dataset() {
        let recipes = sample();
        let none = HashSet::new();

        for term in ["", "s", "o", "k", "zzz"] {
            let filtered = RecipeFilter::new(term, &none).apply(&recipes);
            let positions: Vec<usize> = filtered
                .iter()
                .map(|r| recipes.iter().position(|x| x.id == r.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "term {term:?}");
        }
    }
}
