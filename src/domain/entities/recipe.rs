use std::fmt;

/// Dietary tags offered as filter buttons in the control bar.
pub const DIETARY_TAGS: [&str; 4] = ["Vegetarian", "Keto", "Gluten-free", "Dessert"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recipe from the bundled dataset. Never mutated after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub description: String,
    pub time: String,
    pub image_name: String,
    /// Loaded with the dataset but not rendered anywhere.
    #[allow(dead_code)]
    pub ingredients: Vec<String>,
    /// Tags in source order. Membership is exact and case-sensitive.
    pub dietary: Vec<String>,
}

impl Recipe {
    pub fn new(id: RecipeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            time: String::new(),
            image_name: String::new(),
            ingredients: Vec::new(),
            dietary: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_image_name(mut self, image_name: impl Into<String>) -> Self {
        self.image_name = image_name.into();
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_dietary<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_dietary(&self, tag: &str) -> bool {
        self.dietary.iter().any(|t| t == tag)
    }

    pub fn dietary_line(&self) -> String {
        self.dietary.join(", ")
    }
}
