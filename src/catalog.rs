//! Static word data the session draws its secret words from.

use serde::{Deserialize, Serialize};

/// Reserved sentinel category name meaning "pool = union of all categories"
pub const RANDOM_CATEGORY: &str = "random";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub name: String,
    pub words: Vec<String>,
}

/// Ordered, read-only category → word list data.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    categories: Vec<Category>,
}

impl WordCatalog {
    /// Catalog from caller-provided entries (alternate word packs, tests)
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Resolve the word pool for a category. The random sentinel and unknown
    /// category names both resolve to the union of all categories.
    pub fn words_for_category(&self, category_name: &str) -> Vec<String> {
        if category_name == RANDOM_CATEGORY {
            return self.all_words();
        }
        match self.categories.iter().find(|c| c.name == category_name) {
            Some(category) => category.words.clone(),
            None => self.all_words(),
        }
    }

    fn all_words(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.words.iter().cloned())
            .collect()
    }
}

impl Default for WordCatalog {
    fn default() -> Self {
        let entry = |name: &str, words: &[&str]| Category {
            name: name.to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        };

        Self::new(vec![
            entry(
                "Animals",
                &[
                    "Dog",
                    "Cat",
                    "Elephant",
                    "Giraffe",
                    "Lion",
                    "Tiger",
                    "Zebra",
                    "Monkey",
                    "Crocodile",
                    "Penguin",
                ],
            ),
            entry(
                "Fruits & Vegetables",
                &[
                    "Apple",
                    "Banana",
                    "Orange",
                    "Grape",
                    "Strawberry",
                    "Carrot",
                    "Broccoli",
                    "Tomato",
                    "Cucumber",
                    "Bell Pepper",
                ],
            ),
            entry(
                "Professions",
                &[
                    "Doctor",
                    "Teacher",
                    "Police Officer",
                    "Firefighter",
                    "Chef",
                    "Engineer",
                    "Artist",
                    "Musician",
                    "Pilot",
                    "Baker",
                ],
            ),
            entry(
                "Sports",
                &[
                    "Soccer",
                    "Basketball",
                    "Tennis",
                    "Swimming",
                    "Volleyball",
                    "Golf",
                    "Hockey",
                    "Boxing",
                    "Surfing",
                    "Skiing",
                ],
            ),
        ])
    }
}
