//! Category registry
//!
//! The closed set of word categories: seven concrete pools plus the
//! synthetic "random" category. Unknown categories are unrepresentable;
//! string names from the CLI are validated into a `CategoryId` at the
//! boundary.

use std::fmt;

/// Identifier for one of the fixed categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    Animals,
    Technology,
    Sports,
    Food,
    Movies,
    Programming,
    Countries,
    /// Synthetic category: a random English word independent of the pools
    Random,
}

impl CategoryId {
    /// All category ids in registry order
    pub const ALL: [Self; 8] = [
        Self::Animals,
        Self::Technology,
        Self::Sports,
        Self::Food,
        Self::Movies,
        Self::Programming,
        Self::Countries,
        Self::Random,
    ];

    /// Canonical lowercase id string
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Animals => "animals",
            Self::Technology => "technology",
            Self::Sports => "sports",
            Self::Food => "food",
            Self::Movies => "movies",
            Self::Programming => "programming",
            Self::Countries => "countries",
            Self::Random => "random",
        }
    }

    /// Parse a category id string (case-insensitive)
    ///
    /// Returns `None` for anything outside the registry.
    #[must_use]
    pub fn from_id(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|c| c.id() == name)
    }

    /// Registry metadata for this category
    #[must_use]
    pub fn meta(self) -> &'static Category {
        &CATEGORIES[self as usize]
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Display metadata for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// The static category registry, in display order
pub static CATEGORIES: [Category; 8] = [
    Category {
        id: CategoryId::Animals,
        name: "Animals",
        description: "Guess animal names from around the world",
        icon: "🐘",
    },
    Category {
        id: CategoryId::Technology,
        name: "Technology",
        description: "Modern tech terms and gadgets",
        icon: "💻",
    },
    Category {
        id: CategoryId::Sports,
        name: "Sports",
        description: "Sports terminology and famous athletes",
        icon: "⚽",
    },
    Category {
        id: CategoryId::Food,
        name: "Food",
        description: "Delicious foods from around the world",
        icon: "🍕",
    },
    Category {
        id: CategoryId::Movies,
        name: "Movies",
        description: "Famous movie titles and characters",
        icon: "🎬",
    },
    Category {
        id: CategoryId::Programming,
        name: "Programming",
        description: "Coding terms and languages",
        icon: "⌨️",
    },
    Category {
        id: CategoryId::Countries,
        name: "Countries",
        description: "Countries from around the world",
        icon: "🌎",
    },
    Category {
        id: CategoryId::Random,
        name: "Random",
        description: "A random English word, 4-12 letters",
        icon: "🎲",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_order_matches_ids() {
        for (i, category) in CATEGORIES.iter().enumerate() {
            assert_eq!(category.id as usize, i);
            assert_eq!(category.id.meta(), category);
        }
    }

    #[test]
    fn from_id_round_trips() {
        for id in CategoryId::ALL {
            assert_eq!(CategoryId::from_id(id.id()), Some(id));
        }
    }

    #[test]
    fn from_id_is_case_insensitive() {
        assert_eq!(CategoryId::from_id("ANIMALS"), Some(CategoryId::Animals));
        assert_eq!(CategoryId::from_id("Random"), Some(CategoryId::Random));
    }

    #[test]
    fn from_id_rejects_unknown() {
        assert_eq!(CategoryId::from_id("weather"), None);
        assert_eq!(CategoryId::from_id(""), None);
    }

    #[test]
    fn display_uses_id() {
        assert_eq!(CategoryId::Technology.to_string(), "technology");
    }
}
