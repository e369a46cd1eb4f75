//! Word selection
//!
//! Uniform pseudo-random selection from the static category pools, plus the
//! random-English-word path for the synthetic category. Pure aside from the
//! RNG; callers pass only registry-known ids, so there is nothing to fail.

use super::category::CategoryId;
use super::embedded::{
    ANIMALS, COUNTRIES, FOOD, MOVIES, PROGRAMMING, RANDOM_WORDS, SPORTS, TECHNOLOGY,
};
use rand::prelude::IndexedRandom;

/// The static word pool for a concrete category
///
/// Returns `None` for [`CategoryId::Random`], which has no pool of its own.
/// Pools keep their shipped order and duplicates; deduplicating would change
/// the selection distribution.
#[must_use]
pub const fn pool(category: CategoryId) -> Option<&'static [&'static str]> {
    match category {
        CategoryId::Animals => Some(ANIMALS),
        CategoryId::Technology => Some(TECHNOLOGY),
        CategoryId::Sports => Some(SPORTS),
        CategoryId::Food => Some(FOOD),
        CategoryId::Movies => Some(MOVIES),
        CategoryId::Programming => Some(PROGRAMMING),
        CategoryId::Countries => Some(COUNTRIES),
        CategoryId::Random => None,
    }
}

/// Select a target word for the given category
///
/// Concrete categories pick uniformly from their pool. The random category
/// picks from an embedded general-English list (4-12 letters) and uppercases
/// it. Every pool is non-empty, so selection always succeeds.
#[must_use]
pub fn select_word(category: CategoryId) -> String {
    let mut rng = rand::rng();

    match pool(category) {
        Some(words) => {
            let word = words.choose(&mut rng).copied().unwrap_or_default();
            word.to_string()
        }
        None => {
            let word = RANDOM_WORDS.choose(&mut rng).copied().unwrap_or_default();
            word.to_uppercase()
        }
    }
}
