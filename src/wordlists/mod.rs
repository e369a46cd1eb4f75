//! Word categories and pools
//!
//! Provides the category registry and the embedded word pools compiled into
//! the binary, plus uniform word selection over them.

mod category;
pub mod embedded;
mod provider;

pub use category::{CATEGORIES, Category, CategoryId};
pub use provider::{pool, select_word};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_seven_pools_plus_random() {
        assert_eq!(CATEGORIES.len(), 8);
        let concrete = CategoryId::ALL
            .into_iter()
            .filter(|&id| id != CategoryId::Random)
            .count();
        assert_eq!(concrete, 7);
    }

    #[test]
    fn pool_entries_are_clean_ascii() {
        // Pools are shipped data; a handful of entries carry digits
        // (e.g. "FORMULA1") and are preserved as-is.
        for id in CategoryId::ALL {
            let Some(words) = pool(id) else { continue };
            for &word in words {
                assert!(!word.is_empty());
                assert!(word.is_ascii(), "'{word}' is not ASCII");
                assert!(!word.starts_with(' ') && !word.ends_with(' '));
            }
        }
    }
}
