//! Equality and deduplication contract shared by the domain entities.

use std::collections::HashSet;
use std::sync::Arc;

/// An entity that can be compared and deduplicated.
pub trait Comparable {
    /// Full equality against another instance.
    fn equals(&self, other: &Self) -> bool;

    /// Stable key used for deduplication and grouping.
    fn hash_string(&self) -> String;
}

impl<T: Comparable + ?Sized> Comparable for Arc<T> {
    fn equals(&self, other: &Self) -> bool {
        (**self).equals(other)
    }

    fn hash_string(&self) -> String {
        (**self).hash_string()
    }
}

/// Remove duplicates, keeping the first item seen for each hash string.
///
/// Two items collapse when their `hash_string` values match, even if
/// `equals` would tell them apart. This is coarser than full equality and
/// is the only deduplication primitive in the crate: lessons, courses and
/// degrees all go through it.
pub fn to_unique<T: Comparable + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(item.hash_string()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        key: &'static str,
        payload: u32,
    }

    impl Comparable for Item {
        fn equals(&self, other: &Self) -> bool {
            self == other
        }

        fn hash_string(&self) -> String {
            self.key.to_string()
        }
    }

    fn item(key: &'static str, payload: u32) -> Item {
        Item { key, payload }
    }

    #[test]
    fn test_keeps_first_occurrence_order() {
        let items = vec![item("b", 1), item("a", 2), item("b", 3), item("c", 4)];
        let unique = to_unique(&items);
        assert_eq!(unique, vec![item("b", 1), item("a", 2), item("c", 4)]);
    }

    #[test]
    fn test_collapses_by_hash_string_not_equality() {
        let items = vec![item("x", 1), item("x", 2)];
        assert!(!items[0].equals(&items[1]));
        assert_eq!(to_unique(&items), vec![item("x", 1)]);
    }

    #[test]
    fn test_idempotent() {
        let items = vec![item("a", 1), item("b", 2), item("a", 3), item("b", 4)];
        let once = to_unique(&items);
        assert_eq!(to_unique(&once), once);
    }

    #[test]
    fn test_empty() {
        let items: Vec<Item> = Vec::new();
        assert!(to_unique(&items).is_empty());
    }

    #[test]
    fn test_arc_delegates() {
        let a = Arc::new(item("k", 1));
        let b = Arc::new(item("k", 1));
        assert!(a.equals(&b));
        assert_eq!(to_unique(&[a, b]).len(), 1);
    }
}
