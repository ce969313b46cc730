use super::SlottedCollection;
use crate::core::{Criteria, GarageError, Keyed, Kinded, Result, keys_match};
use std::collections::BTreeMap;

/// A stored item together with the collection that holds it.
#[derive(Debug)]
pub struct Located<'a, T> {
    pub index: usize,
    pub collection: &'a SlottedCollection<T>,
    pub item: &'a T,
}

/// Ordered pool of slotted collections with registry-wide key uniqueness.
///
/// Collections are appended in creation order and never removed; their index
/// is their identity. Mutation of slot contents always goes through the
/// collection's own `insert`/`remove_by`.
#[derive(Debug, Clone)]
pub struct CollectionRegistry<T> {
    collections: Vec<SlottedCollection<T>>,
}

impl<T> Default for CollectionRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CollectionRegistry<T> {
    pub fn new() -> Self {
        Self {
            collections: Vec::new(),
        }
    }

    /// Appends a new collection and returns its index.
    pub fn create_collection(&mut self, capacity: usize) -> Result<usize> {
        let collection = SlottedCollection::new(capacity)?;
        self.collections.push(collection);
        Ok(self.collections.len() - 1)
    }

    pub fn collections(&self) -> &[SlottedCollection<T>] {
        &self.collections
    }

    pub fn collection(&self, index: usize) -> Result<&SlottedCollection<T>> {
        self.collections
            .get(index)
            .ok_or(GarageError::GarageNotFound(index))
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Items across all collections in collection-then-slot order.
    pub fn iter_items(&self) -> impl Iterator<Item = &T> {
        self.collections.iter().flat_map(|collection| collection.iter())
    }

    pub fn item_count(&self) -> usize {
        self.collections.iter().map(SlottedCollection::count).sum()
    }

    pub fn query_items<C>(&self, criteria: &C) -> Vec<&T>
    where
        C: Criteria<T> + ?Sized,
    {
        self.iter_items()
            .filter(|item| criteria.matches(item))
            .collect()
    }
}

impl<T: Keyed> CollectionRegistry<T> {
    pub fn does_key_exist(&self, key: &str) -> bool {
        self.iter_items().any(|item| keys_match(item.key(), key))
    }

    pub fn find_item(&self, key: &str) -> Result<Located<'_, T>> {
        for (index, collection) in self.collections.iter().enumerate() {
            if let Some(item) = collection.iter().find(|item| keys_match(item.key(), key)) {
                return Ok(Located {
                    index,
                    collection,
                    item,
                });
            }
        }
        Err(GarageError::NotFound(key.to_string()))
    }

    /// Removes the first item (in collection order) whose key matches.
    pub fn remove_item(&mut self, key: &str) -> bool {
        self.take_item(key).is_some()
    }

    /// Like [`remove_item`](Self::remove_item) but hands the removed item back.
    pub fn take_item(&mut self, key: &str) -> Option<T> {
        self.collections
            .iter_mut()
            .find_map(|collection| collection.remove_by(|item| keys_match(item.key(), key)))
    }
}

impl<T: Keyed + PartialEq> CollectionRegistry<T> {
    /// Adds `item` to the collection at `target`.
    ///
    /// Key uniqueness across the whole registry is checked before the
    /// target's capacity, so a duplicate is reported as such even when the
    /// target is also full.
    pub fn add_item(&mut self, item: T, target: usize) -> Result<&T> {
        if target >= self.collections.len() {
            return Err(GarageError::GarageNotFound(target));
        }

        if self.does_key_exist(item.key()) {
            return Err(GarageError::DuplicateKey(item.key().to_string()));
        }

        let collection = &mut self.collections[target];
        if collection.is_full() {
            return Err(GarageError::CollectionFull {
                capacity: collection.capacity(),
            });
        }

        let capacity = collection.capacity();
        let key = item.key().to_string();
        let slot = collection
            .insert(item)
            .ok_or_else(|| GarageError::DuplicateKey(key.clone()))?;

        self.collections[target]
            .slot(slot)
            .ok_or(GarageError::CollectionFull { capacity })
    }
}

impl<T: Kinded> CollectionRegistry<T> {
    /// Counts items whose kind equals each requested kind exactly.
    pub fn count_by_kind<I>(&self, kinds: I) -> BTreeMap<T::Kind, usize>
    where
        I: IntoIterator<Item = T::Kind>,
    {
        let mut counts: BTreeMap<T::Kind, usize> =
            kinds.into_iter().map(|kind| (kind, 0)).collect();

        for item in self.iter_items() {
            if let Some(count) = counts.get_mut(&item.kind()) {
                *count += 1;
            }
        }
        counts
    }
}

impl<T: std::fmt::Display> CollectionRegistry<T> {
    /// Full listing of every collection in creation order.
    pub fn list_contents(&self) -> String {
        let mut output = String::from("Garages:");
        for collection in &self.collections {
            output.push('\n');
            output.push_str(&collection.to_string());
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        key: &'static str,
        kind: u8,
    }

    impl Keyed for Tag {
        fn key(&self) -> &str {
            self.key
        }
    }

    impl Kinded for Tag {
        type Kind = u8;

        fn kind(&self) -> u8 {
            self.kind
        }
    }

    fn tag(key: &'static str, kind: u8) -> Tag {
        Tag { key, kind }
    }

    #[test]
    fn test_create_collection_indices() {
        let mut registry = CollectionRegistry::<Tag>::new();
        assert_eq!(registry.create_collection(1).unwrap(), 0);
        assert_eq!(registry.create_collection(3).unwrap(), 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.create_collection(0).unwrap_err(),
            GarageError::InvalidCapacity(0)
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_add_to_missing_collection() {
        let mut registry = CollectionRegistry::new();
        let result = registry.add_item(tag("ABC123", 0), 0);
        assert_eq!(result.unwrap_err(), GarageError::GarageNotFound(0));
    }

    #[test]
    fn test_duplicate_reported_before_full() {
        let mut registry = CollectionRegistry::new();
        registry.create_collection(1).unwrap();
        registry.add_item(tag("ABC123", 0), 0).unwrap();

        let result = registry.add_item(tag("abc123", 1), 0);
        assert_eq!(result.unwrap_err(), GarageError::DuplicateKey("abc123".into()));
    }

    #[test]
    fn test_take_item_returns_owned() {
        let mut registry = CollectionRegistry::new();
        registry.create_collection(2).unwrap();
        registry.add_item(tag("ABC123", 4), 0).unwrap();

        assert_eq!(registry.take_item("abc123"), Some(tag("ABC123", 4)));
        assert_eq!(registry.take_item("abc123"), None);
        assert_eq!(registry.item_count(), 0);
    }

    #[test]
    fn test_count_by_kind_exact() {
        let mut registry = CollectionRegistry::new();
        registry.create_collection(3).unwrap();
        registry.create_collection(3).unwrap();
        registry.add_item(tag("A", 1), 0).unwrap();
        registry.add_item(tag("B", 1), 1).unwrap();
        registry.add_item(tag("C", 2), 1).unwrap();

        let counts = registry.count_by_kind([1, 3]);
        assert_eq!(counts.get(&1), Some(&2));
        assert_eq!(counts.get(&3), Some(&0));
        assert_eq!(counts.get(&2), None);
    }

    #[test]
    fn test_query_with_closure() {
        let mut registry = CollectionRegistry::new();
        registry.create_collection(2).unwrap();
        registry.add_item(tag("A", 1), 0).unwrap();
        registry.add_item(tag("B", 2), 0).unwrap();

        let kind_two = |t: &Tag| t.kind == 2;
        let found = registry.query_items(&kind_two);
        assert_eq!(found, vec![&tag("B", 2)]);
    }
}
