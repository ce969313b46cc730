use crate::core::{GarageError, Result};
use std::fmt;
use std::iter::FusedIterator;

/// Fixed-capacity container of optional slots holding distinct items.
///
/// New items always land in the lowest-indexed empty slot and iteration
/// walks occupied slots in ascending slot order, so the visible order
/// reflects the current slot layout rather than insertion history.
///
/// Duplicate detection uses `T: PartialEq` (value equality).
#[derive(Debug, Clone)]
pub struct SlottedCollection<T> {
    slots: Box<[Option<T>]>,
    count: usize,
}

impl<T> SlottedCollection<T> {
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GarageError::InvalidCapacity(capacity));
        }

        let slots = (0..capacity).map(|_| None).collect::<Vec<_>>().into_boxed_slice();
        Ok(Self { slots, count: 0 })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Content of a single slot, `None` when empty or out of range.
    pub fn slot(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.count,
        }
    }

    /// Clears the first occupied slot matching `pred` and hands its item back.
    pub fn remove_by<P>(&mut self, mut pred: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let index = self
            .slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(&mut pred))?;

        let item = self.slots[index].take();
        self.count -= 1;
        item
    }

    pub fn short_description(&self) -> String {
        format!(
            "Garage with capacity = {}, #stored = {}",
            self.capacity(),
            self.count
        )
    }
}

impl<T: PartialEq> SlottedCollection<T> {
    /// Places `item` in the lowest-indexed empty slot and returns that index.
    ///
    /// Returns `None` without touching any slot when the collection is full
    /// or an equal item is already stored.
    pub fn insert(&mut self, item: T) -> Option<usize> {
        if self.is_full() || self.contains(&item) {
            return None;
        }

        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(item);
        self.count += 1;
        Some(index)
    }

    pub fn add(&mut self, item: T) -> bool {
        self.insert(item).is_some()
    }

    pub fn remove(&mut self, item: &T) -> bool {
        self.remove_by(|stored| stored == item).is_some()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|stored| stored == item)
    }
}

impl<T: fmt::Display> fmt::Display for SlottedCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_description())?;
        for item in self {
            write!(f, "\n    {}", item)?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a SlottedCollection<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Occupied slots in ascending slot order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    slots: std::slice::Iter<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.slots.by_ref().find_map(Option::as_ref)?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
