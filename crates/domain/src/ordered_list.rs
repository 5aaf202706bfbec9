//! Append-ordered list safe to share between threads
//!
//! Every operation takes the single inner lock for its own duration. Values
//! are handed out by clone, so a later removal never invalidates anything a
//! caller already holds.

use parking_lot::Mutex;
use std::fmt;

/// Insertion-ordered sequence guarded by one mutex
pub struct OrderedList<T> {
    items: Mutex<Vec<T>>,
}

impl<T> OrderedList<T> {
    /// Create an empty list
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Mutex::new(Vec::new()),
        }
    }

    /// Add an item at the end
    pub fn append(&self, item: T) {
        self.items.lock().push(item);
    }

    /// Add an item at the front
    pub fn prepend(&self, item: T) {
        self.items.lock().insert(0, item);
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    /// Whether the list holds no items
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Whether any item satisfies the predicate
    pub fn contains(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.items.lock().iter().any(predicate)
    }

    /// Remove every item matching the predicate, returning how many went
    pub fn remove_where(&self, predicate: impl Fn(&T) -> bool) -> usize {
        let mut items = self.items.lock();
        let before = items.len();
        items.retain(|item| !predicate(item));
        before - items.len()
    }

    /// Consume the list, keeping insertion order
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_inner()
    }
}

impl<T: Clone> OrderedList<T> {
    /// Copy of the item at `index`
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.lock().get(index).cloned()
    }

    /// Copy of every item in order
    pub fn snapshot(&self) -> Vec<T> {
        self.items.lock().clone()
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for OrderedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> fmt::Debug for OrderedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedList")
            .field("len", &self.len())
            .finish()
    }
}
