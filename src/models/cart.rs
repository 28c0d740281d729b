use super::{CatalogEntry, EntryId, Price};
use crate::ordered_map::OrderedMap;

/// Entries the user has selected, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: OrderedMap<EntryId, CatalogEntry>,
}

impl Cart {
    pub fn insert(&mut self, entry: CatalogEntry) -> Option<CatalogEntry> {
        self.entries.insert(entry.id, entry)
    }

    pub fn remove(&mut self, id: EntryId) -> Option<CatalogEntry> {
        self.entries.remove(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn total(&self) -> Price {
        self.iter().map(|entry| entry.price).sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
