use crate::error::{CatalogError, StoreError};
use crate::models::{Cart, CatalogEntry, EntryId};

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

pub type SharedStore = Rc<RefCell<Store>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed(CatalogEntry),
}

/// All storefront state: the catalog, the cart that mirrors its `in_cart`
/// flags, the load error and whether the cart panel is shown.
#[derive(Debug, Default)]
pub struct Store {
    catalog: Vec<CatalogEntry>,
    cart: Cart,
    error_message: Option<String>,
    cart_visible: bool,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.catalog
    }

    pub fn entry(&self, id: EntryId) -> Option<&CatalogEntry> {
        self.catalog.iter().find(|entry| entry.id == id)
    }

    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub const fn is_cart_visible(&self) -> bool {
        self.cart_visible
    }

    /// Replaces the catalog wholesale. The cart is emptied with it.
    pub fn replace_catalog(&mut self, entries: Vec<CatalogEntry>) {
        self.catalog = entries;
        self.cart.clear();
        for entry in &mut self.catalog {
            entry.in_cart = false;
        }
        self.error_message = None;
    }

    pub fn record_failure(&mut self, error: &CatalogError) {
        self.error_message = Some(error.to_string());
    }

    /// Adds the entry to the cart or removes it, keeping its flag in step.
    pub fn toggle(&mut self, id: EntryId) -> Result<Toggle, StoreError> {
        let entry = self
            .catalog
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(StoreError::UnknownEntry(id))?;

        let toggle = if entry.in_cart {
            entry.in_cart = false;
            let removed = self.cart.remove(id).unwrap_or_else(|| entry.clone());
            Toggle::Removed(removed)
        } else {
            entry.in_cart = true;
            self.cart.insert(entry.clone());
            Toggle::Added
        };

        debug!(%id, cart_len = self.cart.len(), "Toggled cart entry");
        Ok(toggle)
    }

    pub fn toggle_cart_visibility(&mut self) -> bool {
        self.cart_visible = !self.cart_visible;
        self.cart_visible
    }
}

#[cfg(test)]
mod tests {
    use super::{Store, Toggle};
    use crate::error::{CatalogError, StoreError};
    use crate::loader::{build_entries, ImageRecord};
    use crate::generator::RandomProfiles;
    use crate::models::{CatalogEntry, EntryId};

    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store_with(count: usize) -> Store {
        let records = (0..count)
            .map(|index| ImageRecord { url: format!("https://cdn.example/{index}.jpg") })
            .collect();
        let mut profiles = RandomProfiles::new(StdRng::seed_from_u64(11));

        let mut store = Store::new();
        store.replace_catalog(build_entries(records, &mut profiles));
        store
    }

    fn cart_entry(store: &Store, id: EntryId) -> Option<&CatalogEntry> {
        store.cart().iter().find(|entry| entry.id == id)
    }

    fn assert_cart_mirrors_flags(store: &Store) {
        for entry in store.entries() {
            assert_eq!(entry.in_cart, cart_entry(store, entry.id).is_some(), "entry {}", entry.id);
        }
        let flagged = store.entries().iter().filter(|entry| entry.in_cart).count();
        assert_eq!(flagged, store.cart().len());
    }

    #[test]
    fn starts_empty_and_hidden() {
        let store = Store::new();

        assert!(store.entries().is_empty());
        assert!(store.cart().is_empty());
        assert_eq!(store.error_message(), None);
        assert!(!store.is_cart_visible());
    }

    #[test]
    fn adding_grows_cart_by_one() {
        let mut store = store_with(5);

        assert_eq!(store.toggle(EntryId::new(3)), Ok(Toggle::Added));

        assert_eq!(store.cart().len(), 1);
        assert!(store.entry(EntryId::new(3)).unwrap().in_cart);
        assert_cart_mirrors_flags(&store);
    }

    #[test]
    fn removing_returns_the_entry_that_was_added() {
        let mut store = store_with(5);
        let id = EntryId::new(1);

        store.toggle(id).unwrap();
        let added = cart_entry(&store, id).cloned().unwrap();
        let Ok(Toggle::Removed(removed)) = store.toggle(id) else {
            panic!("second toggle should remove");
        };

        assert_eq!(removed, added);
        assert!(store.cart().is_empty());
        assert_cart_mirrors_flags(&store);
    }

    #[test]
    fn toggling_twice_restores_state() {
        let mut store = store_with(4);
        store.toggle(EntryId::new(0)).unwrap();
        store.toggle(EntryId::new(2)).unwrap();

        let entries_before = store.entries().to_vec();
        let cart_before: Vec<_> = store.cart().iter().cloned().collect();

        store.toggle(EntryId::new(3)).unwrap();
        store.toggle(EntryId::new(3)).unwrap();

        assert_eq!(store.entries(), entries_before.as_slice());
        assert_eq!(store.cart().iter().cloned().collect::<Vec<_>>(), cart_before);
    }

    #[test]
    fn invariant_holds_after_every_toggle() {
        let mut store = store_with(6);
        let sequence = [0, 4, 2, 4, 5, 0, 1, 2, 3, 5, 1, 4];

        for index in sequence {
            store.toggle(EntryId::new(index)).unwrap();
            assert_cart_mirrors_flags(&store);
        }
    }

    #[test]
    fn cart_keeps_add_order() {
        let mut store = store_with(5);
        for index in [4, 0, 2] {
            store.toggle(EntryId::new(index)).unwrap();
        }
        store.toggle(EntryId::new(0)).unwrap();
        store.toggle(EntryId::new(1)).unwrap();

        let order: Vec<_> = store.cart().iter().map(|entry| entry.id.value()).collect();
        assert_eq!(order, vec![4, 2, 1]);
    }

    #[test]
    fn unknown_entry_changes_nothing() {
        let mut store = store_with(2);

        assert_eq!(store.toggle(EntryId::new(9)), Err(StoreError::UnknownEntry(EntryId::new(9))));
        assert!(store.cart().is_empty());
        assert_cart_mirrors_flags(&store);
    }

    #[test]
    fn cart_total_sums_selected_prices() {
        let mut store = store_with(3);
        store.toggle(EntryId::new(0)).unwrap();
        store.toggle(EntryId::new(2)).unwrap();

        let expected = store.entries()[0].price.cents() + store.entries()[2].price.cents();
        assert_eq!(store.cart().total().cents(), expected);
    }

    #[test]
    fn failure_keeps_catalog_empty_and_records_status_text() {
        let mut store = Store::new();
        store.record_failure(&CatalogError::status(500, "Internal Server Error"));

        assert!(store.entries().is_empty());
        assert_eq!(store.error_message(), Some("Internal Server Error"));
    }

    #[test]
    fn replacing_catalog_empties_cart() {
        let mut store = store_with(3);
        store.toggle(EntryId::new(1)).unwrap();

        let fresh = store_with(2).entries().to_vec();
        store.replace_catalog(fresh);

        assert!(store.cart().is_empty());
        assert_eq!(store.entries().len(), 2);
        assert_cart_mirrors_flags(&store);
    }

    #[test]
    fn visibility_flips_once_per_call_regardless_of_cart() {
        let mut store = store_with(2);

        assert!(store.toggle_cart_visibility());
        store.toggle(EntryId::new(0)).unwrap();
        assert!(!store.toggle_cart_visibility());
        assert!(store.toggle_cart_visibility());
        assert_eq!(store.cart().len(), 1);
    }
}
