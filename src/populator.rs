use super::store::Store;
use super::ui::Ui;
use super::widgets::{CartRow, StoreCard};

pub struct Populator {}

impl Populator {

    /// Rebuilds the grid from the catalog, then the cart views.
    pub fn populate_catalog(ui: &Ui, store: &Store) {
        let catalog_grid = ui.catalog_grid();
        catalog_grid.remove_all_cards();

        for entry in store.entries() {
            catalog_grid.append_card(StoreCard::from_entry(entry));
        }

        catalog_grid.set_error_message(store.error_message());
        Self::populate_cart(ui, store);
    }

    pub fn populate_cart(ui: &Ui, store: &Store) {
        let cart = store.cart();
        let cart_panel = ui.cart_panel();

        ui.cart_button().set_cart_len(cart.len());
        cart_panel.remove_all_rows();

        for entry in cart.iter() {
            let row = CartRow::from_entry(entry);
            let thumbnail = ui.catalog_grid()
                .card(entry.id)
                .and_then(|card| card.paintable());
            row.set_paintable(thumbnail.as_ref());
            cart_panel.append_row(row);
        }

        let total = (!cart.is_empty()).then(|| cart.total().with_currency());
        cart_panel.set_total(total.as_deref());
    }

    pub fn populate_error(ui: &Ui, store: &Store) {
        ui.catalog_grid().set_error_message(store.error_message());
    }
}
