use super::super::models::EntryId;
use super::super::populator::Populator;
use super::super::store::{SharedStore, Toggle};
use super::super::ui::Ui;
use super::super::widgets::StoreCard;

use std::rc::{Rc, Weak};

use tracing::{debug, warn};

struct State {
    ui: Ui,
    store: SharedStore
}

struct WeakCartToggle {
    state: Weak<State>
}

impl WeakCartToggle {
    fn upgrade(&self) -> Option<CartToggle> {
        self.state.upgrade().map(|state| CartToggle { state })
    }
}

pub struct CartToggle {
    state: Rc<State>
}

impl CartToggle {

    pub fn new(ui: Ui, store: SharedStore) -> Self {
        let state = State { ui, store };
        let this = Self { state: Rc::new(state) };
        this.setup_card_activation();
        this
    }

    fn setup_card_activation(&self) {
        let this_weak = self.downgrade();
        self.state.ui.catalog_grid().connect_card_activated(move |_, card| {
            if let Some(this) = this_weak.upgrade() {
                this.toggle_card(card);
            }
        });
    }

    fn toggle_card(&self, card: &StoreCard) {
        let id = card.catalog_id();
        let outcome = self.state.store.borrow_mut().toggle(id);

        match outcome {
            Ok(Toggle::Added) => debug!(%id, "Added to cart"),
            Ok(Toggle::Removed(entry)) => debug!(%id, name = %entry.name, "Removed from cart"),
            Err(error) => {
                warn!(%error, "Ignoring card activation");
                return;
            }
        }

        self.refresh(id, card);
    }

    fn refresh(&self, id: EntryId, card: &StoreCard) {
        let store = self.state.store.borrow();
        if let Some(entry) = store.entry(id) {
            card.set_in_cart(entry.in_cart);
        }
        Populator::populate_cart(&self.state.ui, &store);
    }

    fn downgrade(&self) -> WeakCartToggle {
        let state = Rc::downgrade(&self.state);
        WeakCartToggle { state }
    }

}
