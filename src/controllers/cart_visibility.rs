use super::super::prelude::*;
use super::super::store::SharedStore;
use super::super::ui::Ui;

use std::rc::{Rc, Weak};

use tracing::debug;

struct State {
    ui: Ui,
    store: SharedStore
}

pub struct WeakCartVisibility {
    state: Weak<State>
}

impl WeakCartVisibility {
    pub fn upgrade(&self) -> Option<CartVisibility> {
        self.state.upgrade().map(|state| CartVisibility { state })
    }
}

pub struct CartVisibility {
    state: Rc<State>
}

impl CartVisibility {

    pub fn new(ui: Ui, store: SharedStore) -> Self {
        let state = State { ui, store };
        let this = Self { state: Rc::new(state) };
        this.setup_cart_button();
        this.apply(this.state.store.borrow().is_cart_visible());
        this
    }

    fn setup_cart_button(&self) {
        let this_weak = self.downgrade();
        self.state.ui.cart_button().connect_clicked(move |_| {
            if let Some(this) = this_weak.upgrade() {
                this.toggle();
            }
        });
    }

    pub fn toggle(&self) {
        let visible = self.state.store.borrow_mut().toggle_cart_visibility();
        debug!(visible, "Cart panel toggled");
        self.apply(visible);
    }

    fn apply(&self, visible: bool) {
        self.state.ui.window().set_cart_visible(visible);
    }

    pub fn downgrade(&self) -> WeakCartVisibility {
        let state = Rc::downgrade(&self.state);
        WeakCartVisibility { state }
    }

}
