use super::widgets::{CartButton, CartPanel, CatalogGrid, Window};

use std::rc::Rc;

#[derive(Clone)]
pub struct Ui {
    window: Rc<Window>
}

impl Ui {

    pub fn new(window: Window) -> Self {
        Self { window: Rc::new(window) }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn cart_button(&self) -> &CartButton {
        self.window.cart_button()
    }

    pub fn cart_panel(&self) -> &CartPanel {
        self.window.cart_panel()
    }

    pub fn catalog_grid(&self) -> &CatalogGrid {
        self.window.catalog_grid()
    }

}
