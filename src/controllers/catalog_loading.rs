use super::super::error::CatalogError;
use super::super::loader::CatalogLoader;
use super::super::models::CatalogEntry;
use super::super::populator::Populator;
use super::super::store::SharedStore;
use super::super::ui::Ui;
use super::card_images::CardImages;

use std::rc::{Rc, Weak};

use tracing::{debug, info, warn};

struct State {
    ui: Ui,
    store: SharedStore,
    loader: CatalogLoader,
    card_images: CardImages,
}

struct WeakCatalogLoading {
    state: Weak<State>
}

impl WeakCatalogLoading {
    fn upgrade(&self) -> Option<CatalogLoading> {
        self.state.upgrade().map(|state| CatalogLoading { state })
    }
}

pub struct CatalogLoading {
    state: Rc<State>
}

impl CatalogLoading {

    pub fn new(ui: Ui, store: SharedStore, loader: CatalogLoader, card_images: CardImages) -> Self {
        let state = State { ui, store, loader, card_images };
        Self { state: Rc::new(state) }
    }

    /// Fires the one catalog request. The outcome is dropped if this
    /// controller is gone by the time it arrives.
    pub fn start(&self) {
        let loader = self.state.loader.clone();
        let this_weak = self.downgrade();
        info!(url = %loader.search_url(), "Loading catalog");

        glib::spawn_future_local(async move {
            let result = gtk::gio::spawn_blocking(move || loader.load()).await;

            let Some(this) = this_weak.upgrade() else {
                debug!("Catalog arrived after teardown, discarding");
                return;
            };

            match result {
                Ok(Ok(entries)) => this.apply_entries(entries),
                Ok(Err(error)) => this.apply_failure(&error),
                Err(_) => this.apply_failure(&CatalogError::Network("Catalog request was aborted".to_string())),
            }
        });
    }

    fn apply_entries(&self, entries: Vec<CatalogEntry>) {
        info!(count = entries.len(), "Catalog loaded");
        self.state.store.borrow_mut().replace_catalog(entries);
        Populator::populate_catalog(&self.state.ui, &self.state.store.borrow());
        self.state.card_images.load_all();
    }

    fn apply_failure(&self, error: &CatalogError) {
        warn!(%error, "Catalog request failed");
        self.state.store.borrow_mut().record_failure(error);
        Populator::populate_error(&self.state.ui, &self.state.store.borrow());
    }

    fn downgrade(&self) -> WeakCatalogLoading {
        let state = Rc::downgrade(&self.state);
        WeakCatalogLoading { state }
    }

}
