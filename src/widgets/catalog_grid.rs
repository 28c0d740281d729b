use super::super::prelude::*;
use super::super::models::EntryId;
use super::store_card::StoreCard;

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::OnceLock;
use glib::subclass::Signal;

const CARD_ACTIVATED_SIGNAL: &str = "card-activated";
const CART_VISIBLE_CLASS: &str = "cart-visible";

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/dogz4eva/catalog_grid.ui")]
    pub struct CatalogGrid {
        #[template_child(id = "catalog-grid-box")]
        pub box_container: TemplateChild<gtk::Box>,
        #[template_child(id = "catalog-grid-error")]
        pub error_label: TemplateChild<gtk::Label>,
        #[template_child(id = "catalog-grid-flow-box")]
        pub flow_box: TemplateChild<gtk::FlowBox>,

        pub cards: RefCell<HashMap<EntryId, StoreCard>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CatalogGrid {
        const NAME: &'static str = "CatalogGrid";
        type Type = super::CatalogGrid;
        type ParentType = adw::Bin;

        fn class_init(class: &mut Self::Class) {
            StoreCard::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for CatalogGrid {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_card_activation();
        }

        fn signals() -> &'static [Signal] {
            static SIGNALS: OnceLock<[Signal; 1]> = OnceLock::new();
            SIGNALS.get_or_init(|| {
                [
                    Signal::builder(CARD_ACTIVATED_SIGNAL)
                        .param_types([StoreCard::static_type()])
                        .build()
                ]
            })
        }
    }

    impl WidgetImpl for CatalogGrid {}
    impl BinImpl for CatalogGrid {}
}

glib::wrapper! {
    pub struct CatalogGrid(ObjectSubclass<imp::CatalogGrid>)
        @extends adw::Bin, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl CatalogGrid {
    fn setup_card_activation(&self) {
        let this_weak = self.downgrade();
        self.imp().flow_box.connect_child_activated(move |_, child| {
            if let Some(this) = this_weak.upgrade()
                && let Some(card) = child.downcast_ref::<StoreCard>()
            {
                this.emit_by_name::<()>(CARD_ACTIVATED_SIGNAL, &[card]);
            }
        });
    }

    pub fn append_card(&self, card: StoreCard) {
        let imp = self.imp();
        imp.flow_box.append(&card);
        imp.cards.borrow_mut().insert(card.catalog_id(), card);
    }

    pub fn remove_all_cards(&self) {
        let imp = self.imp();
        for (_, card) in imp.cards.borrow_mut().drain() {
            imp.flow_box.remove(&card);
        }
    }

    pub fn card(&self, id: EntryId) -> Option<StoreCard> {
        self.imp().cards.borrow().get(&id).cloned()
    }

    pub fn cards(&self) -> Vec<StoreCard> {
        self.imp().cards.borrow().values().cloned().collect()
    }

    pub fn set_error_message(&self, message: Option<&str>) {
        let error_label = &self.imp().error_label;
        error_label.set_label(message.unwrap_or_default());
        error_label.set_visible(message.is_some());
    }

    /// The grid margin depends on the cart panel only.
    pub fn set_cart_visible(&self, visible: bool) {
        let box_container = &self.imp().box_container;
        if visible {
            box_container.add_css_class(CART_VISIBLE_CLASS);
        } else {
            box_container.remove_css_class(CART_VISIBLE_CLASS);
        }
    }

    pub fn connect_card_activated<F>(&self, callback: F) -> glib::SignalHandlerId
    where
        F: Fn(&Self, &StoreCard) + 'static,
    {
        self.connect_local(CARD_ACTIVATED_SIGNAL, false, move |values| {
            let this = values[0].get::<Self>().ok()?;
            let card = values[1].get::<StoreCard>().ok()?;
            callback(&this, &card);
            None
        })
    }
}
