use super::super::prelude::*;
use super::super::models::{CatalogEntry, EntryId};

use std::cell::{Cell, RefCell};

const ADD_TO_CART_LABEL: &str = "Add to Cart";
const REMOVE_FROM_CART_LABEL: &str = "Remove from Cart";
const IN_CART_CLASS: &str = "in-cart";

pub const fn cart_action_label(in_cart: bool) -> &'static str {
    if in_cart { REMOVE_FROM_CART_LABEL } else { ADD_TO_CART_LABEL }
}

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/io/github/dogz4eva/store_card.ui")]
    #[properties(wrapper_type = super::StoreCard)]
    pub struct StoreCard {
        #[template_child(id = "store-card-picture")]
        pub picture: TemplateChild<gtk::Picture>,
        #[template_child(id = "store-card-action")]
        pub action_label: TemplateChild<gtk::Label>,
        #[template_child(id = "store-card-name")]
        pub name_label: TemplateChild<gtk::Label>,
        #[template_child(id = "store-card-price")]
        pub price_label: TemplateChild<gtk::Label>,

        #[property(get, construct_only)]
        pub entry_id: Cell<u32>,
        #[property(get, set)]
        pub title: RefCell<String>,
        #[property(get, set)]
        pub price: RefCell<String>,
        #[property(get, set)]
        pub image_url: RefCell<String>,
        #[property(get, set)]
        pub in_cart: Cell<bool>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for StoreCard {
        const NAME: &'static str = "StoreCard";
        type Type = super::StoreCard;
        type ParentType = gtk::FlowBoxChild;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for StoreCard {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_labels();
        }
    }

    impl WidgetImpl for StoreCard {}
    impl FlowBoxChildImpl for StoreCard {}
}

glib::wrapper! {
    pub struct StoreCard(ObjectSubclass<imp::StoreCard>)
        @extends gtk::FlowBoxChild, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl StoreCard {
    fn setup_labels(&self) {
        let imp = self.imp();
        self.bind_property("title", &*imp.name_label, "label")
            .sync_create()
            .build();
        self.bind_property("title", &*imp.picture, "alternative-text")
            .sync_create()
            .build();
        self.bind_property("price", &*imp.price_label, "label")
            .sync_create()
            .build();

        self.connect_notify_local(Some("in-cart"), |this, _| {
            this.update_in_cart_state();
        });
        self.update_in_cart_state();
    }

    fn update_in_cart_state(&self) {
        let in_cart = self.in_cart();
        self.imp().action_label.set_label(cart_action_label(in_cart));

        if in_cart {
            self.add_css_class(IN_CART_CLASS);
        } else {
            self.remove_css_class(IN_CART_CLASS);
        }
    }

    pub fn from_entry(entry: &CatalogEntry) -> Self {
        glib::Object::builder()
            .property("entry-id", entry.id.value())
            .property("title", entry.name.as_str())
            .property("price", entry.price.with_currency())
            .property("image-url", entry.image_url.as_str())
            .property("in-cart", entry.in_cart)
            .build()
    }

    pub fn catalog_id(&self) -> EntryId {
        EntryId::new(self.entry_id())
    }

    pub fn set_texture(&self, texture: &gtk::gdk::Texture) {
        self.imp().picture.set_paintable(Some(texture));
    }

    pub fn paintable(&self) -> Option<gtk::gdk::Paintable> {
        self.imp().picture.paintable()
    }
}

#[cfg(test)]
mod tests {
    use super::cart_action_label;

    #[test]
    fn action_label_follows_cart_membership() {
        assert_eq!(cart_action_label(false), "Add to Cart");
        assert_eq!(cart_action_label(true), "Remove from Cart");
    }
}
