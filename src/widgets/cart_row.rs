use super::super::prelude::*;
use super::super::models::CatalogEntry;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/dogz4eva/cart_row.ui")]
    pub struct CartRow {
        #[template_child(id = "cart-row-picture")]
        pub picture: TemplateChild<gtk::Picture>,
        #[template_child(id = "cart-row-price")]
        pub price_label: TemplateChild<gtk::Label>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CartRow {
        const NAME: &'static str = "CartRow";
        type Type = super::CartRow;
        type ParentType = adw::ActionRow;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for CartRow {}
    impl WidgetImpl for CartRow {}
    impl ListBoxRowImpl for CartRow {}
    impl PreferencesRowImpl for CartRow {}
    impl ActionRowImpl for CartRow {}
}

glib::wrapper! {
    pub struct CartRow(ObjectSubclass<imp::CartRow>)
        @extends adw::ActionRow, adw::PreferencesRow, gtk::ListBoxRow, gtk::Widget,
        @implements gtk::Accessible, gtk::Actionable, gtk::Buildable, gtk::ConstraintTarget;
}

impl CartRow {
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        let subtitle = format!(
            "{summary}\n{phone}\n{email}",
            summary = entry.summary(),
            phone = entry.owner.phone_number,
            email = entry.owner.email
        );

        let this: Self = glib::Object::builder()
            .property("title", glib::markup_escape_text(&entry.name))
            .property("subtitle", glib::markup_escape_text(&subtitle))
            .build();

        this.imp().price_label.set_label(&entry.price.with_currency());
        this
    }

    pub fn set_paintable(&self, paintable: Option<&gtk::gdk::Paintable>) {
        self.imp().picture.set_paintable(paintable);
    }
}
