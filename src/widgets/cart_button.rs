use super::super::prelude::*;

use std::cell::Cell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate, glib::Properties)]
    #[template(resource = "/io/github/dogz4eva/cart_button.ui")]
    #[properties(wrapper_type = super::CartButton)]
    pub struct CartButton {
        #[template_child(id = "cart-button-badge")]
        pub badge: TemplateChild<gtk::Label>,

        #[property(get, set)]
        pub count: Cell<u32>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CartButton {
        const NAME: &'static str = "CartButton";
        type Type = super::CartButton;
        type ParentType = gtk::Button;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    #[glib::derived_properties]
    impl ObjectImpl for CartButton {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_badge();
        }
    }

    impl WidgetImpl for CartButton {}
    impl ButtonImpl for CartButton {}
}

glib::wrapper! {
    pub struct CartButton(ObjectSubclass<imp::CartButton>)
        @extends gtk::Button, gtk::Widget,
        @implements gtk::Accessible, gtk::Actionable, gtk::Buildable, gtk::ConstraintTarget;
}

impl CartButton {
    fn setup_badge(&self) {
        self.connect_notify_local(Some("count"), |this, _| {
            this.update_badge();
        });
        self.update_badge();
    }

    fn update_badge(&self) {
        let count = self.count();
        self.imp().badge.set_label(&count.to_string());
        let tooltip = match count {
            1 => "1 dog in the cart".to_string(),
            count => format!("{count} dogs in the cart"),
        };
        self.set_tooltip_text(Some(tooltip.as_str()));
    }

    pub fn set_cart_len(&self, len: usize) {
        self.set_count(u32::try_from(len).unwrap_or(u32::MAX));
    }
}
