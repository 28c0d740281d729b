use super::super::prelude::*;
use super::cart_row::CartRow;

use std::cell::RefCell;

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/dogz4eva/cart_panel.ui")]
    pub struct CartPanel {
        #[template_child(id = "cart-panel-empty")]
        pub empty_page: TemplateChild<adw::StatusPage>,
        #[template_child(id = "cart-panel-list-box")]
        pub list_box: TemplateChild<gtk::ListBox>,
        #[template_child(id = "cart-panel-total")]
        pub total_label: TemplateChild<gtk::Label>,

        pub rows: RefCell<Vec<CartRow>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CartPanel {
        const NAME: &'static str = "CartPanel";
        type Type = super::CartPanel;
        type ParentType = gtk::Box;

        fn class_init(class: &mut Self::Class) {
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for CartPanel {}
    impl WidgetImpl for CartPanel {}
    impl BoxImpl for CartPanel {}
}

glib::wrapper! {
    pub struct CartPanel(ObjectSubclass<imp::CartPanel>)
        @extends gtk::Box, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Orientable;
}

impl CartPanel {
    fn update_empty_state(&self, is_empty: bool) {
        let imp = self.imp();
        imp.empty_page.set_visible(is_empty);
        imp.list_box.set_visible(!is_empty);
    }

    pub fn remove_all_rows(&self) {
        let imp = self.imp();
        for row in imp.rows.borrow_mut().drain(..) {
            imp.list_box.remove(&row);
        }
        self.update_empty_state(true);
    }

    pub fn append_row(&self, row: CartRow) {
        let imp = self.imp();
        imp.list_box.append(&row);
        imp.rows.borrow_mut().push(row);
        self.update_empty_state(false);
    }

    /// The total is hidden while the cart is empty.
    pub fn set_total(&self, total: Option<&str>) {
        let total_label = &self.imp().total_label;
        total_label.set_label(total.unwrap_or_default());
        total_label.set_visible(total.is_some());
    }
}
