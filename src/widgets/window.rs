use super::super::prelude::*;
use super::cart_button::CartButton;
use super::cart_panel::CartPanel;
use super::catalog_grid::CatalogGrid;

use gtk::gio::{ActionGroup, ActionMap, Menu};

mod imp {
    use super::*;

    #[derive(Default, gtk::CompositeTemplate)]
    #[template(resource = "/io/github/dogz4eva/store_window.ui")]
    pub struct Window {
        #[template_child(id = "store-window-split-view")]
        pub split_view: TemplateChild<adw::OverlaySplitView>,
        #[template_child(id = "store-window-menu-button")]
        pub menu_button: TemplateChild<gtk::MenuButton>,
        #[template_child(id = "store-window-cart-button")]
        pub cart_button: TemplateChild<CartButton>,
        #[template_child(id = "store-window-cart-panel")]
        pub cart_panel: TemplateChild<CartPanel>,
        #[template_child(id = "store-window-catalog-grid")]
        pub catalog_grid: TemplateChild<CatalogGrid>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for Window {
        const NAME: &'static str = "StoreWindow";
        type Type = super::Window;
        type ParentType = adw::ApplicationWindow;

        fn class_init(class: &mut Self::Class) {
            CartButton::ensure_type();
            CartPanel::ensure_type();
            CatalogGrid::ensure_type();
            Self::bind_template(class);
        }

        fn instance_init(object: &glib::subclass::InitializingObject<Self>) {
            object.init_template();
        }
    }

    impl ObjectImpl for Window {
        fn constructed(&self) {
            self.parent_constructed();
            self.obj().setup_menu();
        }
    }
    impl WidgetImpl for Window {}
    impl WindowImpl for Window {}
    impl ApplicationWindowImpl for Window {}
    impl AdwApplicationWindowImpl for Window {}
}

glib::wrapper! {
    pub struct Window(ObjectSubclass<imp::Window>)
        @extends adw::ApplicationWindow, gtk::ApplicationWindow, gtk::Window, gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::Native, gtk::Root, gtk::ShortcutManager, ActionMap, ActionGroup;
}

impl Window {
    pub fn new(application: &adw::Application) -> Self {
        glib::Object::builder()
            .property("application", application)
            .build()
    }

    fn setup_menu(&self) {
        let cart_section = Menu::new();
        cart_section.append(Some("Toggle Cart"), Some("app.toggle-cart"));

        let application_section = Menu::new();
        application_section.append(Some("About Dogz4Eva"), Some("app.about"));
        application_section.append(Some("Quit"), Some("app.quit"));

        let menu = Menu::new();
        menu.append_section(None, &cart_section);
        menu.append_section(None, &application_section);
        self.imp().menu_button.set_menu_model(Some(&menu));
    }

    pub fn cart_button(&self) -> &CartButton {
        &self.imp().cart_button
    }

    pub fn cart_panel(&self) -> &CartPanel {
        &self.imp().cart_panel
    }

    pub fn catalog_grid(&self) -> &CatalogGrid {
        &self.imp().catalog_grid
    }

    pub fn set_cart_visible(&self, visible: bool) {
        self.imp().split_view.set_show_sidebar(visible);
        self.catalog_grid().set_cart_visible(visible);
    }
}
