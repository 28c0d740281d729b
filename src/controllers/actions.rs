use super::super::prelude::*;
use super::super::constants;
use super::cart_visibility::CartVisibility;

pub struct Actions {
    application: adw::Application,
    cart_visibility: CartVisibility,
}

impl Actions {
    pub fn new(application: adw::Application, cart_visibility: CartVisibility) -> Self {
        let this = Self { application, cart_visibility };
        this.setup_quit_action();
        this.setup_toggle_cart_action();
        this.setup_about_action();
        this
    }

    fn setup_quit_action(&self) {
        let quit_action = gtk::gio::SimpleAction::new("quit", None);
        self.connect_quit_handler(&quit_action);
        self.application.add_action(&quit_action);
        self.application.set_accels_for_action("app.quit", &["<Ctrl>q"]);
    }

    fn connect_quit_handler(&self, quit_action: &gtk::gio::SimpleAction) {
        let application_weak = self.application.downgrade();
        quit_action.connect_activate(move |_action, _| {
            if let Some(application) = application_weak.upgrade() {
                application.quit();
            }
        });
    }

    fn setup_toggle_cart_action(&self) {
        let toggle_cart_action = gtk::gio::SimpleAction::new("toggle-cart", None);
        self.connect_toggle_cart_handler(&toggle_cart_action);
        self.application.add_action(&toggle_cart_action);
        self.application.set_accels_for_action("app.toggle-cart", &["<Ctrl>k"]);
    }

    fn connect_toggle_cart_handler(&self, toggle_cart_action: &gtk::gio::SimpleAction) {
        let cart_visibility_weak = self.cart_visibility.downgrade();
        toggle_cart_action.connect_activate(move |_action, _| {
            if let Some(cart_visibility) = cart_visibility_weak.upgrade() {
                cart_visibility.toggle();
            }
        });
    }

    fn setup_about_action(&self) {
        let about_action = gtk::gio::SimpleAction::new("about", None);
        let application_weak = self.application.downgrade();
        about_action.connect_activate(move |_action, _| {
            if let Some(application) = application_weak.upgrade() {
                Self::present_about_dialog(&application);
            }
        });
        self.application.add_action(&about_action);
    }

    fn present_about_dialog(application: &adw::Application) {
        let dialog = adw::AboutDialog::builder()
            .application_name(constants::APP_TITLE)
            .application_icon("dog-logo-symbolic")
            .version(constants::APP_VERSION)
            .comments(constants::APP_DESCRIPTION)
            .developer_name(constants::APP_AUTHOR)
            .build();
        dialog.present(application.active_window().as_ref());
    }

}
