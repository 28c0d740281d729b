use std::cell::RefCell;
use std::rc::Rc;

use super::prelude::*;
use super::config::Config;
use super::constants;
use super::controllers::{
    ActionsController,
    CardImagesController,
    CartToggleController,
    CartVisibilityController,
    CatalogLoadingController,
};
use super::loader::CatalogLoader;
use super::populator::Populator;
use super::store::Store;
use super::ui::Ui;
use super::widgets::Window;

use tracing::{error, info};

/// Everything that lives for one window: the UI, the store and the
/// controllers wired to them.
struct Session {
    ui: Ui,
    _catalog_loading: CatalogLoadingController,
    _cart_toggle: CartToggleController,
    _actions: ActionsController,
}

struct ApplicationState {
    application: adw::Application,
    config: Config,
    session: RefCell<Option<Session>>,
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {

    pub fn new(config: Config) -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            adw::gio::ApplicationFlags::default()
        );

        let state = Rc::new(ApplicationState {
            application,
            config,
            session: RefCell::new(None),
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_activate_event(state);
        Self::setup_startup_event(state);
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |_application| {
            let Some(state) = state_weak.upgrade() else { return };
            let this = Self { state };
            this.present();
        });
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |_application| {
            if let Err(error) = Self::setup_resources() {
                error!("Failed to set up resources: {error:#}");
            }
        });
    }

    fn present(&self) {
        if let Some(session) = self.state.session.borrow().as_ref() {
            session.ui.window().present();
            return;
        }

        let session = self.setup_session();
        session.ui.window().present();
        self.state.session.replace(Some(session));
    }

    fn setup_session(&self) -> Session {
        let application = &self.state.application;
        let ui = Ui::new(Window::new(application));
        let store = Store::shared();
        Populator::populate_cart(&ui, &store.borrow());

        let loader = CatalogLoader::new(self.state.config.clone());
        let card_images = CardImagesController::new(ui.clone());
        let catalog_loading = CatalogLoadingController::new(ui.clone(), store.clone(), loader, card_images);
        let cart_toggle = CartToggleController::new(ui.clone(), store.clone());
        let cart_visibility = CartVisibilityController::new(ui.clone(), store);
        let actions = ActionsController::new(application.clone(), cart_visibility);

        catalog_loading.start();
        info!("Storefront ready");

        Session {
            ui,
            _catalog_loading: catalog_loading,
            _cart_toggle: cart_toggle,
            _actions: actions,
        }
    }

    fn setup_resources() -> Result<()> {
        gtk::glib::set_application_name(constants::APP_TITLE);
        gtk::glib::set_prgname(Some(constants::APP_NAME));
        gtk::gio::resources_register_include_impl(constants::APP_RESOURCES)
            .context("Failed to register bundled resources")?;

        let display = gtk::gdk::Display::default().context("No default display")?;

        let icon_theme = gtk::IconTheme::for_display(&display);
        icon_theme.add_resource_path(&format!("{}/icons", constants::APP_PREFIX));

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_resource(&format!("{}/style.css", constants::APP_PREFIX));

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn run(&self) -> Result<()> {
        let result = self.state.application.run();
        if matches!(result, adw::glib::ExitCode::FAILURE) {
            bail!("Application exited with code {}", result.get());
        }

        Ok(())
    }

}
