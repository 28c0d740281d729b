mod actions;
mod card_images;
mod cart_toggle;
mod cart_visibility;
mod catalog_loading;

pub use self::actions::Actions as ActionsController;
pub use self::card_images::CardImages as CardImagesController;
pub use self::cart_toggle::CartToggle as CartToggleController;
pub use self::cart_visibility::CartVisibility as CartVisibilityController;
pub use self::catalog_loading::CatalogLoading as CatalogLoadingController;
