mod cart_button;
mod cart_panel;
mod cart_row;
mod catalog_grid;
mod store_card;
mod window;

pub use cart_button::CartButton;
pub use cart_panel::CartPanel;
pub use cart_row::CartRow;
pub use catalog_grid::CatalogGrid;
pub use store_card::StoreCard;
pub use window::Window;
