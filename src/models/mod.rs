mod cart;
mod country;
mod entry;
mod gender;
mod price;

pub use self::cart::Cart;
pub use self::country::Country;
pub use self::entry::{CatalogEntry, EntryId, OwnerContact, VendorProfile};
pub use self::gender::Gender;
pub use self::price::Price;
