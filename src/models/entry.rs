use super::{Country, Gender, Price};

use std::fmt;

/// Identity of a catalog entry, assigned once when the catalog is built.
///
/// The value equals the entry's position at creation time and never changes,
/// so cart membership survives any later reordering of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u32);

impl EntryId {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerContact {
    pub phone_number: String,
    pub email: String,
}

/// Synthetic vendor metadata attached to each fetched image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorProfile {
    pub name: String,
    pub breed: String,
    pub price: Price,
    pub gender: Gender,
    pub location: Country,
    pub owner: OwnerContact,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: EntryId,
    pub image_url: String,
    pub name: String,
    pub breed: String,
    pub price: Price,
    pub gender: Gender,
    pub location: Country,
    pub owner: OwnerContact,
    pub in_cart: bool,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(id: EntryId, image_url: String, profile: VendorProfile) -> Self {
        let VendorProfile { name, breed, price, gender, location, owner } = profile;
        Self {
            id,
            image_url,
            name,
            breed,
            price,
            gender,
            location,
            owner,
            in_cart: false,
        }
    }

    /// One-line summary used under the name in the cart panel.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} · {} · {}", self.breed, self.gender, self.location)
    }
}
