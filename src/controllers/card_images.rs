use super::super::prelude::*;
use super::super::error::CatalogError;
use super::super::http::HttpClient;
use super::super::ui::Ui;
use super::super::widgets::StoreCard;

use tracing::warn;

/// Downloads card pictures on the blocking pool, one request per card.
#[derive(Clone)]
pub struct CardImages {
    ui: Ui
}

impl CardImages {

    pub const fn new(ui: Ui) -> Self {
        Self { ui }
    }

    pub fn load_all(&self) {
        for card in self.ui.catalog_grid().cards() {
            Self::load(&card);
        }
    }

    fn load(card: &StoreCard) {
        let url = card.image_url();
        let card_weak = card.downgrade();

        glib::spawn_future_local(async move {
            let result = gtk::gio::spawn_blocking(move || HttpClient::fetch_bytes(&url)).await;
            let Some(card) = card_weak.upgrade() else { return };

            let texture = match result {
                Ok(bytes) => bytes.and_then(Self::decode_texture),
                Err(_) => Err(CatalogError::Network("Image request was aborted".to_string())),
            };

            match texture {
                Ok(texture) => card.set_texture(&texture),
                Err(error) => warn!(%error, url = %card.image_url(), "Card image unavailable"),
            }
        });
    }

    fn decode_texture(bytes: Vec<u8>) -> Result<gtk::gdk::Texture, CatalogError> {
        gtk::gdk::Texture::from_bytes(&glib::Bytes::from_owned(bytes))
            .map_err(|error| CatalogError::Image(error.to_string()))
    }

}
