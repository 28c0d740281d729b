use crate::config::Config;
use crate::error::CatalogError;
use crate::generator::{ProfileSource, RandomProfiles};
use crate::http::HttpClient;
use crate::models::{CatalogEntry, EntryId};

use serde::Deserialize;
use tracing::{debug, info};

/// One element of the image search response. Fields other than `url` are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageRecord {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct CatalogLoader {
    config: Config,
}

impl CatalogLoader {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn search_url(&self) -> String {
        self.config.search_url()
    }

    /// Issues the single catalog request and decodes its body.
    pub fn fetch_records(&self) -> Result<Vec<ImageRecord>, CatalogError> {
        let url = self.search_url();
        debug!(%url, "Requesting image records");
        let body = HttpClient::fetch_bytes(&url)?;
        decode_records(&body)
    }

    pub fn load(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let records = self.fetch_records()?;
        info!(count = records.len(), "Fetched image records");
        Ok(build_entries(records, &mut RandomProfiles::from_thread_rng()))
    }
}

/// Raw bytes go straight to the JSON decoder, so a body that is not UTF-8
/// is a decode error like any other malformed body.
pub fn decode_records(body: &[u8]) -> Result<Vec<ImageRecord>, CatalogError> {
    Ok(serde_json::from_slice(body)?)
}

/// Maps records 1:1 into entries; entry `i` gets id `i` and one profile.
pub fn build_entries<P>(records: Vec<ImageRecord>, profiles: &mut P) -> Vec<CatalogEntry>
where
    P: ProfileSource + ?Sized,
{
    (0_u32..)
        .zip(records)
        .map(|(index, record)| {
            CatalogEntry::new(EntryId::new(index), record.url, profiles.next_profile())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{build_entries, decode_records, CatalogLoader, ImageRecord};
    use crate::config::Config;
    use crate::error::CatalogError;
    use crate::generator::RandomProfiles;
    use crate::models::EntryId;

    use mockito::mock;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const BODY: &str = r#"[
        {"id": "a1", "url": "https://cdn.example/a1.jpg", "width": 500, "height": 375},
        {"id": "b2", "url": "https://cdn.example/b2.jpg", "width": 640, "height": 480},
        {"id": "c3", "url": "https://cdn.example/c3.jpg", "width": 1024, "height": 768}
    ]"#;

    fn loader_for(path: &str, limit: usize) -> CatalogLoader {
        CatalogLoader::new(Config {
            endpoint: format!("{}{path}", mockito::server_url()),
            limit,
        })
    }

    #[test]
    fn decodes_records_and_ignores_extra_fields() {
        let records = decode_records(BODY.as_bytes()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], ImageRecord { url: "https://cdn.example/a1.jpg".to_string() });
    }

    #[test]
    fn record_without_url_is_a_decode_error() {
        let error = decode_records(br#"[{"id": "x"}]"#).unwrap_err();
        assert!(matches!(error, CatalogError::Decode(_)), "{error:?}");
    }

    #[test]
    fn non_array_body_is_a_decode_error() {
        let error = decode_records(br#"{"message": "rate limited"}"#).unwrap_err();
        assert!(matches!(error, CatalogError::Decode(_)), "{error:?}");
    }

    #[test]
    fn invalid_utf8_body_is_a_decode_error() {
        let error = decode_records(&[0xff, 0xfe, b'[']).unwrap_err();
        assert!(matches!(error, CatalogError::Decode(_)), "{error:?}");
    }

    #[test]
    fn builds_one_entry_per_record_with_sequential_ids() {
        let records = decode_records(BODY.as_bytes()).unwrap();
        let mut profiles = RandomProfiles::new(StdRng::seed_from_u64(9));
        let entries = build_entries(records.clone(), &mut profiles);

        assert_eq!(entries.len(), records.len());
        for (index, (entry, record)) in (0_u32..).zip(entries.iter().zip(&records)) {
            assert_eq!(entry.id, EntryId::new(index));
            assert_eq!(entry.image_url, record.url);
            assert!(!entry.in_cart);
        }
    }

    #[test]
    fn empty_response_builds_empty_catalog() {
        let mut profiles = RandomProfiles::new(StdRng::seed_from_u64(9));
        assert!(build_entries(Vec::new(), &mut profiles).is_empty());
    }

    #[test]
    fn loads_catalog_from_server() {
        let _m = mock("GET", "/catalog-ok/v1/images/search?limit=3")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(BODY)
            .create();

        let entries = loader_for("/catalog-ok/v1/images/search", 3).load().unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2].id, EntryId::new(2));
        assert_eq!(entries[2].image_url, "https://cdn.example/c3.jpg");
    }

    #[test]
    fn unsuccessful_status_is_reported() {
        let _m = mock("GET", "/catalog-down/v1/images/search?limit=20")
            .with_status(503)
            .with_body("upstream unavailable")
            .create();

        let error = loader_for("/catalog-down/v1/images/search", 20).load().unwrap_err();

        assert!(matches!(error, CatalogError::Status { code: 503, .. }), "{error:?}");
        assert_eq!(error.to_string(), "Service Unavailable");
    }

    #[test]
    fn non_utf8_response_from_server_is_a_decode_error() {
        let _m = mock("GET", "/catalog-binary/v1/images/search?limit=20")
            .with_status(200)
            .with_body([0xff, 0xfe, b'['])
            .create();

        let error = loader_for("/catalog-binary/v1/images/search", 20).load().unwrap_err();

        assert!(matches!(error, CatalogError::Decode(_)), "{error:?}");
    }

    #[test]
    fn unreachable_server_is_a_network_error() {
        let loader = CatalogLoader::new(Config {
            endpoint: "http://127.0.0.1:9/v1/images/search".to_string(),
            limit: 20,
        });

        let error = loader.fetch_records().unwrap_err();
        assert!(matches!(error, CatalogError::Network(_)), "{error:?}");
    }
}
