use crate::constants::USER_AGENT;
use crate::error::CatalogError;

/// Blocking HTTP helpers; call them off the main thread.
pub struct HttpClient;

impl HttpClient {
    fn send_request(url: &str) -> Result<minreq::Response, CatalogError> {
        let response = minreq::get(url)
            .with_header("User-Agent", USER_AGENT)
            .send()?;

        if (200..300).contains(&response.status_code) {
            Ok(response)
        } else {
            Err(CatalogError::status(response.status_code, &response.reason_phrase))
        }
    }

    pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, CatalogError> {
        Ok(Self::send_request(url)?.into_bytes())
    }
}
