//! Blocking HTTP client for the upstream point-set manager

use std::time::Duration;

use log::{debug, warn};
use trifan_core::{Error, PointSetId, PointSetSource, Result};
use trifan_wire::decode_point_set;

/// Default timeout applied to upstream requests
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for the point-set manager service.
///
/// Fetches are synchronous; retry policy, if any, belongs to the
/// embedding application, not here.
pub struct PointSetManagerClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl PointSetManagerClient {
    /// Build a client for the manager at `base_url` with [`DEFAULT_TIMEOUT`].
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Build a client with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                Error::PointSetManagerUnavailable(format!("Failed to build HTTP client: {e}"))
            })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    fn point_set_url(&self, id: &PointSetId) -> String {
        format!("{}/pointset/{}", self.base_url, id)
    }
}

/// Map an upstream status code onto the error taxonomy.
///
/// 404 and 400 carry their own kinds; every other non-success status
/// reads as the manager being unavailable.
fn classify_status(status: u16) -> Result<()> {
    match status {
        200 => Ok(()),
        404 => Err(Error::PointSetNotFound),
        400 => Err(Error::InvalidPointSetId(
            "Rejected by the point set manager".to_string(),
        )),
        other => Err(Error::PointSetManagerUnavailable(format!(
            "Unexpected upstream status {other}"
        ))),
    }
}

impl PointSetSource for PointSetManagerClient {
    fn fetch_point_set(&self, id: &PointSetId) -> Result<Vec<u8>> {
        let url = self.point_set_url(id);
        debug!("Fetching point set from {url}");

        let response = self.client.get(&url).send().map_err(|e| {
            warn!("Point set manager request failed: {e}");
            Error::PointSetManagerUnavailable(format!("Network error: {e}"))
        })?;

        classify_status(response.status().as_u16())?;

        let body = response.bytes().map_err(|e| {
            Error::PointSetManagerUnavailable(format!("Network error: {e}"))
        })?;

        // Validate on receipt so corrupt upstream data never reaches the
        // engine as if it were trusted.
        decode_point_set(&body)?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_status_success() {
        assert!(classify_status(200).is_ok());
    }

    #[test]
    fn test_classify_status_not_found() {
        assert!(matches!(
            classify_status(404),
            Err(Error::PointSetNotFound)
        ));
    }

    #[test]
    fn test_classify_status_rejected_id() {
        assert!(matches!(
            classify_status(400),
            Err(Error::InvalidPointSetId(_))
        ));
    }

    #[test]
    fn test_classify_status_unexpected_codes_read_as_unavailable() {
        for status in [418, 500, 502, 503] {
            assert!(
                matches!(
                    classify_status(status),
                    Err(Error::PointSetManagerUnavailable(_))
                ),
                "status {status} should classify as unavailable"
            );
        }
    }

    #[test]
    fn test_point_set_url_joins_base_and_id() {
        let client = PointSetManagerClient::new("https://point-set-manager/").unwrap();
        let id = PointSetId::parse("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(
            client.point_set_url(&id),
            "https://point-set-manager/pointset/67e55044-10b1-426f-9247-bb680e5fe0c8"
        );
    }
}
