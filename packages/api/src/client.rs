//! HTTP client for the partner collection.
//!
//! Three calls, matching the backend surface exactly:
//!
//! | Method | Path | Client call |
//! |--------|------|-------------|
//! | GET | `/partner` | [`PartnersApi::list`] |
//! | POST | `/partner` (multipart `name` + `image`) | [`PartnersApi::create`] |
//! | DELETE | `/partner/{id}` | [`PartnersApi::delete`] |

use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};

use crate::config;
use crate::models::{ImageUpload, Partner};

/// Errors produced by [`PartnersApi`] calls.
///
/// The admin view does not distinguish transport failures from error statuses;
/// both surface to the operator as the same retryable notification.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
}

/// Client for the partners endpoint of the configured backend.
#[derive(Debug, Clone)]
pub struct PartnersApi {
    base: String,
    http: reqwest::Client,
}

impl Default for PartnersApi {
    fn default() -> Self {
        Self::new()
    }
}

impl PartnersApi {
    /// Client against the externally configured base URL.
    pub fn new() -> Self {
        Self::with_base(config::api_base())
    }

    /// Client against an explicit base URL.
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        config::join(&self.base, path)
    }

    /// Fetch the full partner collection.
    pub async fn list(&self) -> Result<Vec<Partner>, ApiError> {
        let url = self.url("partner");
        tracing::debug!("GET {url}");
        let resp = check_status(self.http.get(url).send().await?)?;
        Ok(resp.json().await?)
    }

    /// Create a partner from a name and a staged image.
    ///
    /// Serialized as multipart form data with a `name` text field and an
    /// `image` binary part carrying the picked file's name. The image part is
    /// only appended when one was staged; the backend rejects the rest.
    pub async fn create(
        &self,
        name: &str,
        image: Option<ImageUpload>,
    ) -> Result<Partner, ApiError> {
        let url = self.url("partner");
        tracing::debug!("POST {url}");

        let mut form = Form::new().text("name", name.to_string());
        if let Some(image) = image {
            form = form.part(
                "image",
                Part::bytes(image.bytes).file_name(image.file_name),
            );
        }

        let resp = check_status(self.http.post(url).multipart(form).send().await?)?;
        Ok(resp.json().await?)
    }

    /// Delete a partner by identifier. The response body is ignored.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("partner/{id}"));
        tracing::debug!("DELETE {url}");
        check_status(self.http.delete(url).send().await?)?;
        Ok(())
    }
}

fn check_status(resp: Response) -> Result<Response, ApiError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_joined_against_the_base() {
        let client = PartnersApi::with_base("http://backend:5000/");
        assert_eq!(client.url("partner"), "http://backend:5000/partner");
        assert_eq!(
            client.url(&format!("partner/{}", "abc123")),
            "http://backend:5000/partner/abc123"
        );
    }

    #[test]
    fn status_errors_keep_the_code() {
        let err = ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "server responded with 500 Internal Server Error"
        );
    }
}
