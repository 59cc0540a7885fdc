//! reqwest implementation of the backend client.

use anyhow::Result;
use reqwest::header;
use reqwest::redirect::Policy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::backend::api::{BackendApi, RawRedirect};
use crate::backend::failure::ApiFailure;
use crate::config::Config;
use crate::domain::entities::{BackendHealth, CreatedLink, LinkPage, LinkStats, NewShortLink};
use async_trait::async_trait;

/// HTTP client for the backend link store.
///
/// Holds two reqwest clients: one for the JSON API, and one with
/// redirect-following disabled for short-code probing. Both origins come from
/// the injected [`Config`]; nothing here reads the environment directly.
pub struct HttpBackend {
    api: reqwest::Client,
    probe: reqwest::Client,
    backend_url: String,
    public_url: String,
}

impl HttpBackend {
    /// Builds the client pair from the service configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend fails to initialize.
    pub fn new(config: &Config) -> Result<Self> {
        let api = reqwest::Client::builder().build()?;
        let probe = reqwest::Client::builder().redirect(Policy::none()).build()?;

        Ok(Self {
            api,
            probe,
            backend_url: config.backend_url.trim_end_matches('/').to_string(),
            public_url: config.public_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiFailure> {
        let response = self
            .api
            .get(self.endpoint(path))
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_failure)?;

        read_json(response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiFailure> {
        let response = self
            .api
            .post(self.endpoint(path))
            .header(header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await
            .map_err(transport_failure)?;

        read_json(response).await
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn list_links(&self, page: u32, limit: u32) -> Result<LinkPage, ApiFailure> {
        self.get_json(&format!("/api/links?page={page}&limit={limit}"))
            .await
    }

    async fn link_stats(&self, code: &str) -> Result<LinkStats, ApiFailure> {
        self.get_json(&format!("/api/links/{code}")).await
    }

    async fn create_link(&self, link: &NewShortLink) -> Result<CreatedLink, ApiFailure> {
        let mut created: CreatedLink = self.post_json("/api/links", link).await?;

        // The backend roots the short URL at its own origin, which is not
        // reachable from a browser. Rewrite to the public origin.
        created.short_url =
            rewrite_short_url(&created.short_url, &self.backend_url, &self.public_url);

        Ok(created)
    }

    async fn delete_link(&self, code: &str) -> Result<(), ApiFailure> {
        let response = self
            .api
            .delete(self.endpoint(&format!("/api/links/{code}")))
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_failure)?;

        // Success carries an empty body; only failures are parsed.
        check_status(response).await?;
        Ok(())
    }

    async fn health(&self) -> Result<BackendHealth, ApiFailure> {
        self.get_json("/healthz").await
    }

    async fn fetch_redirect(&self, code: &str) -> Result<RawRedirect, ApiFailure> {
        let response = self
            .probe
            .get(format!("{}/{}", self.backend_url, code))
            .header(header::ACCEPT, "application/json, text/plain, */*")
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        // Capture the body only for statuses the resolver cannot act on,
        // so it can be logged for diagnostics.
        let body = if !(300..400).contains(&status) && status != 404 {
            response.text().await.ok().filter(|text| !text.is_empty())
        } else {
            None
        };

        Ok(RawRedirect {
            status,
            location,
            body,
        })
    }
}

/// Rewrites a backend-origin short URL onto the public origin.
///
/// Extracts the final path segment of the returned URL and recomposes
/// `<public origin>/<segment>`. When the URL does not parse, falls back to a
/// literal substitution of the backend origin for the public origin.
pub fn rewrite_short_url(short_url: &str, backend_origin: &str, public_origin: &str) -> String {
    let public = public_origin.trim_end_matches('/');

    if let Ok(parsed) = Url::parse(short_url) {
        let segment = parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default();

        if !segment.is_empty() {
            return format!("{public}/{segment}");
        }
    }

    short_url.replace(backend_origin.trim_end_matches('/'), public)
}

/// Maps a reqwest error with no response into the transport failure bucket.
fn transport_failure(error: reqwest::Error) -> ApiFailure {
    ApiFailure::transport(format!("Network error occurred: {error}"))
}

/// Turns a non-success response into an [`ApiFailure`] with a parsed body.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiFailure> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body = if text.is_empty() {
        None
    } else {
        // A non-JSON error body is kept verbatim as a string value.
        Some(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    };

    Err(ApiFailure::from_response(status.as_u16(), body))
}

/// Checks the status and parses the success body into the expected type.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiFailure> {
    let response = check_status(response).await?;
    let status = response.status().as_u16();

    response.json().await.map_err(|error| ApiFailure {
        message: format!("Malformed response body: {error}"),
        status: Some(status),
        body: None,
    })
}
