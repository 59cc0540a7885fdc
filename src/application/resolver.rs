//! Short-code resolution.
//!
//! Given an inbound short-code path, produces exactly one of three outcomes:
//! follow the recorded redirect, show "not found", or show a degraded page
//! because the backend is unreachable. The outcome is an explicit enum rather
//! than control flow, so the hosting layer can never confuse a missing link
//! with an infrastructure failure.

use tracing::{error, warn};

use crate::backend::api::BackendApi;

/// Outcome of resolving a short code.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The backend answered with a redirect; send the visitor there.
    Redirect { location: String },
    /// No live mapping for this code.
    NotFound,
    /// The backend never answered. The destination may well exist, so this
    /// must never collapse into [`Resolution::NotFound`].
    BackendUnreachable { detail: String },
}

/// Resolves a short code against the backend.
///
/// The backend is probed with redirect-following disabled and the raw status
/// interpreted here:
///
/// - 3xx with a non-empty `Location` header is the success path
/// - 404 is a missing code
/// - anything else (including a 3xx with no usable `Location`) falls back to
///   not-found, with the unexpected body logged for diagnostics
/// - a transport failure is reported as unreachable, never as not-found
pub async fn resolve_short_code<B: BackendApi + ?Sized>(backend: &B, code: &str) -> Resolution {
    let raw = match backend.fetch_redirect(code).await {
        Ok(raw) => raw,
        Err(failure) => {
            error!(code, %failure, "backend unreachable during redirect resolution");
            return Resolution::BackendUnreachable {
                detail: failure.message,
            };
        }
    };

    if (300..400).contains(&raw.status) {
        match raw.location.filter(|location| !location.is_empty()) {
            Some(location) => return Resolution::Redirect { location },
            None => {
                // Policy choice: a redirect status with no usable Location is
                // treated the same as a missing code rather than as a
                // distinct malformed-redirect state.
                warn!(code, status = raw.status, "redirect status without a Location header");
                return Resolution::NotFound;
            }
        }
    }

    if raw.status != 404 {
        warn!(
            code,
            status = raw.status,
            body = raw.body.as_deref().unwrap_or(""),
            "unexpected backend response during redirect resolution"
        );
    }

    Resolution::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::api::{MockBackendApi, RawRedirect};
    use crate::backend::failure::ApiFailure;

    fn raw(status: u16, location: Option<&str>) -> RawRedirect {
        RawRedirect {
            status,
            location: location.map(str::to_string),
            body: None,
        }
    }

    #[tokio::test]
    async fn test_redirect_status_with_location_resolves_to_redirect() {
        let mut backend = MockBackendApi::new();
        backend
            .expect_fetch_redirect()
            .withf(|code| code == "promo1")
            .times(1)
            .returning(|_| Ok(raw(302, Some("https://dest.example/"))));

        let resolution = resolve_short_code(&backend, "promo1").await;

        assert_eq!(
            resolution,
            Resolution::Redirect {
                location: "https://dest.example/".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_resolution_is_idempotent() {
        let mut backend = MockBackendApi::new();
        backend
            .expect_fetch_redirect()
            .times(2)
            .returning(|_| Ok(raw(307, Some("https://dest.example/page"))));

        let first = resolve_short_code(&backend, "stable").await;
        let second = resolve_short_code(&backend, "stable").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_404_resolves_to_not_found() {
        let mut backend = MockBackendApi::new();
        backend
            .expect_fetch_redirect()
            .times(1)
            .returning(|_| Ok(raw(404, None)));

        let resolution = resolve_short_code(&backend, "missing").await;

        assert_eq!(resolution, Resolution::NotFound);
    }

    #[tokio::test]
    async fn test_redirect_without_location_falls_back_to_not_found() {
        let mut backend = MockBackendApi::new();
        backend
            .expect_fetch_redirect()
            .times(1)
            .returning(|_| Ok(raw(302, None)));

        let resolution = resolve_short_code(&backend, "broken").await;

        assert_eq!(resolution, Resolution::NotFound);
    }

    #[tokio::test]
    async fn test_redirect_with_empty_location_falls_back_to_not_found() {
        let mut backend = MockBackendApi::new();
        backend
            .expect_fetch_redirect()
            .times(1)
            .returning(|_| Ok(raw(301, Some(""))));

        let resolution = resolve_short_code(&backend, "empty").await;

        assert_eq!(resolution, Resolution::NotFound);
    }

    #[tokio::test]
    async fn test_unexpected_status_falls_back_to_not_found() {
        let mut backend = MockBackendApi::new();
        backend.expect_fetch_redirect().times(1).returning(|_| {
            Ok(RawRedirect {
                status: 500,
                location: None,
                body: Some(r#"{"error":"boom"}"#.to_string()),
            })
        });

        let resolution = resolve_short_code(&backend, "odd").await;

        assert_eq!(resolution, Resolution::NotFound);
    }

    #[tokio::test]
    async fn test_transport_failure_resolves_to_unreachable_not_not_found() {
        let mut backend = MockBackendApi::new();
        backend
            .expect_fetch_redirect()
            .times(1)
            .returning(|_| Err(ApiFailure::transport("Network error occurred")));

        let resolution = resolve_short_code(&backend, "anything").await;

        assert_eq!(
            resolution,
            Resolution::BackendUnreachable {
                detail: "Network error occurred".to_string()
            }
        );
    }
}
