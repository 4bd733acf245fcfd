//! Cross-origin policy for the storefront.
//!
//! Exactly one origin, the configured `FRONTEND_URL`, may call the API from a
//! browser. Methods and headers are mirrored from the preflight request and
//! credentials are allowed. With no origin configured, cross-origin requests
//! get no CORS headers at all.
//!
//! Only `x-request-id` is exposed to scripts. A wildcard
//! `Access-Control-Expose-Headers` is not honoured by browsers on credentialed
//! requests, and `tower-http` rejects that combination outright.

use axum::http::{HeaderName, HeaderValue};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use super::request_id::REQUEST_ID_HEADER;

/// Build the CORS layer for the configured frontend origin.
#[must_use]
pub fn cors_layer(frontend_url: Option<&str>) -> CorsLayer {
    let origins: Vec<HeaderValue> = frontend_url
        .map(|url| url.trim().trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .and_then(|url| match HeaderValue::from_str(url) {
            Ok(origin) => Some(origin),
            Err(e) => {
                tracing::warn!(frontend_url = %url, error = %e, "Ignoring invalid FRONTEND_URL");
                None
            }
        })
        .into_iter()
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
        routing::post,
    };
    use tower::ServiceExt;

    use super::*;

    fn app(frontend_url: Option<&str>) -> Router {
        Router::new()
            .route("/order/", post(|| async { "ok" }))
            .layer(cors_layer(frontend_url))
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/order/")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_preflight_from_frontend_is_allowed() {
        let response = app(Some("https://kohinoor.example/"))
            .oneshot(preflight("https://kohinoor.example"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://kohinoor.example"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "POST");
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "content-type"
        );
    }

    #[tokio::test]
    async fn test_other_origin_gets_no_allow_header() {
        let response = app(Some("https://kohinoor.example"))
            .oneshot(preflight("https://evil.example"))
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_no_frontend_configured() {
        let response = app(None)
            .oneshot(preflight("https://kohinoor.example"))
            .await
            .unwrap();

        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_request_id_is_exposed_to_the_frontend() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/order/")
            .header(header::ORIGIN, "https://kohinoor.example")
            .body(Body::empty())
            .unwrap();

        let response = app(Some("https://kohinoor.example"))
            .oneshot(request)
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_EXPOSE_HEADERS)
                .unwrap(),
            "x-request-id"
        );
    }
}
