//! Origin allow-list enforcement and CORS headers.
//!
//! Runs before any business logic: a request declaring an origin that is not
//! on the allow-list is rejected with 403, preflights answer 200 empty, and
//! requests without an origin (server-to-server) pass through untouched.

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::config::Config;
use crate::errors::AppError;
use crate::state::AppState;

/// Origins always allowed so local front-end development works without
/// configuration.
const LOCAL_DEV_ORIGINS: &[&str] = &["http://localhost:3000", "http://localhost:5173"];

/// The set of origins permitted to call the API, derived once from config.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn from_config(config: &Config) -> Self {
        let mut origins: Vec<String> =
            LOCAL_DEV_ORIGINS.iter().map(|o| o.to_string()).collect();

        origins.extend(config.allowed_origins.iter().map(|o| normalize_origin(o)));

        if let Some(site) = &config.site_url {
            origins.push(normalize_origin(site));
        }
        if let Some(host) = &config.vercel_url {
            origins.push(normalize_origin(host));
        }

        origins.dedup();
        Self(origins)
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }
}

/// Turns a configured URL or bare host into an origin: trims trailing
/// slashes and assumes https when no scheme is given.
fn normalize_origin(value: &str) -> String {
    let value = value.trim_end_matches('/');
    if value.starts_with("http://") || value.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{value}")
    }
}

/// Middleware enforcing the allow-list and attaching CORS headers.
pub async fn origin_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    if let Some(origin) = &origin {
        if !state.allowed_origins.contains(origin) {
            warn!("Rejected request from origin: {origin}");
            return AppError::OriginRejected.into_response();
        }
    }

    let mut response = if request.method() == Method::OPTIONS {
        // Preflight: answer directly, skip routing
        StatusCode::OK.into_response()
    } else {
        next.run(request).await
    };

    if let Some(origin) = origin {
        if let Ok(value) = HeaderValue::from_str(&origin) {
            let headers = response.headers_mut();
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("GET, POST, OPTIONS"),
            );
            headers.insert(
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type, Authorization"),
            );
            headers.insert(
                header::ACCESS_CONTROL_MAX_AGE,
                HeaderValue::from_static("86400"),
            );
        }
    }

    response
}
