use crate::error::ApiError;
use configuration::ApiConfig;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

/// Header the platform uses to attribute requests to a calling application.
pub const APPLICATION_HEADER: &str = "X-Application-Name";

/// Builds the headers sent with every request.
///
/// Obtaining the token is the caller's business; an empty token means the
/// client runs unauthenticated (as it does against a local stand-in platform).
pub fn default_headers(config: &ApiConfig) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let app_name = HeaderValue::from_str(&config.app_name)
        .map_err(|e| ApiError::InvalidConfig(format!("application name: {}", e)))?;
    headers.insert(APPLICATION_HEADER, app_name);

    if !config.access_token.is_empty() {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|e| ApiError::InvalidConfig(format!("access token: {}", e)))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);
    }

    Ok(headers)
}
