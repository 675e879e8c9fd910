use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::error::auth::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

/// Parses the token out of an `Authorization: Bearer <token>` header.
///
/// # Arguments
/// - `headers` - Request headers
///
/// # Returns
/// - `Ok(&str)` - The raw token
/// - `Err(AuthError::MissingToken)` - Header absent, not UTF-8, not a bearer scheme or empty
pub fn parse_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    match value.strip_prefix(BEARER_PREFIX).map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MissingToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers("Bearer abc.def.ghi");

        assert_eq!(parse_bearer_token(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn rejects_other_schemes() {
        let headers = headers("Basic dXNlcjpwYXNz");

        assert!(matches!(
            parse_bearer_token(&headers),
            Err(AuthError::MissingToken)
        ));
    }

    #[test]
    fn rejects_missing_and_empty_header() {
        assert!(parse_bearer_token(&HeaderMap::new()).is_err());
        assert!(parse_bearer_token(&headers("Bearer ")).is_err());
    }
}
