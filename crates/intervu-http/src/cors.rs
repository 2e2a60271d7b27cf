//! Cross-origin policy.
//!
//! Origins are allowed when they appear in the configured list or fully match
//! the optional origin regex. Credentials are allowed, so methods and headers
//! are mirrored from the request rather than using a wildcard.

use axum::http::{request::Parts, HeaderValue};
use regex::Regex;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Origins permitted to call the API from a browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorsConfig {
    /// Exact origins, e.g. `http://localhost:5173`.
    pub allowed_origins: Vec<String>,

    /// Pattern an origin must match in full, e.g. `https://.*\.example\.com`.
    pub origin_regex: Option<String>,
}

impl CorsConfig {
    /// Build the tower-http layer for this policy.
    ///
    /// Fails if `origin_regex` is not a valid regular expression.
    pub fn layer(&self) -> Result<CorsLayer, String> {
        let pattern = self
            .origin_regex
            .as_deref()
            .map(|p| {
                Regex::new(&format!("^(?:{})$", p))
                    .map_err(|e| format!("Invalid CORS origin regex {:?}: {}", p, e))
            })
            .transpose()?;
        let allowed = self.allowed_origins.clone();

        let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _parts: &Parts| {
            origin_allowed(origin, &allowed, pattern.as_ref())
        });

        Ok(CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()))
    }
}

fn origin_allowed(origin: &HeaderValue, allowed: &[String], pattern: Option<&Regex>) -> bool {
    let Ok(origin) = origin.to_str() else {
        return false;
    };
    allowed.iter().any(|a| a == origin) || pattern.is_some_and(|re| re.is_match(origin))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin(value: &'static str) -> HeaderValue {
        HeaderValue::from_static(value)
    }

    #[test]
    fn exact_origin_allowed() {
        let allowed = vec!["http://localhost:5173".to_string()];
        assert!(origin_allowed(&origin("http://localhost:5173"), &allowed, None));
        assert!(!origin_allowed(&origin("http://localhost:3000"), &allowed, None));
    }

    #[test]
    fn regex_must_match_whole_origin() {
        let re = Regex::new(r"^(?:https://.*\.example\.com)$").unwrap();
        assert!(origin_allowed(&origin("https://app.example.com"), &[], Some(&re)));
        assert!(!origin_allowed(
            &origin("https://app.example.com.evil.net"),
            &[],
            Some(&re)
        ));
    }

    #[test]
    fn nothing_configured_rejects_everything() {
        assert!(!origin_allowed(&origin("http://localhost:5173"), &[], None));
    }

    #[test]
    fn invalid_regex_is_an_error() {
        let config = CorsConfig {
            allowed_origins: vec![],
            origin_regex: Some("(".to_string()),
        };
        let err = config.layer().unwrap_err();
        assert!(err.contains("Invalid CORS origin regex"));
    }

    #[test]
    fn valid_config_builds_layer() {
        let config = CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
            origin_regex: Some(r"https://.*\.vercel\.app".to_string()),
        };
        assert!(config.layer().is_ok());
    }
}
