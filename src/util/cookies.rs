//! Preference-cookie codec
//!
//! Small JSON-serializable UI preferences (theme, language, navbar state) are
//! stored one per cookie. Values are JSON-encoded and percent-escaped on the
//! wire; reading falls back to the raw string when the stored value is not
//! valid JSON, so pre-existing plain-string cookies still round-trip.

use cookie::{time::Duration, Cookie, SameSite};
use serde_json::Value;
use tracing::debug;

use crate::config::CookieConfig;

/// Explicit preference-storage context, passed to any handler that needs it
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    config: CookieConfig,
}

impl PreferenceStore {
    pub fn new(config: CookieConfig) -> Self {
        PreferenceStore { config }
    }

    /// Build a Set-Cookie value storing `value` under `key`
    pub fn build(&self, key: &str, value: &Value) -> Cookie<'static> {
        let serialized = value.to_string();
        debug!("Storing preference cookie: {}", key);
        let mut cookie = Cookie::new(key.to_string(), serialized);
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Strict);
        cookie.set_secure(self.config.secure);
        cookie.set_max_age(Duration::days(self.config.max_age_days));
        cookie
    }

    /// Build a removal cookie for `key`
    pub fn removal(&self, key: &str) -> Cookie<'static> {
        let mut cookie = Cookie::new(key.to_string(), String::new());
        cookie.set_path("/");
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Strict);
        cookie.set_secure(self.config.secure);
        cookie.set_max_age(Duration::ZERO);
        cookie
    }

    /// Read the preference stored under `key` from a Cookie request header.
    ///
    /// Returns the deserialized JSON value, or the raw string when the stored
    /// text does not parse as JSON.
    pub fn read(&self, cookie_header: &str, key: &str) -> Option<Value> {
        for parsed in Cookie::split_parse_encoded(cookie_header.to_string()) {
            let cookie = match parsed {
                Ok(c) => c,
                Err(_) => continue,
            };
            if cookie.name() == key {
                let raw = cookie.value().to_string();
                return Some(
                    serde_json::from_str(&raw)
                        .unwrap_or_else(|_| Value::String(raw)),
                );
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PreferenceStore {
        PreferenceStore::new(CookieConfig::default())
    }

    #[test]
    fn test_round_trip_string_value() {
        let store = store();
        let cookie = store.build("theme", &Value::String("dark".to_string()));
        let header = cookie.encoded().to_string();
        // Only the name=value part reaches the request Cookie header
        let pair = header.split(';').next().unwrap().to_string();
        let value = store.read(&pair, "theme").unwrap();
        assert_eq!(value, Value::String("dark".to_string()));
    }

    #[test]
    fn test_round_trip_object_value() {
        let store = store();
        let original = serde_json::json!({ "visible": false, "variant": "compact" });
        let cookie = store.build("navbar", &original);
        let pair = cookie.encoded().to_string().split(';').next().unwrap().to_string();
        assert_eq!(store.read(&pair, "navbar").unwrap(), original);
    }

    #[test]
    fn test_raw_string_fallback() {
        let store = store();
        // Not JSON: falls back to the raw string
        let value = store.read("lang=es", "lang").unwrap();
        assert_eq!(value, Value::String("es".to_string()));
    }

    #[test]
    fn test_missing_key_returns_none() {
        assert!(store().read("theme=%22dark%22", "lang").is_none());
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = store().build("theme", &Value::String("dark".to_string()));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn test_removal_expires_immediately() {
        let cookie = store().removal("theme");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert!(cookie.value().is_empty());
    }
}
