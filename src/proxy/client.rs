use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::UpstreamConfig;
use crate::proxy::routes::{PayloadKind, ResolvedRoute, Upstream};

/// Generic error envelope returned when a forward fails outright
#[derive(Debug, Serialize)]
pub struct ProxyErrorBody {
    pub error: bool,
    pub message: String,
    pub details: String,
}

impl ProxyErrorBody {
    pub fn new<M: Into<String>, D: Into<String>>(message: M, details: D) -> Self {
        ProxyErrorBody {
            error: true,
            message: message.into(),
            details: details.into(),
        }
    }
}

/// Outcome of a single best-effort forward
#[derive(Debug)]
pub struct ProxyResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Upstream request failed: {0}")]
    Transport(String),
    #[error("Upstream returned a non-JSON body: {0}")]
    InvalidJson(String),
}

/// Stateless forwarder to the three configured upstream origins.
///
/// One request out per request in: no retry, no backoff, only the
/// client-level timeout from [`UpstreamConfig`].
pub struct ProxyClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl ProxyClient {
    pub fn new(config: UpstreamConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProxyError::Transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(ProxyClient { http, config })
    }

    fn base_url(&self, upstream: Upstream) -> &str {
        match upstream {
            Upstream::Backend => &self.config.backend_base_url,
            Upstream::WordPress => &self.config.wordpress_base_url,
            Upstream::WooCommerce => &self.config.woocommerce_base_url,
        }
    }

    /// Full outbound URL for a resolved route, WooCommerce credentials included
    pub fn target_url(&self, route: &ResolvedRoute) -> String {
        let mut url = format!("{}{}", self.base_url(route.upstream), route.path_and_query);
        if route.upstream == Upstream::WooCommerce {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(&format!(
                "consumer_key={}&consumer_secret={}",
                self.config.wc_consumer_key, self.config.wc_consumer_secret
            ));
        }
        url
    }

    /// Forward one request and relay the upstream's status and body.
    ///
    /// `authorization` is passed through untouched when present. Non-GET
    /// bodies are forwarded as JSON.
    pub async fn forward(
        &self,
        method: &str,
        route: &ResolvedRoute,
        authorization: Option<&str>,
        body: Option<Bytes>,
    ) -> Result<ProxyResponse, ProxyError> {
        let url = self.target_url(route);
        debug!("Forwarding {} to {}", method, url);

        let method = reqwest::Method::from_bytes(method.as_bytes())
            .map_err(|e| ProxyError::Transport(format!("Invalid method: {}", e)))?;
        let mut request = self.http.request(method.clone(), &url);

        if let Some(auth) = authorization {
            request = request.header("Authorization", auth);
        }
        if let Some(bytes) = body {
            if !bytes.is_empty() && method != reqwest::Method::GET {
                request = request
                    .header("Content-Type", "application/json")
                    .body(bytes);
            }
        }

        let response = request.send().await.map_err(|e| {
            error!("Upstream request to {} failed: {}", url, e);
            ProxyError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read upstream body from {}: {}", url, e);
            ProxyError::Transport(e.to_string())
        })?;

        // JSON routes relay the body verbatim, but an unparseable body means
        // the upstream broke contract and the caller gets the 500 envelope
        if route.payload == PayloadKind::Json
            && !body.is_empty()
            && serde_json::from_slice::<serde_json::Value>(&body).is_err()
        {
            return Err(ProxyError::InvalidJson(format!(
                "{} returned {} with a non-JSON body",
                url, status
            )));
        }

        info!("Upstream {} answered {}", url, status);
        Ok(ProxyResponse {
            status,
            content_type,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proxy::routes::resolve;

    fn client() -> ProxyClient {
        ProxyClient::new(UpstreamConfig::from_test_env()).unwrap()
    }

    #[test]
    fn test_target_url_for_backend_route() {
        let route = resolve("/api/properties", "id=123").unwrap();
        assert_eq!(
            client().target_url(&route),
            "http://localhost:9090/api/properties/123"
        );
    }

    #[test]
    fn test_target_url_appends_wc_credentials() {
        let route = resolve("/api/properties/sources/woocommerce", "").unwrap();
        assert_eq!(
            client().target_url(&route),
            "http://localhost:9092/wp-json/wc/v3/products?consumer_key=ck_test&consumer_secret=cs_test"
        );
    }

    #[test]
    fn test_target_url_wc_credentials_after_existing_query() {
        let route = resolve("/api/properties/sources/woocommerce", "per_page=5").unwrap();
        let url = client().target_url(&route);
        assert!(url.contains("/wp-json/wc/v3/products?per_page=5&consumer_key=ck_test"));
    }

    #[test]
    fn test_error_body_shape() {
        let body = ProxyErrorBody::new("Proxy failure", "connection refused");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], true);
        assert_eq!(json["message"], "Proxy failure");
        assert_eq!(json["details"], "connection refused");
    }
}
