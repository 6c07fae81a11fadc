//! Declarative inbound-to-upstream route table.
//!
//! Each proxied API path maps to one upstream origin and an outbound path
//! template. Resolution is a single table scan; per-route rewrites are plain
//! functions kept next to their entry, so the whole mapping reads top to
//! bottom in one place.

/// Upstream origin a proxied request is forwarded to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upstream {
    /// Real-estate REST backend
    Backend,
    /// WordPress REST API
    WordPress,
    /// WooCommerce REST API (needs consumer credentials)
    WooCommerce,
}

/// How the upstream response body is relayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Relayed as JSON; a body that fails to parse is an upstream error
    Json,
    /// Relayed verbatim with the upstream content type (images)
    Binary,
}

#[derive(Debug, Clone, Copy)]
enum Pattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl Pattern {
    /// Returns the matched remainder for prefixes, "" for exact hits
    fn matches<'a>(&self, path: &'a str) -> Option<&'a str> {
        match self {
            Pattern::Exact(p) => (path == *p).then_some(""),
            Pattern::Prefix(p) => path.strip_prefix(p),
        }
    }
}

type Query = [(String, String)];

struct ProxyRoute {
    pattern: Pattern,
    upstream: Upstream,
    payload: PayloadKind,
    rewrite: fn(rest: &str, query: &Query) -> String,
}

/// A resolved proxy target: which upstream, and the outbound path + query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub upstream: Upstream,
    pub path_and_query: String,
    pub payload: PayloadKind,
}

static ROUTES: &[ProxyRoute] = &[
    ProxyRoute {
        pattern: Pattern::Exact("/api/auth/register"),
        upstream: Upstream::Backend,
        payload: PayloadKind::Json,
        rewrite: |_, _| "/user/register".to_string(),
    },
    ProxyRoute {
        pattern: Pattern::Exact("/api/auth/login"),
        upstream: Upstream::Backend,
        payload: PayloadKind::Json,
        rewrite: |_, _| "/user/login".to_string(),
    },
    ProxyRoute {
        pattern: Pattern::Exact("/api/auth/me"),
        upstream: Upstream::Backend,
        payload: PayloadKind::Json,
        rewrite: |_, _| "/user/me".to_string(),
    },
    ProxyRoute {
        // ?id=X is promoted into the upstream path; other params pass through
        pattern: Pattern::Exact("/api/properties"),
        upstream: Upstream::Backend,
        payload: PayloadKind::Json,
        rewrite: |_, query| match query_get(query, "id") {
            Some(id) => format!("/api/properties/{}", id),
            None => with_query("/api/properties", query),
        },
    },
    ProxyRoute {
        pattern: Pattern::Exact("/api/properties/sources/woocommerce"),
        upstream: Upstream::WooCommerce,
        payload: PayloadKind::Json,
        rewrite: |_, query| match query_get(query, "id") {
            Some(id) => format!("/wp-json/wc/v3/products/{}", id),
            None => with_query("/wp-json/wc/v3/products", query),
        },
    },
    ProxyRoute {
        pattern: Pattern::Exact("/api/blogs/slugs"),
        upstream: Upstream::WordPress,
        payload: PayloadKind::Json,
        rewrite: |_, query| {
            let mut target = with_query("/wp-json/wp/v2/posts", query);
            target.push(if target.contains('?') { '&' } else { '?' });
            target.push_str("_embed=true");
            target
        },
    },
    ProxyRoute {
        pattern: Pattern::Prefix("/api/images/"),
        upstream: Upstream::Backend,
        payload: PayloadKind::Binary,
        rewrite: |rest, _| format!("/uploads/{}", rest),
    },
];

/// Resolve an inbound request path and raw query string against the table
pub fn resolve(path: &str, raw_query: &str) -> Option<ResolvedRoute> {
    let query = parse_query(raw_query);
    for route in ROUTES {
        if let Some(rest) = route.pattern.matches(path) {
            return Some(ResolvedRoute {
                upstream: route.upstream,
                path_and_query: (route.rewrite)(rest, &query),
                payload: route.payload,
            });
        }
    }
    None
}

/// Split a raw query string into pairs without decoding; values are relayed
/// to the upstream exactly as they arrived.
pub fn parse_query(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .filter(|part| !part.is_empty())
        .map(|part| match part.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (part.to_string(), String::new()),
        })
        .collect()
}

fn query_get<'a>(query: &'a Query, key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn with_query(path: &str, query: &Query) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let joined: Vec<String> = query.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    format!("{}?{}", path, joined.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_register_maps_to_user_register() {
        let route = resolve("/api/auth/register", "").unwrap();
        assert_eq!(route.upstream, Upstream::Backend);
        assert_eq!(route.path_and_query, "/user/register");
        assert_eq!(route.payload, PayloadKind::Json);
    }

    #[test]
    fn test_property_id_promoted_into_path() {
        let route = resolve("/api/properties", "id=123").unwrap();
        assert_eq!(route.upstream, Upstream::Backend);
        assert_eq!(route.path_and_query, "/api/properties/123");
    }

    #[test]
    fn test_property_listing_passes_query_through() {
        let route = resolve("/api/properties", "page=2&limit=10").unwrap();
        assert_eq!(route.path_and_query, "/api/properties?page=2&limit=10");
    }

    #[test]
    fn test_woocommerce_product_by_id() {
        let route = resolve("/api/properties/sources/woocommerce", "id=77").unwrap();
        assert_eq!(route.upstream, Upstream::WooCommerce);
        assert_eq!(route.path_and_query, "/wp-json/wc/v3/products/77");
    }

    #[test]
    fn test_blog_slug_appends_embed() {
        let route = resolve("/api/blogs/slugs", "slug=mercado-madrid").unwrap();
        assert_eq!(route.upstream, Upstream::WordPress);
        assert_eq!(
            route.path_and_query,
            "/wp-json/wp/v2/posts?slug=mercado-madrid&_embed=true"
        );
    }

    #[test]
    fn test_image_path_maps_to_uploads() {
        let route = resolve("/api/images/fotos/salon.jpg", "").unwrap();
        assert_eq!(route.upstream, Upstream::Backend);
        assert_eq!(route.path_and_query, "/uploads/fotos/salon.jpg");
        assert_eq!(route.payload, PayloadKind::Binary);
    }

    #[test]
    fn test_unknown_path_is_not_resolved() {
        assert!(resolve("/api/unknown", "").is_none());
    }

    #[test]
    fn test_parse_query_handles_empty_and_flags() {
        assert!(parse_query("").is_empty());
        let pairs = parse_query("a=1&flag&b=2");
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1], ("flag".to_string(), String::new()));
    }
}
