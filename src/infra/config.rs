//! Centralized configuration (environment variables + defaults).

use anyhow::Context;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
/// Tracing filter used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_LOG_FILTER: &str = "baseroot_desci_api=info,tower_http=info";

/// Listener address (`BIND_ADDR`, default `0.0.0.0:3000`).
pub fn bind_addr() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    raw.parse()
        .with_context(|| format!("BIND_ADDR must be a socket address, got '{}'", raw))
}

/// Common prefix for the route groups (`API_PREFIX`, default `/api/v1`).
///
/// Always starts with `/` and never ends with one.
pub fn api_prefix() -> String {
    let raw = std::env::var("API_PREFIX").unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string());
    normalize_prefix(&raw)
}

/// Optional seed for the literature-discovery random source (`DISCOVERY_RNG_SEED`).
pub fn discovery_rng_seed() -> anyhow::Result<Option<u64>> {
    match std::env::var("DISCOVERY_RNG_SEED") {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse::<u64>()
            .map(Some)
            .with_context(|| format!("DISCOVERY_RNG_SEED must be a valid u64, got '{}'", v)),
        _ => Ok(None),
    }
}

pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_prefix;

    #[test]
    fn prefix_is_normalized() {
        assert_eq!(normalize_prefix("/api/v1"), "/api/v1");
        assert_eq!(normalize_prefix("api/v1/"), "/api/v1");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix(""), "");
    }
}
