//! Rate limiting middleware using token bucket algorithm.

use anyhow::Context;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Per-IP rate limiter for the receipt endpoints.
pub type RateLimitLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Creates a per-IP rate limiter.
///
/// Each client IP (taken from the socket peer address) gets a bucket of
/// `burst` requests, refilled by one every `replenish_interval_ms`
/// milliseconds. Requests exceeding the limit receive `429 Too Many Requests`.
///
/// The server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()` so that the peer
/// address is available.
///
/// # Errors
///
/// Returns an error if `replenish_interval_ms` or `burst` is zero.
pub fn layer(replenish_interval_ms: u64, burst: u32) -> anyhow::Result<RateLimitLayer> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_interval_ms)
        .burst_size(burst)
        .finish()
        .context("Invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_valid_config() {
        assert!(layer(20, 100).is_ok());
    }

    #[test]
    fn test_layer_rejects_zero() {
        assert!(layer(0, 100).is_err());
        assert!(layer(20, 0).is_err());
    }
}
