//! Per-IP rate limiting middleware.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Rate limiter for public endpoints (redirects, get-link).
///
/// Token bucket per client IP: 5 requests/second with a burst of 100.
/// Requests over the limit receive `429 Too Many Requests`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(5)
            .burst_size(100)
            .finish()
            .expect("valid governor configuration"),
    );

    GovernorLayer::new(governor_conf)
}

/// Stricter rate limiter for authenticated endpoints.
///
/// 1 request/second with a burst of 20.
pub fn secure_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(1)
            .burst_size(20)
            .finish()
            .expect("valid governor configuration"),
    );

    GovernorLayer::new(governor_conf)
}
