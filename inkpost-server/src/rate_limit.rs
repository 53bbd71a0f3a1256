//! Per-client rate limiting for the listing endpoint
//!
//! Keyed token bucket from the `governor` crate, one bucket per client IP.
//! The client address comes from `X-Forwarded-For` when a proxy supplies
//! it, falling back to the peer address of the connection.

use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use governor::clock::DefaultClock;
use governor::state::keyed::DefaultKeyedStateStore;
use governor::{Quota, RateLimiter};
use tracing::{debug, warn};

use crate::error::ApiError;

/// Requests allowed per minute per client address.
pub const REQUESTS_PER_MINUTE: u32 = 10;

/// How often idle client buckets are evicted from the keyed store.
pub const HOUSEKEEPING_PERIOD: Duration = Duration::from_secs(60);

type KeyedLimiter = RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock>;

/// Keyed limiter shared by every clone of the router it guards.
#[derive(Clone)]
pub struct ClientRateLimiter {
    limiter: Arc<KeyedLimiter>,
}

impl ClientRateLimiter {
    pub fn new() -> Self {
        Self::per_minute(REQUESTS_PER_MINUTE)
    }

    pub fn per_minute(max_requests: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(max_requests).unwrap_or(NonZeroU32::MIN));
        Self {
            limiter: Arc::new(RateLimiter::keyed(quota)),
        }
    }

    /// Whether `client` still has quota left. Consumes one cell when it does.
    pub fn check(&self, client: IpAddr) -> bool {
        self.limiter.check_key(&client).is_ok()
    }

    /// Drop buckets for clients that have not been seen recently. The store
    /// keeps one bucket per distinct address and `X-Forwarded-For` lets a
    /// client mint fresh addresses at will, so the map needs pruning to stay
    /// bounded.
    pub fn evict_stale(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Number of client addresses with live buckets.
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }

    /// Evict stale buckets on a fixed interval until the task is dropped.
    pub async fn run_housekeeping(self) {
        let mut interval = tokio::time::interval(HOUSEKEEPING_PERIOD);
        loop {
            interval.tick().await;
            self.evict_stale();
        }
    }
}

impl Default for ClientRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

/// Route-scoped middleware rejecting clients over their quota with a 429.
pub async fn enforce(
    State(limiter): State<ClientRateLimiter>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_addr(&request);
    if limiter.check(client) {
        debug!(%client, "rate limit check passed");
        next.run(request).await
    } else {
        warn!(%client, "rate limit exceeded");
        ApiError::RateLimited.into_response()
    }
}

/// Client address from `X-Forwarded-For` (first entry) or the peer address.
fn client_addr(request: &Request) -> IpAddr {
    if let Some(forwarded) = request.headers().get("x-forwarded-for") {
        if let Ok(value) = forwarded.to_str() {
            if let Some(first) = value.split(',').next() {
                if let Ok(ip) = first.trim().parse() {
                    return ip;
                }
            }
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
        .unwrap_or(IpAddr::from([127, 0, 0, 1]))
}
