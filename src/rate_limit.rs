//! Per-client fixed-window rate limiting.
//!
//! The limiter is an ordinary value built from [`Config`](crate::Config) and
//! handed to the router, so each server (and each test) owns its own state.
//! Tracked clients are capped at a fixed capacity.

use crate::Error;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct ClientWindow {
    count: u32,
    reset_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed { remaining: u32, reset_at: Instant },
    Limited { retry_after: Duration },
}

pub struct RateLimiter {
    limit: u32,
    window: Duration,
    capacity: usize,
    clients: Mutex<HashMap<String, ClientWindow>>,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration, capacity: usize) -> Self {
        Self {
            limit,
            window,
            capacity: capacity.max(1),
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn tracked_clients(&self) -> usize {
        self.clients
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Count one request from `client` at `now`.
    pub fn check(&self, client: &str, now: Instant) -> Decision {
        let mut clients = self
            .clients
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(window) = clients.get_mut(client) {
            if now < window.reset_at {
                if window.count >= self.limit {
                    return Decision::Limited {
                        retry_after: window.reset_at - now,
                    };
                }
                window.count += 1;
                return Decision::Allowed {
                    remaining: self.limit - window.count,
                    reset_at: window.reset_at,
                };
            }
        } else if clients.len() >= self.capacity {
            Self::evict(&mut clients, now, self.capacity);
        }

        let window = ClientWindow {
            count: 1,
            reset_at: now + self.window,
        };
        clients.insert(client.to_string(), window);

        Decision::Allowed {
            remaining: self.limit.saturating_sub(1),
            reset_at: window.reset_at,
        }
    }

    /// Drop expired windows, then the soonest-to-expire ones until there is
    /// room for one more client.
    fn evict(clients: &mut HashMap<String, ClientWindow>, now: Instant, capacity: usize) {
        clients.retain(|_, w| now < w.reset_at);

        while clients.len() >= capacity {
            let Some(oldest) = clients
                .iter()
                .min_by_key(|(_, w)| w.reset_at)
                .map(|(k, _)| k.clone())
            else {
                break;
            };
            clients.remove(&oldest);
        }
    }
}

/// Client identity: CDN-supplied address, then the first forwarded hop, then
/// the socket peer.
fn client_key(request: &Request) -> String {
    let headers = request.headers();

    if let Some(ip) = headers
        .get("cf-connecting-ip")
        .and_then(|v| v.to_str().ok())
    {
        return ip.trim().to_string();
    }

    if let Some(ip) = headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
    {
        return ip.trim().to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request,
    next: Next,
) -> Response {
    let client = client_key(&request);
    let now = Instant::now();

    match limiter.check(&client, now) {
        Decision::Limited { retry_after } => {
            tracing::warn!(client = %client, "rate limit exceeded");
            let secs = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            Error::RateLimited {
                limit: limiter.limit(),
                retry_after: secs,
            }
            .into_response()
        }
        Decision::Allowed {
            remaining,
            reset_at,
        } => {
            let mut response = next.run(request).await;

            let until_reset = chrono::Duration::from_std(reset_at.saturating_duration_since(now))
                .unwrap_or_else(|_| chrono::Duration::zero());
            let reset = (chrono::Utc::now() + until_reset).to_rfc3339();

            let headers = response.headers_mut();
            headers.insert("x-ratelimit-limit", HeaderValue::from(limiter.limit()));
            headers.insert("x-ratelimit-remaining", HeaderValue::from(remaining));
            if let Ok(value) = HeaderValue::from_str(&reset) {
                headers.insert("x-ratelimit-reset", value);
            }
            response
        }
    }
}
