pub mod cache;
pub mod client;
pub mod forwarding;
pub mod rate_limiter;
pub mod transport;

pub use cache::ResponseCache;
pub use client::{ClientSettings, DnsClient};
pub use rate_limiter::RateLimiter;
pub use transport::{DnsTransport, NetworkTransport, TransportError};
