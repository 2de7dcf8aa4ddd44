pub mod dns_resolver;
pub mod response_cache;

pub use dns_resolver::DnsResolver;
pub use response_cache::ResponseCacheControl;
