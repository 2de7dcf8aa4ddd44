mod cname_path;
mod context;
mod get_dns_data;
mod ip_lookup;
mod lookups;
mod recon_domain;
mod shared;

pub use get_dns_data::GetDnsDataUseCase;
pub use recon_domain::{ReconDomainUseCase, ReconError, SharedResolver};
