pub mod recon;

pub use recon::{GetDnsDataUseCase, ReconDomainUseCase, ReconError, SharedResolver};
