use dnsrecon_application::use_cases::ReconDomainUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub recon: Arc<ReconDomainUseCase>,
}
