use super::context::LookupContext;
use super::lookups;
use super::shared::SharedDomainData;
use crate::ports::DnsResolver;
use dnsrecon_domain::{normalize_name, DomainData, LookupError, RecordType};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinError;
use tracing::{debug, error, info, instrument};

const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Builds the `DomainData` of one domain in two phases.
///
/// Phase one asks for SOA, A and AAAA. Without a nameserver or an address the
/// domain counts as unresolved and phase two (NS, MX, TXT, CNAME) never runs.
pub struct GetDnsDataUseCase {
    retry_delay: Duration,
}

impl GetDnsDataUseCase {
    pub fn new() -> Self {
        Self {
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Delay before the single retry of SOA and nameserver address lookups.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    #[instrument(skip(self, resolver))]
    pub async fn execute(&self, resolver: Arc<dyn DnsResolver>, domain: &str) -> DomainData {
        // `name` echoes the request; lookups use the normalized form.
        let shared = SharedDomainData::new(DomainData::new(domain));
        let ctx = LookupContext {
            resolver,
            domain: Arc::from(normalize_name(domain)),
            shared: shared.clone(),
            retry_delay: self.retry_delay,
        };

        let (soa, a, aaaa) = tokio::join!(
            tokio::spawn(lookups::soa(ctx.clone())),
            tokio::spawn(lookups::a(ctx.clone())),
            tokio::spawn(lookups::aaaa(ctx.clone())),
        );
        let soa = settle(&shared, RecordType::SOA, soa);
        let a = settle(&shared, RecordType::A, a);
        let aaaa = settle(&shared, RecordType::AAAA, aaaa);

        let resolved = shared.update(|data| {
            data.records.soa = soa;
            data.records.a = a;
            data.records.aaaa = aaaa;

            if data.has_authority_signal() {
                return true;
            }
            data.status = data.unresolved_status();
            false
        });

        if !resolved {
            let data = shared.take();
            info!(domain = %data.name, status = %data.status, "Domain unresolved, skipping secondary records");
            return data;
        }

        let (ns, mx, txt, cname) = tokio::join!(
            tokio::spawn(lookups::ns(ctx.clone())),
            tokio::spawn(lookups::mx(ctx.clone())),
            tokio::spawn(lookups::txt(ctx.clone())),
            tokio::spawn(lookups::cname(ctx)),
        );
        let ns = settle(&shared, RecordType::NS, ns);
        let mx = settle(&shared, RecordType::MX, mx);
        let txt = settle(&shared, RecordType::TXT, txt);
        let cname = settle(&shared, RecordType::CNAME, cname);

        shared.update(|data| {
            data.records.ns = ns;
            data.records.mx = mx;
            data.records.txt = txt;
            data.records.cname = cname;
        });

        let data = shared.take();
        debug!(
            domain = %data.name,
            errors = data.errors.len(),
            "Domain resolved"
        );
        data
    }
}

impl Default for GetDnsDataUseCase {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwraps one slot: errors land in the error map and leave the slot empty.
fn settle<T: Default>(
    shared: &SharedDomainData,
    record_type: RecordType,
    joined: Result<Result<T, LookupError>, JoinError>,
) -> T {
    match joined {
        Ok(Ok(value)) => value,
        Ok(Err(lookup_error)) => {
            shared.record_error(record_type, lookup_error);
            T::default()
        }
        Err(join_error) => {
            error!(record_type = %record_type, error = %join_error, "Lookup task failed");
            shared.record_error(record_type, LookupError::NoData);
            T::default()
        }
    }
}
