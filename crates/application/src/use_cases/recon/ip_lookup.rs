use super::cname_path::CnamePath;
use super::context::LookupContext;
use dnsrecon_domain::{DnsAnswer, IpSet, RecordType};
use futures::future::join_all;
use tokio::task::JoinError;
use tracing::{debug, warn};

/// Resolves the A and AAAA addresses of every name concurrently.
///
/// Results keep the order of `names`. A failed sub-lookup contributes no
/// addresses; addresses are attributed to the requested name even when the
/// resolver followed a CNAME to get them.
pub(crate) async fn resolve_hosts(ctx: &LookupContext, names: &[String]) -> Vec<(String, IpSet)> {
    let lookups = names.iter().map(|name| {
        let v4 = tokio::spawn(host_addresses(ctx.clone(), name.clone(), RecordType::A));
        let v6 = tokio::spawn(host_addresses(ctx.clone(), name.clone(), RecordType::AAAA));

        async move {
            let (v4, v6) = tokio::join!(v4, v6);
            let set = IpSet {
                a: joined(name, v4).ipv4_addresses(),
                aaaa: joined(name, v6).ipv6_addresses(),
            };
            (name.clone(), set)
        }
    });

    join_all(lookups).await
}

/// Appends resolved addresses to a chain: every IPv4 first, then every IPv6.
pub(crate) fn extend_path(path: &mut CnamePath, hosts: &[(String, IpSet)]) {
    for (_, set) in hosts {
        for ip in &set.a {
            path.push_address(ip);
        }
    }
    for (_, set) in hosts {
        for ip in &set.aaaa {
            path.push_address(ip);
        }
    }
}

async fn host_addresses(ctx: LookupContext, name: String, record_type: RecordType) -> DnsAnswer {
    match ctx.query_with_retry(&name, record_type).await {
        Ok(answer) => answer,
        Err(error) => {
            debug!(
                name = %name,
                record_type = %record_type,
                error = %error,
                "Address lookup gave up"
            );
            DnsAnswer::default()
        }
    }
}

fn joined(name: &str, result: Result<DnsAnswer, JoinError>) -> DnsAnswer {
    result.unwrap_or_else(|error| {
        warn!(name = %name, error = %error, "Address lookup task failed");
        DnsAnswer::default()
    })
}
