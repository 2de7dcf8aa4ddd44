//! One lookup per record type. Each returns its slot value; CNAME chains are
//! written straight into the shared `DomainData`.

use super::cname_path::CnamePath;
use super::context::LookupContext;
use super::ip_lookup::{extend_path, resolve_hosts};
use dnsrecon_domain::{IpSet, LookupError, RecordData, RecordType, SoaData};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::net::{Ipv4Addr, Ipv6Addr};

/// SOA of the target, following CNAMEs in the answer and falling back to the
/// authority section. Retried once after a delay.
pub(crate) async fn soa(ctx: LookupContext) -> Result<SoaData, LookupError> {
    let answer = ctx.query_with_retry(&ctx.domain, RecordType::SOA).await?;

    let mut soa = SoaData::default();
    let mut path = CnamePath::default();
    let mut nameservers = Vec::new();

    for record in &answer.answers {
        match &record.data {
            RecordData::CNAME(target) => path.push_alias(&record.name, target),
            RecordData::SOA { mname, rname } => {
                path.push_terminal(&record.name, mname);
                soa.name = record.name.clone();
                soa.mbox = rname.clone();
                push_unique(&mut nameservers, mname);
            }
            _ => {}
        }
    }

    if soa.name.is_empty() {
        for record in &answer.authority {
            if let RecordData::SOA { mname, rname } = &record.data {
                soa.name = record.name.clone();
                soa.mbox = rname.clone();
                push_unique(&mut nameservers, mname);
            }
        }
    }

    let hosts = resolve_hosts(&ctx, &nameservers).await;
    extend_path(&mut path, &hosts);
    ctx.shared.push_cname_path(RecordType::SOA, path.into_hops());

    soa.nameserver = hosts.into_iter().collect();
    Ok(soa)
}

pub(crate) async fn a(ctx: LookupContext) -> Result<Vec<Ipv4Addr>, LookupError> {
    addresses(ctx, RecordType::A, |data| match data {
        RecordData::A(ip) => Some(*ip),
        _ => None,
    })
    .await
}

pub(crate) async fn aaaa(ctx: LookupContext) -> Result<Vec<Ipv6Addr>, LookupError> {
    addresses(ctx, RecordType::AAAA, |data| match data {
        RecordData::AAAA(ip) => Some(*ip),
        _ => None,
    })
    .await
}

pub(crate) async fn ns(ctx: LookupContext) -> Result<BTreeMap<String, IpSet>, LookupError> {
    let answer = ctx.query(&ctx.domain, RecordType::NS).await?;

    let mut path = CnamePath::default();
    let mut hosts = Vec::new();

    for record in &answer.answers {
        match &record.data {
            RecordData::CNAME(target) => path.push_alias(&record.name, target),
            RecordData::NS(host) => {
                path.push_terminal(&record.name, host);
                push_unique(&mut hosts, host);
            }
            _ => {}
        }
    }

    let resolved = resolve_hosts(&ctx, &hosts).await;
    extend_path(&mut path, &resolved);
    ctx.shared.push_cname_path(RecordType::NS, path.into_hops());

    Ok(resolved.into_iter().collect())
}

/// Mail exchangers grouped by preference. A host listed under several
/// preferences is resolved once.
pub(crate) async fn mx(
    ctx: LookupContext,
) -> Result<BTreeMap<u16, BTreeMap<String, IpSet>>, LookupError> {
    let answer = ctx.query(&ctx.domain, RecordType::MX).await?;

    let mut path = CnamePath::default();
    let mut exchanges = Vec::new();
    let mut hosts = Vec::new();

    for record in &answer.answers {
        match &record.data {
            RecordData::CNAME(target) => path.push_alias(&record.name, target),
            RecordData::MX {
                preference,
                exchange,
            } => {
                path.push_terminal(&record.name, exchange);
                exchanges.push((*preference, exchange.clone()));
                push_unique(&mut hosts, exchange);
            }
            _ => {}
        }
    }

    let resolved = resolve_hosts(&ctx, &hosts).await;
    extend_path(&mut path, &resolved);
    ctx.shared.push_cname_path(RecordType::MX, path.into_hops());

    let resolved: BTreeMap<String, IpSet> = resolved.into_iter().collect();
    let mut grouped: BTreeMap<u16, BTreeMap<String, IpSet>> = BTreeMap::new();
    for (preference, exchange) in exchanges {
        let set = resolved.get(&exchange).cloned().unwrap_or_default();
        grouped.entry(preference).or_default().insert(exchange, set);
    }
    Ok(grouped)
}

pub(crate) async fn txt(ctx: LookupContext) -> Result<Vec<String>, LookupError> {
    let answer = ctx.query(&ctx.domain, RecordType::TXT).await?;

    Ok(answer
        .answers
        .into_iter()
        .filter_map(|record| match record.data {
            RecordData::TXT(strings) => Some(strings),
            _ => None,
        })
        .flatten()
        .collect())
}

pub(crate) async fn cname(ctx: LookupContext) -> Result<Vec<String>, LookupError> {
    let answer = ctx.query(&ctx.domain, RecordType::CNAME).await?;

    Ok(answer
        .answers
        .into_iter()
        .filter_map(|record| match record.data {
            RecordData::CNAME(target) => Some(target),
            _ => None,
        })
        .collect())
}

/// Addresses of the target itself, recording the chain when the answer
/// starts with CNAMEs.
async fn addresses<T, F>(
    ctx: LookupContext,
    record_type: RecordType,
    extract: F,
) -> Result<Vec<T>, LookupError>
where
    T: Display,
    F: Fn(&RecordData) -> Option<T>,
{
    let answer = ctx.query(&ctx.domain, record_type).await?;

    let mut path = CnamePath::default();
    let mut found = Vec::new();

    for record in &answer.answers {
        if let RecordData::CNAME(target) = &record.data {
            path.push_alias(&record.name, target);
        } else if let Some(ip) = extract(&record.data) {
            path.push_terminal(&record.name, &ip);
            found.push(ip);
        }
    }

    ctx.shared.push_cname_path(record_type, path.into_hops());
    Ok(found)
}

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}
