use dnsrecon_application::services::{ClientPool, PoolError};
use dnsrecon_application::use_cases::{
    GetDnsDataUseCase, ReconDomainUseCase, ReconError, SharedResolver,
};
use dnsrecon_domain::{DomainStatus, LookupError, RecordType};
use std::sync::Arc;
use std::time::Duration;

mod helpers;
use helpers::*;

const SHORT: Duration = Duration::from_millis(20);

fn recon(pool: Arc<ClientPool<SharedResolver>>) -> ReconDomainUseCase {
    ReconDomainUseCase::new(pool, GetDnsDataUseCase::new().with_retry_delay(Duration::ZERO))
        .with_timeouts(SHORT, SHORT)
}

async fn answering_resolver(domain: &str) -> Arc<MockDnsResolver> {
    let resolver = Arc::new(MockDnsResolver::new());
    resolver
        .set_answer(domain, RecordType::A, vec![a_record(domain, [192, 0, 2, 1])])
        .await;
    resolver
}

#[tokio::test]
async fn test_successful_resolution_uses_one_client() {
    let first = answering_resolver("example.com").await;
    let second = answering_resolver("example.com").await;
    let pool = Arc::new(ClientPool::new(vec![
        first.clone() as SharedResolver,
        second.clone() as SharedResolver,
    ]));

    let data = recon(pool.clone()).execute("example.com").await.unwrap();

    assert_eq!(data.status, DomainStatus::NoError);
    assert!(first.total_calls().await > 0);
    assert_eq!(second.total_calls().await, 0);
    assert_eq!(pool.idle_count(), 2);
}

#[tokio::test]
async fn test_generic_error_retries_with_second_client() {
    let failing = Arc::new(MockDnsResolver::new());
    let answering = answering_resolver("example.com").await;
    let pool = Arc::new(ClientPool::new(vec![
        failing.clone() as SharedResolver,
        answering.clone() as SharedResolver,
    ]));

    let data = recon(pool.clone()).execute("example.com").await.unwrap();

    assert_eq!(data.status, DomainStatus::NoError);
    assert_eq!(failing.calls("example.com", RecordType::A).await, 1);
    assert_eq!(answering.calls("example.com", RecordType::A).await, 1);
    assert_eq!(pool.idle_count(), 2);
}

#[tokio::test]
async fn test_recorded_generic_error_retries_with_second_client() {
    let unreachable = Arc::new(MockDnsResolver::new());
    for rt in RecordType::PHASE_ONE {
        unreachable
            .set_error("example.com", rt, LookupError::Failed)
            .await;
    }
    let answering = answering_resolver("example.com").await;
    let pool = Arc::new(ClientPool::new(vec![
        unreachable.clone() as SharedResolver,
        answering.clone() as SharedResolver,
    ]));

    let data = recon(pool.clone()).execute("example.com").await.unwrap();

    assert_eq!(data.status, DomainStatus::NoError);
    assert_eq!(data.records.a.len(), 1);
    assert!(unreachable.calls("example.com", RecordType::A).await >= 1);
    assert_eq!(answering.calls("example.com", RecordType::A).await, 1);
    assert_eq!(pool.idle_count(), 2);
}

#[tokio::test]
async fn test_specific_error_is_not_retried() {
    let first = Arc::new(MockDnsResolver::new());
    first
        .set_error(
            "doesnotexist.invalid",
            RecordType::A,
            LookupError::NxDomain,
        )
        .await;
    let second = Arc::new(MockDnsResolver::new());
    let pool = Arc::new(ClientPool::new(vec![
        first.clone() as SharedResolver,
        second.clone() as SharedResolver,
    ]));

    let data = recon(pool).execute("doesnotexist.invalid").await.unwrap();

    assert_eq!(data.status.to_string(), "NXDOMAIN");
    assert_eq!(second.total_calls().await, 0);
}

#[tokio::test]
async fn test_busy_pool_is_exhausted() {
    let resolver = answering_resolver("example.com").await;
    let pool = Arc::new(ClientPool::new(vec![resolver.clone() as SharedResolver]));
    let _held = pool.checkout(SHORT).await.unwrap();

    let result = recon(pool.clone()).execute("example.com").await;

    assert_eq!(
        result.unwrap_err(),
        ReconError::PoolExhausted(PoolError::Timeout(SHORT))
    );
    assert_eq!(resolver.total_calls().await, 0);
}

#[tokio::test]
async fn test_retry_without_spare_client_times_out_and_releases() {
    let failing = Arc::new(MockDnsResolver::new());
    let pool = Arc::new(ClientPool::new(vec![failing.clone() as SharedResolver]));

    let result = recon(pool.clone()).execute("example.com").await;

    assert_eq!(
        result.unwrap_err(),
        ReconError::RetryTimeout(PoolError::Timeout(SHORT))
    );
    assert_eq!(pool.idle_count(), 1);
}
