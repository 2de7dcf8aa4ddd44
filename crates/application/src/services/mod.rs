pub mod client_pool;

pub use client_pool::{ClientPool, PoolError, PooledClient};
