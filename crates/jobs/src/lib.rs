pub mod cache_clear;
pub mod runner;

pub use cache_clear::CacheClearJob;
pub use runner::{JobRunner, RunningJobs};
