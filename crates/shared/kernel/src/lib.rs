//! Kernel utilities shared across slices.
//! Keep this crate lightweight; today it only owns layered configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use foundry_kernel::config::load_config;
//! use foundry_kernel::domain::config::FoundryConfig;
//!
//! let cfg: FoundryConfig = load_config(Some("foundry")).unwrap_or_default();
//! assert!(!cfg.logging.level.is_empty());
//! ```
pub mod config;

pub use foundry_domain as domain;
