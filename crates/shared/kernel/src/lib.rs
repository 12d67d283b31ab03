//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the application state registry,
//! and the system routes every deployment exposes.
//!
//! ## Config loading
//! ```rust,no_run
//! use nucard_kernel::config::load_config;
//! use nucard_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server.toml")).unwrap();
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use nucard_domain as domain;
