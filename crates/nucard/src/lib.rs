//! Facade crate for `NuCard` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `nucard` with the `server` feature.
//! - Call `nucard::init` to build the feature slices and `nucard::server::router` to mount them.

pub use nucard_domain as domain;
pub use nucard_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use nucard_catalog::api::router as catalog_router;
        pub use nucard_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use nucard_catalog as catalog;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "catalog",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features for server mode.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init(
    config: &domain::config::ApiConfig,
    database: &nucard_database::Database,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::catalog::init(config, database)?];

    tracing::debug!(count = slices.len(), "Feature slices initialized");
    Ok(slices)
}
