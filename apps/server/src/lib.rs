//! # NuCard Server
//!
//! Serves the card catalog over HTTP: `Axum` routes, a `SurrealDB` card store and an
//! Algolia search index.
//!
//! ## Example
//! ```no_run
//! use nucard_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(27633)
//!         .build()
//!         .await?
//!         .run()
//!         .await
//! }
//! ```

mod router;

use anyhow::{Context, Result, anyhow};
use axum::Router;
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use nucard::domain::config::{ApiConfig, SslConfig};
use nucard::kernel::server::ApiState;
use nucard_database::Database;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

/// In-flight requests get this long to finish after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// A fluent builder for configuring and initializing the [`Server`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: ApiConfig,
}

impl ServerBuilder {
    /// Set up the server's configuration.
    pub fn config(mut self, cfg: ApiConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Overrides the configured listening port.
    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    async fn connect_database(&self) -> Result<Database> {
        let db_cfg = &self.cfg.database;
        let mut builder =
            Database::builder().url(&db_cfg.url).session(&db_cfg.namespace, &db_cfg.database);

        if let Some(creds) = &db_cfg.credentials {
            builder = builder.auth(&creds.username, &creds.password);
        }

        builder.init().await.context("Failed to establish database connection")
    }

    /// Consumes the builder and initializes the server.
    ///
    /// # Process
    /// 1. Checks that the configured SSL files exist
    /// 2. Connects to the card database
    /// 3. Initializes the feature slices (the card cache stays cold until first use)
    /// 4. Registers them in the application state
    ///
    /// # Errors
    /// Returns an error if:
    /// * an SSL certificate or key file is missing
    /// * the database connection fails (unreachable host, invalid credentials)
    /// * the search index settings are missing or invalid
    pub async fn build(self) -> Result<Server> {
        if let Some(ssl) = &self.cfg.server.ssl {
            check_ssl_files(ssl)?;
        }

        let address = SocketAddr::new(self.cfg.server.address, self.cfg.server.port);
        info!(%address, "Initializing server");

        let db = self.connect_database().await?;

        let slices =
            nucard::init(&self.cfg, &db).map_err(|e| anyhow!("Platform bootstrap failed: {e}"))?;

        let state = ApiState::builder()
            .config(self.cfg)
            .db(db)
            .register_slices(slices)
            .build()
            .context("Failed to finalize API state registry")?;

        info!(slices = ?state.slice_names().collect::<Vec<_>>(), "Application state ready");
        Ok(Server { state })
    }
}

fn check_ssl_files(ssl: &SslConfig) -> Result<()> {
    if !ssl.cert.exists() {
        anyhow::bail!("SSL certificate not found at: {}", ssl.cert.display());
    }
    if !ssl.key.exists() {
        anyhow::bail!("SSL key not found at: {}", ssl.key.display());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if ssl.key.metadata()?.permissions().mode() & 0o077 != 0 {
            warn!(key = %ssl.key.display(), "SSL private key is readable by other users (expected 600)");
        }
    }
    Ok(())
}

/// A fully initialized server, returned by [`ServerBuilder::build`].
#[must_use = "call .run().await to start the server"]
#[derive(Debug)]
pub struct Server {
    state: ApiState,
}

impl Server {
    /// Returns a new [`ServerBuilder`] to configure the server.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Serves requests until Ctrl+C or SIGTERM, then drains for up to 30 seconds.
    ///
    /// # Errors
    /// Returns an error if the server cannot bind to the configured address or the
    /// TLS certificates cannot be loaded.
    pub async fn run(self) -> Result<()> {
        let cfg = self.state.config.clone();
        let address = SocketAddr::new(cfg.server.address, cfg.server.port);
        let app = router::init(self.state);

        let handle = Handle::<SocketAddr>::new();
        let shutdown = handle.clone();
        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, draining connections...");
            shutdown.graceful_shutdown(Some(SHUTDOWN_GRACE));
        });

        match &cfg.server.ssl {
            Some(ssl) => serve_tls(address, ssl, handle, app).await?,
            None => {
                info!("Listening on http://{address}");
                axum_server::bind(address)
                    .handle(handle)
                    .serve(app.into_make_service())
                    .await
                    .context("HTTP server failed")?;
            }
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub const fn state(&self) -> &ApiState {
        &self.state
    }
}

async fn serve_tls(
    address: SocketAddr,
    ssl: &SslConfig,
    handle: Handle<SocketAddr>,
    app: Router,
) -> Result<()> {
    let tls = RustlsConfig::from_pem_file(&ssl.cert, &ssl.key)
        .await
        .context("Failed to load SSL/TLS certificates")?;

    info!("Listening on https://{address}");
    axum_server::bind_rustls(address, tls)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .context("HTTPS server failed")
}

/// Resolves on SIGINT (Ctrl+C) or, on unix, SIGTERM.
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => res,
        res = terminate => res,
    }
}
