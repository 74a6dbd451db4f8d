//! ServerBuilder for fluent API to build the HTTP server

use super::host::AppState;
use super::router::build_router;
use crate::core::service::{CompanyService, InvoiceService};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the biztime HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryStore::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    companies: Option<Arc<dyn CompanyService>>,
    invoices: Option<Arc<dyn InvoiceService>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            companies: None,
            invoices: None,
            custom_routes: Vec::new(),
        }
    }

    /// Use one store for both companies and invoices
    pub fn with_store<S>(mut self, store: S) -> Self
    where
        S: CompanyService + InvoiceService + 'static,
    {
        let store = Arc::new(store);
        self.companies = Some(store.clone());
        self.invoices = Some(store);
        self
    }

    /// Set the company service
    pub fn with_company_service(mut self, service: impl CompanyService + 'static) -> Self {
        self.companies = Some(Arc::new(service));
        self
    }

    /// Set the invoice service
    pub fn with_invoice_service(mut self, service: impl InvoiceService + 'static) -> Self {
        self.invoices = Some(Arc::new(service));
        self
    }

    /// Add routes next to the CRUD routes
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the handler state
    ///
    /// Fails when either service is missing.
    pub fn build_state(&mut self) -> Result<AppState> {
        let companies = self.companies.take().ok_or_else(|| {
            anyhow::anyhow!("CompanyService is required. Call .with_store() or .with_company_service()")
        })?;
        let invoices = self.invoices.take().ok_or_else(|| {
            anyhow::anyhow!("InvoiceService is required. Call .with_store() or .with_invoice_service()")
        })?;
        Ok(AppState::new(companies, invoices))
    }

    /// Build the final router
    pub fn build(mut self) -> Result<Router> {
        let state = self.build_state()?;
        Ok(build_router(state, std::mem::take(&mut self.custom_routes)))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds `addr`, serves until SIGTERM or Ctrl+C, then drains in-flight
    /// requests.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
