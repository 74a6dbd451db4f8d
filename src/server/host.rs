//! Shared handler state
//!
//! `AppState` is the only thing handlers share. It holds type-erased service
//! handles, so the same routes run against the in-memory store in tests and
//! PostgreSQL in production.

use crate::core::service::{CompanyService, InvoiceService};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<dyn CompanyService>,
    pub invoices: Arc<dyn InvoiceService>,
}

impl AppState {
    pub fn new(companies: Arc<dyn CompanyService>, invoices: Arc<dyn InvoiceService>) -> Self {
        Self {
            companies,
            invoices,
        }
    }

    /// Use one store for both resources
    pub fn from_store<S>(store: S) -> Self
    where
        S: CompanyService + InvoiceService + 'static,
    {
        let store = Arc::new(store);
        Self {
            companies: store.clone(),
            invoices: store,
        }
    }
}
