//! # biztime
//!
//! A REST backend for companies and their invoices, built on axum with a
//! pluggable store (in-memory or PostgreSQL via sqlx).
//!
//! ## Routes
//!
//! | Method | Path               | Success                                 |
//! |--------|--------------------|-----------------------------------------|
//! | GET    | /companies         | 200 `{companies: [{code, name}]}`       |
//! | POST   | /companies         | 201 `{company: {...}}`                  |
//! | GET    | /companies/{code}  | 200 `{company: {...}}`                  |
//! | PUT    | /companies/{code}  | 200 `{company: {...}}`                  |
//! | DELETE | /companies/{code}  | 200 `{status: "deleted"}`               |
//! | GET    | /invoices          | 200 `{invoices: [{id, comp_code}]}`     |
//! | POST   | /invoices          | 201 `{invoice: {...}}`                  |
//! | GET    | /invoices/{id}     | 200 `{invoice: {..., company: {...}}}`  |
//! | PUT    | /invoices/{id}     | 200 `{invoice: {...}}`                  |
//! | DELETE | /invoices/{id}     | 200 `{status: "deleted"}`               |
//!
//! Every failure is answered as `{error: {message, status}}`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use biztime::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryStore::new())
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{BizError, BizResult},
        service::{CompanyService, InvoiceService},
        slug::slugify,
    };

    // === Entities ===
    pub use crate::entities::company::{Company, CompanySummary, CompanyUpdate, NewCompany};
    pub use crate::entities::invoice::{
        Invoice, InvoiceChanges, InvoiceDetail, InvoiceSummary, InvoiceUpdate, NewInvoice,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
