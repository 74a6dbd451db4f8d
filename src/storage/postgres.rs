//! PostgreSQL storage backend using sqlx.
//!
//! Provides `PostgresStore`, implementing both `CompanyService` and
//! `InvoiceService` over a `sqlx::PgPool`.
//!
//! # Feature flag
//!
//! This module is gated behind the `postgres` feature flag:
//! ```toml
//! [dependencies]
//! biztime = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! # Schema
//!
//! Tables are created by the migrations in `./migrations`, applied with
//! [`PostgresStore::migrate`]. Constraint violations (duplicate code, unknown
//! `comp_code`, non-positive `amt`) come back as plain errors and are
//! answered with a 500.

use crate::core::service::{CompanyService, InvoiceService};
use crate::entities::company::{Company, CompanySummary, CompanyUpdate};
use crate::entities::invoice::{Invoice, InvoiceChanges, InvoiceSummary, NewInvoice, today};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const INVOICE_COLUMNS: &str = "id, comp_code, amt, paid, add_date, paid_date";

/// Company and invoice storage backed by PostgreSQL
///
/// # Example
///
/// ```rust,ignore
/// let store = PostgresStore::connect("postgres://localhost/biztime", 5).await?;
/// store.migrate().await?;
/// let app = ServerBuilder::new().with_store(store).build()?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool against `url`
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| anyhow!("Failed to connect to PostgreSQL: {}", e))?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the bundled migrations (idempotent)
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to run migrations: {}", e))
    }
}

#[async_trait]
impl CompanyService for PostgresStore {
    async fn list(&self) -> Result<Vec<CompanySummary>> {
        sqlx::query_as::<_, CompanySummary>("SELECT code, name FROM companies ORDER BY code")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to list companies: {}", e))
    }

    async fn get(&self, code: &str) -> Result<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to get company: {}", e))
    }

    async fn create(&self, company: Company) -> Result<Company> {
        sqlx::query_as::<_, Company>(
            "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3) \
             RETURNING code, name, description",
        )
        .bind(&company.code)
        .bind(&company.name)
        .bind(&company.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to create company: {}", e))
    }

    async fn update(&self, code: &str, update: CompanyUpdate) -> Result<Option<Company>> {
        sqlx::query_as::<_, Company>(
            "UPDATE companies SET name = $1, description = $2 WHERE code = $3 \
             RETURNING code, name, description",
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update company: {}", e))
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete company: {}", e))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl InvoiceService for PostgresStore {
    async fn list(&self) -> Result<Vec<InvoiceSummary>> {
        sqlx::query_as::<_, InvoiceSummary>("SELECT id, comp_code FROM invoices ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to list invoices: {}", e))
    }

    async fn get(&self, id: i32) -> Result<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>(&format!(
            "SELECT {INVOICE_COLUMNS} FROM invoices WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to get invoice: {}", e))
    }

    async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        // an invoice created as paid is paid on the day it is added
        sqlx::query_as::<_, Invoice>(&format!(
            "INSERT INTO invoices (comp_code, amt, paid, add_date, paid_date) \
             VALUES ($1, $2, COALESCE($3, false), $4, CASE WHEN COALESCE($3, false) THEN $4 END) \
             RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(&invoice.comp_code)
        .bind(invoice.amt)
        .bind(invoice.paid)
        .bind(today())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to create invoice: {}", e))
    }

    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<Invoice>> {
        sqlx::query_as::<_, Invoice>(&format!(
            "UPDATE invoices SET amt = $1, paid = $2, paid_date = $3 WHERE id = $4 \
             RETURNING {INVOICE_COLUMNS}"
        ))
        .bind(changes.amt)
        .bind(changes.paid)
        .bind(changes.paid_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update invoice: {}", e))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete invoice: {}", e))?;
        Ok(result.rows_affected() > 0)
    }
}
