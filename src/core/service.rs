//! Service traits for company and invoice storage

use crate::entities::company::{Company, CompanySummary, CompanyUpdate};
use crate::entities::invoice::{Invoice, InvoiceChanges, InvoiceSummary, NewInvoice};
use anyhow::Result;
use async_trait::async_trait;

/// Storage operations behind the company handlers
///
/// Every method is a single statement against the store. Uniqueness of
/// `code` and `name` is the store's job: a duplicate insert is an error.
#[async_trait]
pub trait CompanyService: Send + Sync {
    /// All companies ordered by code
    async fn list(&self) -> Result<Vec<CompanySummary>>;

    /// Get a company by exact code
    async fn get(&self, code: &str) -> Result<Option<Company>>;

    /// Insert a company whose code is already derived
    async fn create(&self, company: Company) -> Result<Company>;

    /// Overwrite name and description
    ///
    /// Returns `None` when no row matched.
    async fn update(&self, code: &str, update: CompanyUpdate) -> Result<Option<Company>>;

    /// Delete by code, returning whether a row was removed
    ///
    /// Invoices of the company are removed with it.
    async fn delete(&self, code: &str) -> Result<bool>;
}

/// Storage operations behind the invoice handlers
#[async_trait]
pub trait InvoiceService: Send + Sync {
    /// All invoices ordered by id
    async fn list(&self) -> Result<Vec<InvoiceSummary>>;

    /// Get an invoice by id
    async fn get(&self, id: i32) -> Result<Option<Invoice>>;

    /// Insert an invoice
    ///
    /// The store assigns `id`, defaults `add_date` to today and `paid` to
    /// false, and rejects a `comp_code` with no matching company. An invoice
    /// created as paid gets `paid_date` = `add_date`.
    async fn create(&self, invoice: NewInvoice) -> Result<Invoice>;

    /// Write already-resolved column values
    ///
    /// Returns `None` when no row matched.
    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<Invoice>>;

    /// Delete by id, returning whether a row was removed
    async fn delete(&self, id: i32) -> Result<bool>;
}
