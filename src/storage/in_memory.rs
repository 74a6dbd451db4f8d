//! In-memory store for testing and development
//!
//! Behaves like the SQL schema in `migrations/`: unique company codes and
//! names, a foreign key from invoices to companies with `ON DELETE CASCADE`,
//! `amt > 0`, serial invoice ids, and defaults for `paid` and `add_date`.

use crate::core::service::{CompanyService, InvoiceService};
use crate::entities::company::{Company, CompanySummary, CompanyUpdate};
use crate::entities::invoice::{Invoice, InvoiceChanges, InvoiceSummary, NewInvoice, today};
use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Tables {
    companies: BTreeMap<String, Company>,
    invoices: BTreeMap<i32, Invoice>,
    last_invoice_id: i32,
}

/// In-memory implementation of both services
///
/// Clones share the same tables. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))
    }
}

fn check_amount(amt: f64) -> Result<()> {
    if amt.is_nan() || amt <= 0.0 {
        bail!("new row for relation \"invoices\" violates check constraint \"invoices_amt_check\"");
    }
    Ok(())
}

#[async_trait]
impl CompanyService for InMemoryStore {
    async fn list(&self) -> Result<Vec<CompanySummary>> {
        let tables = self.read()?;
        Ok(tables.companies.values().map(CompanySummary::from).collect())
    }

    async fn get(&self, code: &str) -> Result<Option<Company>> {
        let tables = self.read()?;
        Ok(tables.companies.get(code).cloned())
    }

    async fn create(&self, company: Company) -> Result<Company> {
        let mut tables = self.write()?;

        if tables.companies.contains_key(&company.code) {
            bail!("duplicate key value violates unique constraint \"companies_pkey\"");
        }
        if tables.companies.values().any(|c| c.name == company.name) {
            bail!("duplicate key value violates unique constraint \"companies_name_key\"");
        }

        tables
            .companies
            .insert(company.code.clone(), company.clone());
        Ok(company)
    }

    async fn update(&self, code: &str, update: CompanyUpdate) -> Result<Option<Company>> {
        let mut tables = self.write()?;

        if tables
            .companies
            .values()
            .any(|c| c.code != code && c.name == update.name)
        {
            bail!("duplicate key value violates unique constraint \"companies_name_key\"");
        }

        Ok(tables.companies.get_mut(code).map(|company| {
            company.name = update.name;
            company.description = update.description;
            company.clone()
        }))
    }

    async fn delete(&self, code: &str) -> Result<bool> {
        let mut tables = self.write()?;

        if tables.companies.remove(code).is_none() {
            return Ok(false);
        }
        tables.invoices.retain(|_, invoice| invoice.comp_code != code);
        Ok(true)
    }
}

#[async_trait]
impl InvoiceService for InMemoryStore {
    async fn list(&self) -> Result<Vec<InvoiceSummary>> {
        let tables = self.read()?;
        Ok(tables.invoices.values().map(InvoiceSummary::from).collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Invoice>> {
        let tables = self.read()?;
        Ok(tables.invoices.get(&id).cloned())
    }

    async fn create(&self, invoice: NewInvoice) -> Result<Invoice> {
        let mut tables = self.write()?;

        if !tables.companies.contains_key(&invoice.comp_code) {
            bail!(
                "insert or update on table \"invoices\" violates foreign key constraint \"invoices_comp_code_fkey\""
            );
        }
        check_amount(invoice.amt)?;

        tables.last_invoice_id += 1;
        let paid = invoice.paid.unwrap_or(false);
        let add_date = today();
        let created = Invoice {
            id: tables.last_invoice_id,
            comp_code: invoice.comp_code,
            amt: invoice.amt,
            paid,
            add_date,
            paid_date: paid.then_some(add_date),
        };

        tables.invoices.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, id: i32, changes: InvoiceChanges) -> Result<Option<Invoice>> {
        let mut tables = self.write()?;

        let Some(invoice) = tables.invoices.get_mut(&id) else {
            return Ok(None);
        };
        check_amount(changes.amt)?;

        invoice.amt = changes.amt;
        invoice.paid = changes.paid;
        invoice.paid_date = changes.paid_date;
        Ok(Some(invoice.clone()))
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let mut tables = self.write()?;
        Ok(tables.invoices.remove(&id).is_some())
    }
}
