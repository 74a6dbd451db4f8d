//! Invoice records, request payloads and the paid-state rule

use crate::entities::company::Company;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An invoice row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// List entry: id and owning company code only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

impl From<&Invoice> for InvoiceSummary {
    fn from(invoice: &Invoice) -> Self {
        Self {
            id: invoice.id,
            comp_code: invoice.comp_code.clone(),
        }
    }
}

/// Single-invoice view with the owning company nested in place of `comp_code`
///
/// `company` is `None` when the company row vanished between the two reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub company: Option<Company>,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

impl Invoice {
    pub fn with_company(self, company: Option<Company>) -> InvoiceDetail {
        InvoiceDetail {
            id: self.id,
            company,
            amt: self.amt,
            paid: self.paid,
            add_date: self.add_date,
            paid_date: self.paid_date,
        }
    }
}

/// Body of `POST /invoices`
///
/// `paid` left out means the store default (false).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewInvoice {
    #[validate(length(min = 1))]
    pub comp_code: String,
    pub amt: f64,
    #[serde(default)]
    pub paid: Option<bool>,
}

/// Body of `PUT /invoices/{id}`
///
/// `paid` left out keeps the current paid state.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InvoiceUpdate {
    pub amt: f64,
    #[serde(default)]
    pub paid: Option<bool>,
}

/// Column values written by an invoice update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceChanges {
    pub amt: f64,
    pub paid: bool,
    pub paid_date: Option<NaiveDate>,
}

impl InvoiceUpdate {
    /// Resolve the update against the stored row
    pub fn apply_to(&self, current: &Invoice, today: NaiveDate) -> InvoiceChanges {
        let paid = self.paid.unwrap_or(current.paid);
        InvoiceChanges {
            amt: self.amt,
            paid,
            paid_date: next_paid_date(current.paid, current.paid_date, paid, today),
        }
    }
}

/// Paid-date transition
///
/// | current | requested | paid_date        |
/// |---------|-----------|------------------|
/// | false   | true      | `today`          |
/// | true    | false     | `None`           |
/// | same    | same      | unchanged        |
pub fn next_paid_date(
    current_paid: bool,
    current_paid_date: Option<NaiveDate>,
    requested_paid: bool,
    today: NaiveDate,
) -> Option<NaiveDate> {
    match (current_paid, requested_paid) {
        (false, true) => Some(today),
        (true, false) => None,
        _ => current_paid_date,
    }
}

/// The date used for `add_date` defaults and paid transitions
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
