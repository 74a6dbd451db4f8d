//! Entity descriptor for Invoice

use super::handlers::{create_invoice, delete_invoice, get_invoice, list_invoices, update_invoice};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::host::AppState;
use axum::{Router, routing::get};

/// Descriptor for the Invoice entity
pub struct InvoiceDescriptor {
    pub state: AppState,
}

impl InvoiceDescriptor {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl EntityDescriptor for InvoiceDescriptor {
    fn entity_type(&self) -> &str {
        "invoice"
    }

    fn plural(&self) -> &str {
        "invoices"
    }

    fn build_routes(&self) -> Router {
        let collection = format!("/{}", self.plural());
        let item = format!("{collection}/{{id}}");

        Router::new()
            .route(&collection, get(list_invoices).post(create_invoice))
            .route(&item, get(get_invoice).put(update_invoice).delete(delete_invoice))
            .with_state(self.state.clone())
    }
}
