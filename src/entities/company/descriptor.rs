//! Entity descriptor for Company

use super::handlers::{create_company, delete_company, get_company, list_companies, update_company};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::host::AppState;
use axum::{Router, routing::get};

/// Descriptor for the Company entity
pub struct CompanyDescriptor {
    pub state: AppState,
}

impl CompanyDescriptor {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl EntityDescriptor for CompanyDescriptor {
    fn entity_type(&self) -> &str {
        "company"
    }

    fn plural(&self) -> &str {
        "companies"
    }

    fn build_routes(&self) -> Router {
        let collection = format!("/{}", self.plural());
        let item = format!("{collection}/{{code}}");

        Router::new()
            .route(&collection, get(list_companies).post(create_company))
            .route(&item, get(get_company).put(update_company).delete(delete_company))
            .with_state(self.state.clone())
    }
}
