//! Registry of resource descriptors and their CRUD routes

use crate::entities::company::CompanyDescriptor;
use crate::entities::invoice::InvoiceDescriptor;
use crate::server::host::AppState;
use axum::Router;
use std::collections::BTreeMap;

/// Describes how one resource mounts its routes
///
/// Implemented by `CompanyDescriptor` and `InvoiceDescriptor`. Each builds a
/// router that already carries its state, so descriptors can be merged
/// freely.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g. "company")
    fn entity_type(&self) -> &str;

    /// The collection path segment (e.g. "companies")
    ///
    /// Routes are mounted at `/{plural}` and `/{plural}/{key}`.
    fn plural(&self) -> &str;

    /// Build the five CRUD routes for this resource
    fn build_routes(&self) -> Router;
}

/// Registry for all resources of the application
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: BTreeMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            descriptors: BTreeMap::new(),
        }
    }

    /// Registry holding the company and invoice resources over `state`
    pub fn with_resources(state: AppState) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CompanyDescriptor::new(state.clone())));
        registry.register(Box::new(InvoiceDescriptor::new(state)));
        registry
    }

    /// Register a descriptor, replacing any with the same entity type
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Merge the routes of every registered resource
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Registered entity types, in name order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(|s| s.as_str()).collect()
    }
}
