//! Server module: shared state, route registration and the builder
//!
//! - `host`: the `AppState` every handler receives
//! - `entity_registry`: descriptors that mount each resource's CRUD routes
//! - `router`: health routes, JSON 404 fallback and the trace layer
//! - `builder`: `ServerBuilder` with graceful `serve`

pub mod builder;
pub mod entity_registry;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use host::AppState;
