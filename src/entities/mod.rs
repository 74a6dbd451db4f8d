//! Resources exposed over HTTP
//!
//! Each resource is a directory with its model, handlers and a descriptor
//! that registers its routes.

pub mod company;
pub mod invoice;
