//! Core module containing the error type, service traits and request helpers

pub mod error;
pub mod extractors;
pub mod service;
pub mod slug;

pub use error::{BizError, BizResult};
pub use extractors::{ApiPath, ValidJson};
pub use service::{CompanyService, InvoiceService};
pub use slug::slugify;
