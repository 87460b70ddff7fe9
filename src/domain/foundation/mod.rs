//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the carbon ledger domain.

mod country_code;
mod errors;
mod ids;
mod reporting_year;

pub use country_code::CountryCode;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BillId, InvoiceId, SiteId, TransactionId};
pub use reporting_year::ReportingYear;
