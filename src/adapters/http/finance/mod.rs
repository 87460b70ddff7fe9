//! Finance HTTP adapter module.
//!
//! Per-site cash entries, invoices, bills, balances and the summary widgets.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::finance_router;
