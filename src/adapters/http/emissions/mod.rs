//! Emissions HTTP adapter module.
//!
//! Country selection, factor tables, ad-hoc calculation and validation.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::emissions_router;
