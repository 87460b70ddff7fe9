//! Site HTTP adapter module.
//!
//! Site workspace management, per-site reports and cash entries.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::sites_router;
