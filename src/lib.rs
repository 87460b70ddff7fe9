//! Carbon Ledger - Multi-site carbon accounting
//!
//! Turns monthly activity records (water, energy, waste, transport,
//! refrigerants) into tonnes of CO2e using per-country emission factor
//! tables, and breaks the result down by category, month, year and
//! GHG Protocol scope. Each site also carries a small financial ledger.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
