//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `emissions` - Factor registry, activity rows and the calculation engine
//! - `site` - Site aggregate and the multi-site workspace
//! - `finance` - Per-site balances, cash movements, invoices and bills

pub mod emissions;
pub mod finance;
pub mod foundation;
pub mod site;
