//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `SiteRepository` - Site records (activity rows and ledger)
//! - `PreferenceStore` - Active country and active site
//!
//! ## Reference Data Ports
//!
//! - `FactorTableSource` - External emission factor tables

mod factor_source;
mod preference_store;
mod site_repository;

pub use factor_source::{FactorSourceError, FactorTableSource};
pub use preference_store::{PreferenceStore, PreferenceStoreError, Preferences};
pub use site_repository::{SiteRepository, SiteRepositoryError, SiteUpdate};
