//! Emissions command and query handlers.

mod calculate_site_report;
mod refresh_factor_tables;
mod set_country;

pub use calculate_site_report::{CalculateSiteReportHandler, CalculateSiteReportQuery, SiteReport};
pub use refresh_factor_tables::{RefreshFactorTablesHandler, RefreshFactorTablesResult, RejectedTable};
pub use set_country::{SetCountryCommand, SetCountryHandler};
