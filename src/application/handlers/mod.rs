//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod emissions;
pub mod finance;
pub mod site;

pub use emissions::{
    CalculateSiteReportHandler, CalculateSiteReportQuery, RefreshFactorTablesHandler,
    RefreshFactorTablesResult, RejectedTable, SetCountryCommand, SetCountryHandler, SiteReport,
};
pub use finance::{
    ApplyLedgerChangeCommand, ApplyLedgerChangeHandler, ApplyLedgerChangeResult, CreatedDocument,
    FinancialSummary, GetFinancialSummaryHandler, GetFinancialSummaryQuery, LedgerChange,
    RecordCashTransactionCommand, RecordCashTransactionHandler, RecordCashTransactionResult,
    DEFAULT_CASH_FLOW_MONTHS,
};
pub use site::{
    CreateSiteCommand, CreateSiteHandler, DeleteSiteCommand, DeleteSiteHandler, LoadWorkspaceHandler,
    SwitchSiteCommand, SwitchSiteHandler, UpdateSiteDataCommand, UpdateSiteDataHandler,
    UpdateSiteDetailsCommand, UpdateSiteDetailsHandler,
};
