//! Application layer - Calculation facade, commands, queries and handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! `CalculationService` is the single entry point for emissions computations;
//! handlers wrap it together with persistence for the HTTP adapter.

pub mod calculation;
pub mod handlers;

pub use calculation::CalculationService;
pub use handlers::{
    ApplyLedgerChangeCommand, ApplyLedgerChangeHandler, ApplyLedgerChangeResult, CalculateSiteReportHandler,
    CalculateSiteReportQuery, CreateSiteCommand, CreateSiteHandler, CreatedDocument, DeleteSiteCommand,
    DeleteSiteHandler, FinancialSummary, GetFinancialSummaryHandler, GetFinancialSummaryQuery, LedgerChange,
    LoadWorkspaceHandler, RecordCashTransactionCommand, RecordCashTransactionHandler,
    RecordCashTransactionResult, RefreshFactorTablesHandler, RefreshFactorTablesResult, RejectedTable,
    SetCountryCommand, SetCountryHandler, SiteReport, SwitchSiteCommand, SwitchSiteHandler,
    UpdateSiteDataCommand, UpdateSiteDataHandler, UpdateSiteDetailsCommand, UpdateSiteDetailsHandler,
};
