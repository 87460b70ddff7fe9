//! Finance command and query handlers.

mod apply_ledger_change;
mod get_financial_summary;
mod record_cash_transaction;

pub use apply_ledger_change::{
    ApplyLedgerChangeCommand, ApplyLedgerChangeHandler, ApplyLedgerChangeResult, CreatedDocument, LedgerChange,
};
pub use get_financial_summary::{
    FinancialSummary, GetFinancialSummaryHandler, GetFinancialSummaryQuery, DEFAULT_CASH_FLOW_MONTHS,
};
pub use record_cash_transaction::{
    RecordCashTransactionCommand, RecordCashTransactionHandler, RecordCashTransactionResult,
};
