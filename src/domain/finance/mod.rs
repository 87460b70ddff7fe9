//! Finance domain module.
//!
//! Pass-through bookkeeping stored alongside each site: balances, dated cash
//! movements, invoices and bills. Amounts are `Decimal`.
//!
//! # Module Structure
//!
//! - `ledger` - FinancialLedger aggregate and its operations
//! - `snapshot` - Widget balances and currency formatting
//! - `transactions` - Cash movements and monthly cash flow
//! - `documents` - Invoices, bills and status summaries

mod documents;
mod errors;
mod ledger;
mod snapshot;
mod transactions;

pub use documents::{Bill, BillInput, DocumentStatus, Invoice, InvoiceInput, StatusSummary, StatusTotal};
pub use errors::LedgerError;
pub use ledger::FinancialLedger;
pub use snapshot::{format_currency, BalanceField, FinancialSnapshot};
pub use transactions::{CashDirection, CashTransaction, CashTransactions, MonthlyCashFlow};
