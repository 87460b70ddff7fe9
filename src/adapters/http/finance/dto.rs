//! HTTP DTOs for finance endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::handlers::CreatedDocument;
use crate::domain::finance::{CashDirection, CashTransaction, FinancialLedger, FinancialSnapshot};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
pub struct RecordCashRequest {
    pub direction: CashDirection,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SetBalanceRequest {
    pub value: Decimal,
}

/// Query string of the summary endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummaryParams {
    /// Last month of the cash flow window; defaults to today.
    pub as_of: Option<NaiveDate>,
    pub months: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordCashResponse {
    pub transaction: CashTransaction,
    pub financials: FinancialSnapshot,
    /// Bank balance rounded for display.
    pub bank_balance_display: String,
}

/// Ledger after an edit, with the id of any document it created.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<CreatedDocument>,
    pub ledger: FinancialLedger,
}
