//! HTTP handlers for finance endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use chrono::Utc;

use crate::application::handlers::{
    ApplyLedgerChangeCommand, FinancialSummary, GetFinancialSummaryQuery, LedgerChange,
    RecordCashTransactionCommand, DEFAULT_CASH_FLOW_MONTHS,
};
use crate::domain::finance::{format_currency, BalanceField, BillInput, InvoiceInput};
use crate::domain::foundation::{BillId, InvoiceId, SiteId};

use super::dto::{FinancialSummaryParams, LedgerResponse, RecordCashRequest, RecordCashResponse, SetBalanceRequest};
use crate::adapters::http::error::{parse_path, ApiError};
use crate::adapters::http::AppState;

/// Longest cash flow window a caller may request.
const MAX_CASH_FLOW_MONTHS: u32 = 60;

fn parse_site_id(raw: &str) -> Result<SiteId, ApiError> {
    parse_path(raw, "site ID")
}

async fn apply(state: &AppState, site_id: SiteId, change: LedgerChange) -> Result<LedgerResponse, ApiError> {
    let result = state
        .ledger_change_handler()
        .handle(ApplyLedgerChangeCommand { site_id, change })
        .await?;
    Ok(LedgerResponse {
        created: result.created,
        ledger: result.ledger,
    })
}

/// GET /api/sites/:site_id/finance
pub async fn get_summary(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
    params: Result<Query<FinancialSummaryParams>, QueryRejection>,
) -> Result<Json<FinancialSummary>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let Query(params) = params?;
    let months = params.months.unwrap_or(DEFAULT_CASH_FLOW_MONTHS);
    if months == 0 || months > MAX_CASH_FLOW_MONTHS {
        return Err(ApiError::BadRequest(format!(
            "months must be between 1 and {}, got {}",
            MAX_CASH_FLOW_MONTHS, months
        )));
    }

    let summary = state
        .financial_summary_handler()
        .handle(GetFinancialSummaryQuery {
            site_id,
            as_of: params.as_of.unwrap_or_else(|| Utc::now().date_naive()),
            months,
        })
        .await?;
    Ok(Json(summary))
}

/// POST /api/sites/:site_id/cash
pub async fn record_cash(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
    payload: Result<Json<RecordCashRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RecordCashResponse>), ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let Json(request) = payload?;
    let result = state
        .record_cash_handler()
        .handle(RecordCashTransactionCommand {
            site_id,
            direction: request.direction,
            amount: request.amount,
            date: request.date,
            description: request.description,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordCashResponse {
            bank_balance_display: format_currency(result.financials.bank_balance),
            transaction: result.transaction,
            financials: result.financials,
        }),
    ))
}

/// POST /api/sites/:site_id/invoices
pub async fn add_invoice(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
    payload: Result<Json<InvoiceInput>, JsonRejection>,
) -> Result<(StatusCode, Json<LedgerResponse>), ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let Json(input) = payload?;
    let response = apply(&state, site_id, LedgerChange::AddInvoice(input)).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/sites/:site_id/invoices/:invoice_id
pub async fn update_invoice(
    State(state): State<AppState>,
    Path((site_id, invoice_id)): Path<(String, String)>,
    payload: Result<Json<InvoiceInput>, JsonRejection>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let invoice_id: InvoiceId = parse_path(&invoice_id, "invoice ID")?;
    let Json(input) = payload?;
    Ok(Json(apply(&state, site_id, LedgerChange::UpdateInvoice(invoice_id, input)).await?))
}

/// DELETE /api/sites/:site_id/invoices/:invoice_id
pub async fn delete_invoice(
    State(state): State<AppState>,
    Path((site_id, invoice_id)): Path<(String, String)>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let invoice_id: InvoiceId = parse_path(&invoice_id, "invoice ID")?;
    Ok(Json(apply(&state, site_id, LedgerChange::DeleteInvoice(invoice_id)).await?))
}

/// POST /api/sites/:site_id/bills
pub async fn add_bill(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
    payload: Result<Json<BillInput>, JsonRejection>,
) -> Result<(StatusCode, Json<LedgerResponse>), ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let Json(input) = payload?;
    let response = apply(&state, site_id, LedgerChange::AddBill(input)).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/sites/:site_id/bills/:bill_id
pub async fn update_bill(
    State(state): State<AppState>,
    Path((site_id, bill_id)): Path<(String, String)>,
    payload: Result<Json<BillInput>, JsonRejection>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let bill_id: BillId = parse_path(&bill_id, "bill ID")?;
    let Json(input) = payload?;
    Ok(Json(apply(&state, site_id, LedgerChange::UpdateBill(bill_id, input)).await?))
}

/// DELETE /api/sites/:site_id/bills/:bill_id
pub async fn delete_bill(
    State(state): State<AppState>,
    Path((site_id, bill_id)): Path<(String, String)>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let bill_id: BillId = parse_path(&bill_id, "bill ID")?;
    Ok(Json(apply(&state, site_id, LedgerChange::DeleteBill(bill_id)).await?))
}

/// PUT /api/sites/:site_id/balances/:field
pub async fn set_balance(
    State(state): State<AppState>,
    Path((site_id, field)): Path<(String, String)>,
    payload: Result<Json<SetBalanceRequest>, JsonRejection>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    let field: BalanceField = parse_path(&field, "balance")?;
    let Json(request) = payload?;
    Ok(Json(apply(&state, site_id, LedgerChange::SetBalance(field, request.value)).await?))
}

/// POST /api/sites/:site_id/reset-accounts
pub async fn reset_accounts(
    State(state): State<AppState>,
    Path(site_id): Path<String>,
) -> Result<Json<LedgerResponse>, ApiError> {
    let site_id = parse_site_id(&site_id)?;
    Ok(Json(apply(&state, site_id, LedgerChange::ResetAccounts).await?))
}
