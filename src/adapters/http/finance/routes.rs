//! Route configuration for finance endpoints.

use axum::routing::{get, post, put};
use axum::Router;

use super::handlers::{
    add_bill, add_invoice, delete_bill, delete_invoice, get_summary, record_cash, reset_accounts, set_balance,
    update_bill, update_invoice,
};
use crate::adapters::http::AppState;

/// Creates the finance router.
///
/// Routes:
/// - `GET /api/sites/:site_id/finance` - Balances, document summaries and cash flow
/// - `POST /api/sites/:site_id/cash` - Record a cash movement
/// - `POST /api/sites/:site_id/invoices` - Add an invoice
/// - `PUT|DELETE /api/sites/:site_id/invoices/:invoice_id` - Edit or remove an invoice
/// - `POST /api/sites/:site_id/bills` - Add a bill
/// - `PUT|DELETE /api/sites/:site_id/bills/:bill_id` - Edit or remove a bill
/// - `PUT /api/sites/:site_id/balances/:field` - Overwrite the bank or savings balance
/// - `POST /api/sites/:site_id/reset-accounts` - Clear the ledger
pub fn finance_router() -> Router<AppState> {
    Router::new()
        .route("/api/sites/:site_id/finance", get(get_summary))
        .route("/api/sites/:site_id/cash", post(record_cash))
        .route("/api/sites/:site_id/invoices", post(add_invoice))
        .route(
            "/api/sites/:site_id/invoices/:invoice_id",
            put(update_invoice).delete(delete_invoice),
        )
        .route("/api/sites/:site_id/bills", post(add_bill))
        .route("/api/sites/:site_id/bills/:bill_id", put(update_bill).delete(delete_bill))
        .route("/api/sites/:site_id/balances/:field", put(set_balance))
        .route("/api/sites/:site_id/reset-accounts", post(reset_accounts))
}
