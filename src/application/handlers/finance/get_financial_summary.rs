//! GetFinancialSummaryHandler - Query handler for a site's financial widgets.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::finance::{FinancialSnapshot, MonthlyCashFlow, StatusSummary};
use crate::domain::foundation::{DomainError, ErrorCode, SiteId};
use crate::ports::SiteRepository;

/// Months of cash flow returned when the caller does not ask for a number.
pub const DEFAULT_CASH_FLOW_MONTHS: u32 = 6;

#[derive(Debug, Clone)]
pub struct GetFinancialSummaryQuery {
    pub site_id: SiteId,
    /// Last month of the cash flow window.
    pub as_of: NaiveDate,
    pub months: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub site_id: SiteId,
    pub financials: FinancialSnapshot,
    pub invoices: StatusSummary,
    pub bills: StatusSummary,
    pub cash_flow: Vec<MonthlyCashFlow>,
}

pub struct GetFinancialSummaryHandler {
    repository: Arc<dyn SiteRepository>,
}

impl GetFinancialSummaryHandler {
    pub fn new(repository: Arc<dyn SiteRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetFinancialSummaryQuery) -> Result<FinancialSummary, DomainError> {
        let site = self
            .repository
            .find_by_id(query.site_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::SiteNotFound, format!("Site not found: {}", query.site_id)))?;

        let ledger = site.ledger();
        Ok(FinancialSummary {
            site_id: site.id(),
            financials: ledger.financials.clone(),
            invoices: ledger.invoice_summary(),
            bills: ledger.bill_summary(),
            cash_flow: ledger.monthly_cash_flow(query.as_of, query.months),
        })
    }
}
