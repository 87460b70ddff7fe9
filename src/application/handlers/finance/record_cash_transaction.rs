//! RecordCashTransactionHandler - Command handler for cash in/out entries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

use crate::domain::finance::{CashDirection, CashTransaction, FinancialSnapshot};
use crate::domain::foundation::{DomainError, ErrorCode, SiteId};
use crate::domain::site::Site;
use crate::ports::SiteRepository;

/// Command to record a cash movement on a site.
#[derive(Debug, Clone)]
pub struct RecordCashTransactionCommand {
    pub site_id: SiteId,
    pub direction: CashDirection,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct RecordCashTransactionResult {
    pub transaction: CashTransaction,
    pub financials: FinancialSnapshot,
}

pub struct RecordCashTransactionHandler {
    repository: Arc<dyn SiteRepository>,
}

impl RecordCashTransactionHandler {
    pub fn new(repository: Arc<dyn SiteRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RecordCashTransactionCommand,
    ) -> Result<RecordCashTransactionResult, DomainError> {
        let RecordCashTransactionCommand {
            site_id,
            direction,
            amount,
            date,
            description,
        } = cmd;

        // 1. Record on the stored ledger and persist, as one repository step
        let mut recorded = None;
        let slot = &mut recorded;
        let site = self
            .repository
            .update(
                site_id,
                Box::new(move |site: &mut Site| {
                    let transaction = site.ledger_mut().record_cash(direction, amount, date, description)?;
                    *slot = Some(transaction);
                    Ok(())
                }),
            )
            .await?;

        // 2. The mutation ran to completion if update returned Ok
        let transaction = recorded.ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Cash transaction was not recorded")
        })?;

        info!(
            site_id = %site_id,
            direction = ?direction,
            amount = %amount,
            "Cash transaction recorded"
        );

        Ok(RecordCashTransactionResult {
            transaction,
            financials: site.ledger().financials.clone(),
        })
    }
}
