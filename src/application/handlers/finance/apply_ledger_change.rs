//! ApplyLedgerChangeHandler - Command handler for invoice, bill and balance edits.

use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::domain::finance::{BalanceField, BillInput, FinancialLedger, InvoiceInput};
use crate::domain::foundation::{BillId, DomainError, InvoiceId, SiteId};
use crate::domain::site::Site;
use crate::ports::SiteRepository;

/// One edit of a site's ledger.
#[derive(Debug, Clone)]
pub enum LedgerChange {
    AddInvoice(InvoiceInput),
    UpdateInvoice(InvoiceId, InvoiceInput),
    DeleteInvoice(InvoiceId),
    AddBill(BillInput),
    UpdateBill(BillId, BillInput),
    DeleteBill(BillId),
    SetBalance(BalanceField, Decimal),
    ResetAccounts,
}

impl LedgerChange {
    fn name(&self) -> &'static str {
        match self {
            LedgerChange::AddInvoice(_) => "add_invoice",
            LedgerChange::UpdateInvoice(..) => "update_invoice",
            LedgerChange::DeleteInvoice(_) => "delete_invoice",
            LedgerChange::AddBill(_) => "add_bill",
            LedgerChange::UpdateBill(..) => "update_bill",
            LedgerChange::DeleteBill(_) => "delete_bill",
            LedgerChange::SetBalance(..) => "set_balance",
            LedgerChange::ResetAccounts => "reset_accounts",
        }
    }

    fn apply(self, ledger: &mut FinancialLedger) -> Result<Option<CreatedDocument>, DomainError> {
        let created = match self {
            LedgerChange::AddInvoice(input) => Some(CreatedDocument::Invoice(ledger.add_invoice(input)?)),
            LedgerChange::UpdateInvoice(id, input) => {
                ledger.update_invoice(id, input)?;
                None
            }
            LedgerChange::DeleteInvoice(id) => {
                ledger.delete_invoice(id)?;
                None
            }
            LedgerChange::AddBill(input) => Some(CreatedDocument::Bill(ledger.add_bill(input)?)),
            LedgerChange::UpdateBill(id, input) => {
                ledger.update_bill(id, input)?;
                None
            }
            LedgerChange::DeleteBill(id) => {
                ledger.delete_bill(id)?;
                None
            }
            LedgerChange::SetBalance(field, value) => {
                ledger.set_balance(field, value);
                None
            }
            LedgerChange::ResetAccounts => {
                ledger.reset_accounts();
                None
            }
        };
        Ok(created)
    }
}

/// Id of a document added by the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum CreatedDocument {
    Invoice(InvoiceId),
    Bill(BillId),
}

#[derive(Debug, Clone)]
pub struct ApplyLedgerChangeCommand {
    pub site_id: SiteId,
    pub change: LedgerChange,
}

#[derive(Debug, Clone)]
pub struct ApplyLedgerChangeResult {
    pub created: Option<CreatedDocument>,
    pub ledger: FinancialLedger,
}

/// Applies a ledger edit to the stored site in one repository step.
pub struct ApplyLedgerChangeHandler {
    repository: Arc<dyn SiteRepository>,
}

impl ApplyLedgerChangeHandler {
    pub fn new(repository: Arc<dyn SiteRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ApplyLedgerChangeCommand) -> Result<ApplyLedgerChangeResult, DomainError> {
        let ApplyLedgerChangeCommand { site_id, change } = cmd;
        let change_name = change.name();

        let mut created = None;
        let slot = &mut created;
        let site = self
            .repository
            .update(
                site_id,
                Box::new(move |site: &mut Site| {
                    *slot = change.apply(site.ledger_mut())?;
                    Ok(())
                }),
            )
            .await?;

        info!(site_id = %site_id, change = change_name, "Ledger updated");

        Ok(ApplyLedgerChangeResult {
            created,
            ledger: site.ledger().clone(),
        })
    }
}
