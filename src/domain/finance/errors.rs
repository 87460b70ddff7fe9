use thiserror::Error;

use crate::domain::foundation::{BillId, DomainError, ErrorCode, InvoiceId};

/// Rejected ledger operations. The ledger is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Amount for '{0}' must be greater than zero")]
    NonPositiveAmount(&'static str),

    #[error("Bill name cannot be empty")]
    EmptyBillName,

    #[error("Month index {0} is out of range (0-11)")]
    InvalidMonth(u32),

    #[error("Invoice not found: {0}")]
    InvoiceNotFound(InvoiceId),

    #[error("Bill not found: {0}")]
    BillNotFound(BillId),
}

impl From<LedgerError> for DomainError {
    fn from(err: LedgerError) -> Self {
        let code = match &err {
            LedgerError::NonPositiveAmount(_) | LedgerError::EmptyBillName | LedgerError::InvalidMonth(_) => {
                ErrorCode::ValidationFailed
            }
            LedgerError::InvoiceNotFound(_) => ErrorCode::InvoiceNotFound,
            LedgerError::BillNotFound(_) => ErrorCode::BillNotFound,
        };
        DomainError::new(code, err.to_string())
    }
}
