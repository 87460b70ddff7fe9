//! Invoices issued and bills received by a site.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LedgerError;
use crate::domain::foundation::{BillId, InvoiceId};

/// Lifecycle of an invoice or bill. Anything but `Paid` is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Draft,
    #[default]
    Awaiting,
    Overdue,
    Paid,
}

impl DocumentStatus {
    pub fn is_outstanding(&self) -> bool {
        !matches!(self, DocumentStatus::Paid)
    }
}

/// Fields of an invoice as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceInput {
    pub amount: Decimal,
    /// Zero-based month the invoice was issued in.
    pub month: u32,
    pub year: i32,
    #[serde(default)]
    pub status: DocumentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub amount: Decimal,
    pub month: u32,
    pub year: i32,
    #[serde(default)]
    pub status: DocumentStatus,
}

impl Invoice {
    pub(super) fn from_input(id: InvoiceId, input: InvoiceInput) -> Result<Self, LedgerError> {
        if input.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount("invoice"));
        }
        if input.month >= 12 {
            return Err(LedgerError::InvalidMonth(input.month));
        }
        Ok(Self {
            id,
            amount: input.amount,
            month: input.month,
            year: input.year,
            status: input.status,
        })
    }

    /// First day of the issue month.
    pub fn issued_on(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
    }
}

/// Fields of a bill as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillInput {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub amount: Decimal,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: DocumentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: BillId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub amount: Decimal,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: DocumentStatus,
}

impl Bill {
    pub(super) fn from_input(id: BillId, input: BillInput) -> Result<Self, LedgerError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(LedgerError::EmptyBillName);
        }
        if input.amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount("bill"));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            category: input.category.trim().to_string(),
            amount: input.amount,
            due_date: input.due_date,
            status: input.status,
        })
    }
}

/// Count and value of documents sharing a status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTotal {
    pub count: usize,
    pub total: Decimal,
}

impl StatusTotal {
    fn add(&mut self, amount: Decimal) {
        self.count += 1;
        self.total += amount;
    }
}

/// Outstanding documents grouped by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub draft: StatusTotal,
    pub awaiting: StatusTotal,
    pub overdue: StatusTotal,
}

impl StatusSummary {
    pub(super) fn from_documents(documents: impl Iterator<Item = (DocumentStatus, Decimal)>) -> Self {
        let mut summary = Self::default();
        for (status, amount) in documents {
            match status {
                DocumentStatus::Draft => summary.draft.add(amount),
                DocumentStatus::Awaiting => summary.awaiting.add(amount),
                DocumentStatus::Overdue => summary.overdue.add(amount),
                DocumentStatus::Paid => {}
            }
        }
        summary
    }

    pub fn outstanding_total(&self) -> Decimal {
        self.draft.total + self.awaiting.total + self.overdue.total
    }
}
