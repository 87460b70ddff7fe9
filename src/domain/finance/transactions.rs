//! Dated cash movements.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::TransactionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CashDirection {
    CashIn,
    CashOut,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashTransaction {
    pub id: TransactionId,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

/// Cash-in and cash-out records, each list ordered by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashTransactions {
    pub cash_in: Vec<CashTransaction>,
    pub cash_out: Vec<CashTransaction>,
}

impl CashTransactions {
    pub fn list(&self, direction: CashDirection) -> &[CashTransaction] {
        match direction {
            CashDirection::CashIn => &self.cash_in,
            CashDirection::CashOut => &self.cash_out,
        }
    }

    /// Inserts after any existing entries on the same date.
    pub(super) fn insert(&mut self, direction: CashDirection, transaction: CashTransaction) {
        let list = match direction {
            CashDirection::CashIn => &mut self.cash_in,
            CashDirection::CashOut => &mut self.cash_out,
        };
        let position = list.partition_point(|existing| existing.date <= transaction.date);
        list.insert(position, transaction);
    }

    /// Sum of `direction` transactions dated in the given calendar month.
    pub fn month_total(&self, direction: CashDirection, year: i32, month0: u32) -> Decimal {
        self.list(direction)
            .iter()
            .filter(|t| t.date.year() == year && t.date.month0() == month0)
            .map(|t| t.amount)
            .sum()
    }

    pub fn clear(&mut self) {
        self.cash_in.clear();
        self.cash_out.clear();
    }
}

/// Cash movement during one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashFlow {
    pub year: i32,
    /// Zero-based month.
    pub month: u32,
    pub cash_in: Decimal,
    pub cash_out: Decimal,
}

impl MonthlyCashFlow {
    pub fn net(&self) -> Decimal {
        self.cash_in - self.cash_out
    }
}
