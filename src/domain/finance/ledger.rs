//! Financial ledger carried on each site record.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    BalanceField, Bill, BillInput, CashDirection, CashTransaction, CashTransactions, FinancialSnapshot,
    Invoice, InvoiceInput, LedgerError, MonthlyCashFlow, StatusSummary,
};
use crate::domain::foundation::{BillId, InvoiceId, TransactionId};

/// Balances, cash movements and open documents of one site.
///
/// Field names follow the stored site layout so the ledger can be flattened
/// into the site record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialLedger {
    pub financials: FinancialSnapshot,
    pub cash_transactions: CashTransactions,
    pub invoices: Vec<Invoice>,
    pub bills: Vec<Bill>,
}

impl FinancialLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cash movement and adjusts the bank balance.
    pub fn record_cash(
        &mut self,
        direction: CashDirection,
        amount: Decimal,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<CashTransaction, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount(match direction {
                CashDirection::CashIn => "cash in",
                CashDirection::CashOut => "cash out",
            }));
        }

        let transaction = CashTransaction {
            id: TransactionId::new(),
            amount,
            date,
            description: description.into().trim().to_string(),
        };
        self.cash_transactions.insert(direction, transaction.clone());

        match direction {
            CashDirection::CashIn => {
                self.financials.cash_in += amount;
                self.financials.bank_balance += amount;
            }
            CashDirection::CashOut => {
                self.financials.cash_out += amount;
                self.financials.bank_balance -= amount;
            }
        }
        Ok(transaction)
    }

    pub fn record_cash_in(
        &mut self,
        amount: Decimal,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<CashTransaction, LedgerError> {
        self.record_cash(CashDirection::CashIn, amount, date, description)
    }

    pub fn record_cash_out(
        &mut self,
        amount: Decimal,
        date: NaiveDate,
        description: impl Into<String>,
    ) -> Result<CashTransaction, LedgerError> {
        self.record_cash(CashDirection::CashOut, amount, date, description)
    }

    pub fn add_invoice(&mut self, input: InvoiceInput) -> Result<InvoiceId, LedgerError> {
        let invoice = Invoice::from_input(InvoiceId::new(), input)?;
        let id = invoice.id;
        self.invoices.push(invoice);
        self.refresh_invoices_owed();
        Ok(id)
    }

    pub fn update_invoice(&mut self, id: InvoiceId, input: InvoiceInput) -> Result<(), LedgerError> {
        let updated = Invoice::from_input(id, input)?;
        let slot = self
            .invoices
            .iter_mut()
            .find(|invoice| invoice.id == id)
            .ok_or(LedgerError::InvoiceNotFound(id))?;
        *slot = updated;
        self.refresh_invoices_owed();
        Ok(())
    }

    pub fn delete_invoice(&mut self, id: InvoiceId) -> Result<Invoice, LedgerError> {
        let index = self
            .invoices
            .iter()
            .position(|invoice| invoice.id == id)
            .ok_or(LedgerError::InvoiceNotFound(id))?;
        let removed = self.invoices.remove(index);
        self.refresh_invoices_owed();
        Ok(removed)
    }

    pub fn add_bill(&mut self, input: BillInput) -> Result<BillId, LedgerError> {
        let bill = Bill::from_input(BillId::new(), input)?;
        let id = bill.id;
        self.bills.push(bill);
        self.refresh_bills_to_pay();
        Ok(id)
    }

    pub fn update_bill(&mut self, id: BillId, input: BillInput) -> Result<(), LedgerError> {
        let updated = Bill::from_input(id, input)?;
        let slot = self
            .bills
            .iter_mut()
            .find(|bill| bill.id == id)
            .ok_or(LedgerError::BillNotFound(id))?;
        *slot = updated;
        self.refresh_bills_to_pay();
        Ok(())
    }

    pub fn delete_bill(&mut self, id: BillId) -> Result<Bill, LedgerError> {
        let index = self
            .bills
            .iter()
            .position(|bill| bill.id == id)
            .ok_or(LedgerError::BillNotFound(id))?;
        let removed = self.bills.remove(index);
        self.refresh_bills_to_pay();
        Ok(removed)
    }

    /// Sum of invoices not yet paid.
    pub fn invoices_owed(&self) -> Decimal {
        self.invoices
            .iter()
            .filter(|invoice| invoice.status.is_outstanding())
            .map(|invoice| invoice.amount)
            .sum()
    }

    /// Sum of bills not yet paid.
    pub fn bills_to_pay(&self) -> Decimal {
        self.bills
            .iter()
            .filter(|bill| bill.status.is_outstanding())
            .map(|bill| bill.amount)
            .sum()
    }

    pub fn invoice_summary(&self) -> StatusSummary {
        StatusSummary::from_documents(self.invoices.iter().map(|i| (i.status, i.amount)))
    }

    pub fn bill_summary(&self) -> StatusSummary {
        StatusSummary::from_documents(self.bills.iter().map(|b| (b.status, b.amount)))
    }

    /// Cash in and out for the `months` calendar months ending with the
    /// month of `as_of`, oldest first.
    pub fn monthly_cash_flow(&self, as_of: NaiveDate, months: u32) -> Vec<MonthlyCashFlow> {
        let end = as_of.year() * 12 + as_of.month0() as i32;
        (0..months as i32)
            .rev()
            .map(|offset| {
                let index = end - offset;
                let year = index.div_euclid(12);
                let month = index.rem_euclid(12) as u32;
                MonthlyCashFlow {
                    year,
                    month,
                    cash_in: self.cash_transactions.month_total(CashDirection::CashIn, year, month),
                    cash_out: self.cash_transactions.month_total(CashDirection::CashOut, year, month),
                }
            })
            .collect()
    }

    /// Overwrites a directly editable balance.
    pub fn set_balance(&mut self, field: BalanceField, value: Decimal) {
        match field {
            BalanceField::BankBalance => self.financials.bank_balance = value,
            BalanceField::SavingsBalance => self.financials.savings_balance = value,
        }
    }

    /// Zeroes every balance and drops all transactions and documents.
    pub fn reset_accounts(&mut self) {
        *self = Self::default();
    }

    fn refresh_invoices_owed(&mut self) {
        self.financials.invoices_owed = self.invoices_owed();
    }

    fn refresh_bills_to_pay(&mut self) {
        self.financials.bills_to_pay = self.bills_to_pay();
    }
}
