//! Headline account balances of a site.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Balances shown on the financial widgets.
///
/// `invoices_owed` and `bills_to_pay` are derived from the ledger's open
/// documents and are rewritten whenever those change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialSnapshot {
    pub bank_balance: Decimal,
    pub savings_balance: Decimal,
    pub cash_in: Decimal,
    pub cash_out: Decimal,
    pub invoices_owed: Decimal,
    pub bills_to_pay: Decimal,
}

/// Balances that may be edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BalanceField {
    BankBalance,
    SavingsBalance,
}

impl FromStr for BalanceField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bankBalance" | "bank" => Ok(BalanceField::BankBalance),
            "savingsBalance" | "savings" => Ok(BalanceField::SavingsBalance),
            other => Err(ValidationError::invalid_format(
                "balance",
                format!("'{}' is not an editable balance", other),
            )),
        }
    }
}

/// Currency amount with two decimals, e.g. `1234.50`.
pub fn format_currency(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(10.005)), "10.01");
        assert_eq!(format_currency(dec!(-3.5)), "-3.50");
        assert_eq!(format_currency(Decimal::ZERO), "0.00");
    }

    #[test]
    fn snapshot_reads_partial_legacy_layout() {
        let snapshot: FinancialSnapshot =
            serde_json::from_str(r#"{"bankBalance": 120.5, "cashIn": 20}"#).unwrap();
        assert_eq!(snapshot.bank_balance, dec!(120.5));
        assert_eq!(snapshot.cash_in, dec!(20));
        assert_eq!(snapshot.bills_to_pay, Decimal::ZERO);
    }

    #[test]
    fn balance_field_parses_widget_ids() {
        assert_eq!("bankBalance".parse::<BalanceField>().unwrap(), BalanceField::BankBalance);
        assert_eq!("savings".parse::<BalanceField>().unwrap(), BalanceField::SavingsBalance);
        assert!("cashIn".parse::<BalanceField>().is_err());
    }
}
