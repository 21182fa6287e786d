use crate::model::Currency;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single financial movement, income or expense, as returned by the backend.
///
/// The serde representation matches the backend's wire shape:
///
/// ```json
/// {
///   "transactionName": "Wypłata",
///   "date": "2024-06-15",
///   "amount": 4850.0,
///   "isIncome": true,
///   "currencyIsoCode": "PLN"
/// }
/// ```
///
/// Records are immutable once fetched; views only read them.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    transaction_name: String,
    date: NaiveDate,
    amount: Decimal,
    is_income: bool,
    currency_iso_code: Currency,
}

impl Transaction {
    pub fn new(
        transaction_name: impl Into<String>,
        date: NaiveDate,
        amount: Decimal,
        is_income: bool,
        currency_iso_code: Currency,
    ) -> Self {
        Self {
            transaction_name: transaction_name.into(),
            date,
            amount,
            is_income,
            currency_iso_code,
        }
    }

    /// The record the backend returns when the user has no upcoming
    /// transaction in the requested stream.
    pub fn none_upcoming(today: NaiveDate) -> Self {
        Self::new("No transaction", today, Decimal::ZERO, false, Currency::pln())
    }

    pub fn transaction_name(&self) -> &str {
        &self.transaction_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_income(&self) -> bool {
        self.is_income
    }

    pub fn currency_iso_code(&self) -> &Currency {
        &self.currency_iso_code
    }
}
