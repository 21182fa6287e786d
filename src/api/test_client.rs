//! Implements the `Cards` trait using in-memory data for testing purposes.
//!
//! Note: this is compiled even in the "production" version of this app so that
//! we can run the whole app, top-to-bottom, without a backend.

use crate::api::{ApiError, Cards};
use crate::model::{Currency, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// An implementation of the `Cards` trait that does not use the network. It is
/// seeded with plausible data by default and can be scripted to fail or to
/// hold a fetch in flight, which the query-cache tests rely on.
pub struct TestCards {
    next_income: Transaction,
    next_expense: Transaction,
    failure: Option<String>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl Default for TestCards {
    /// Seeds the client with one upcoming income and one upcoming expense.
    fn default() -> Self {
        Self {
            next_income: Transaction::new(
                "Wypłata",
                date(2025, 9, 1),
                Decimal::new(485_000, 2),
                true,
                Currency::pln(),
            ),
            next_expense: Transaction::new(
                "Czynsz",
                date(2025, 9, 5),
                Decimal::new(240_000, 2),
                false,
                Currency::pln(),
            ),
            failure: None,
            delay: None,
            calls: AtomicUsize::new(0),
        }
    }
}

impl TestCards {
    /// Replaces the seeded next income.
    pub fn with_next_income(mut self, transaction: Transaction) -> Self {
        self.next_income = transaction;
        self
    }

    /// Replaces the seeded next expense.
    pub fn with_next_expense(mut self, transaction: Transaction) -> Self {
        self.next_expense = transaction;
        self
    }

    /// Scripts every call to fail with the given message.
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    /// Scripts every call to fail with an empty message, so that views must
    /// fall back to their own default error text.
    pub fn failing_silently(mut self) -> Self {
        self.failure = Some(String::new());
        self
    }

    /// Makes every call sleep before settling, keeping fetches in flight.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// The number of `get_next_transaction` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Cards for TestCards {
    async fn get_next_transaction(
        &self,
        is_income: bool,
    ) -> std::result::Result<Transaction, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(message) = &self.failure {
            return Err(ApiError::Backend {
                message: message.clone(),
            });
        }
        if is_income {
            Ok(self.next_income.clone())
        } else {
            Ok(self.next_expense.clone())
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}
