//! The transaction form configuration: the props boundary of the add/edit
//! transaction popups.

use crate::model::{Currency, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// The payload a form submits.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TransactionData {
    pub transaction_name: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub is_income: bool,
    pub currency_iso_code: Currency,
}

impl From<&Transaction> for TransactionData {
    fn from(t: &Transaction) -> Self {
        Self {
            transaction_name: t.transaction_name().to_string(),
            date: t.date(),
            amount: t.amount(),
            is_income: t.is_income(),
            currency_iso_code: t.currency_iso_code().clone(),
        }
    }
}

type SubmitHandler = Box<dyn Fn(TransactionData) + Send + Sync>;
type CloseHandler = Box<dyn Fn() + Send + Sync>;

/// An add/edit transaction form. The form itself owns no validation logic
/// beyond requiring a non-empty name; it packages a draft and hands it to the
/// submit handler, or tells the close handler the user backed out.
pub struct TransactionForm {
    transaction: Option<Transaction>,
    header: String,
    submit_button_text: String,
    submit_button_icon: String,
    on_submit: SubmitHandler,
    on_close: CloseHandler,
}

impl TransactionForm {
    pub fn new(
        header: impl Into<String>,
        submit_button_text: impl Into<String>,
        submit_button_icon: impl Into<String>,
        on_submit: SubmitHandler,
        on_close: CloseHandler,
    ) -> Self {
        Self {
            transaction: None,
            header: header.into(),
            submit_button_text: submit_button_text.into(),
            submit_button_icon: submit_button_icon.into(),
            on_submit,
            on_close,
        }
    }

    /// Pre-fills the form with an existing transaction (the edit flow).
    pub fn with_transaction(mut self, transaction: Transaction) -> Self {
        self.transaction = Some(transaction);
        self
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// The draft the form opens with: the pre-filled transaction if editing,
    /// otherwise `None` (the add flow starts blank).
    pub fn initial(&self) -> Option<TransactionData> {
        self.transaction.as_ref().map(TransactionData::from)
    }

    /// Submits a draft to the submit handler. Returns `false` without calling
    /// the handler when the draft has an empty name.
    pub fn submit(&self, data: TransactionData) -> bool {
        if data.transaction_name.trim().is_empty() {
            return false;
        }
        (self.on_submit)(data);
        true
    }

    /// Signals that the form was dismissed.
    pub fn close(&self) {
        (self.on_close)();
    }

    /// Renders the form chrome: header and submit button with its icon name.
    pub fn render(&self) -> String {
        format!(
            "{}\n[{}] {}",
            self.header, self.submit_button_icon, self.submit_button_text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    fn draft() -> TransactionData {
        TransactionData {
            transaction_name: "Zakupy".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 2).unwrap(),
            amount: Decimal::from_str("87.43").unwrap(),
            is_income: false,
            currency_iso_code: Currency::pln(),
        }
    }

    #[test]
    fn test_submit_calls_handler_with_data() {
        let received = Arc::new(Mutex::new(None));
        let captured = Arc::clone(&received);
        let form = TransactionForm::new(
            "Dodaj transakcję",
            "Dodaj",
            "add",
            Box::new(move |data| *captured.lock().unwrap() = Some(data)),
            Box::new(|| {}),
        );

        assert!(form.submit(draft()));
        assert_eq!(received.lock().unwrap().as_ref(), Some(&draft()));
    }

    #[test]
    fn test_submit_rejects_empty_name() {
        let called = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&called);
        let form = TransactionForm::new(
            "Dodaj transakcję",
            "Dodaj",
            "add",
            Box::new(move |_| flag.store(true, Ordering::SeqCst)),
            Box::new(|| {}),
        );

        let mut data = draft();
        data.transaction_name = "  ".to_string();
        assert!(!form.submit(data));
        assert!(!called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_close_calls_handler() {
        let closed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&closed);
        let form = TransactionForm::new(
            "Edytuj transakcję",
            "Zapisz",
            "save",
            Box::new(|_| {}),
            Box::new(move || flag.store(true, Ordering::SeqCst)),
        );

        form.close();
        assert!(closed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_edit_flow_prefills_initial_draft() {
        let t = Transaction::new(
            "Czynsz",
            NaiveDate::from_ymd_opt(2025, 9, 5).unwrap(),
            Decimal::from_str("2400").unwrap(),
            false,
            Currency::pln(),
        );
        let form = TransactionForm::new(
            "Edytuj transakcję",
            "Zapisz",
            "save",
            Box::new(|_| {}),
            Box::new(|| {}),
        )
        .with_transaction(t.clone());

        let initial = form.initial().unwrap();
        assert_eq!(initial, TransactionData::from(&t));
        assert!(form.render().contains("Edytuj transakcję"));
        assert!(form.render().contains("[save] Zapisz"));
    }
}
