//! The dashboard card state machine: Loading -> Ready, or Loading -> Error
//! with a single toast.

use crate::model::{format_date, format_money, Transaction};
use crate::query::QueryState;
use crate::view::Toasts;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which dashboard card this is. The kind fixes the label, the error fallback
/// text and the `isIncome` selector sent to the backend.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    NextIncome,
    NextExpense,
}

serde_plain::derive_display_from_serialize!(CardKind);
serde_plain::derive_fromstr_from_deserialize!(CardKind);

impl CardKind {
    pub fn is_income(&self) -> bool {
        matches!(self, CardKind::NextIncome)
    }

    /// The card's header label.
    pub fn label(&self) -> &'static str {
        match self {
            CardKind::NextIncome => "Następny przychód",
            CardKind::NextExpense => "Następny wydatek",
        }
    }

    /// The toast text used when a fetch error carries no message of its own.
    pub fn fallback_error(&self) -> &'static str {
        match self {
            CardKind::NextIncome => "Błąd podczas pobierania następnego przychodu",
            CardKind::NextExpense => "Błąd podczas pobierania następnego wydatku",
        }
    }
}

/// The card's visible state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardPhase {
    Loading,
    /// The fetch failed. The card keeps its loading placeholder; the failure
    /// was communicated through a toast.
    Error,
    Ready(Transaction),
}

/// A mounted dashboard card. Feed it [`QueryState`] snapshots with
/// [`apply`](Self::apply) and render it with [`render`](Self::render).
///
/// Transition rules, per fetch cycle:
/// - `Loading -> Ready` when data arrives.
/// - `Loading -> Error` when the fetch fails; exactly one toast is emitted,
///   carrying the error's message or the card's fallback text.
/// - Once `Ready`, the card never shows `Loading` again; background refreshes
///   settle silently.
pub struct CardView {
    kind: CardKind,
    phase: CardPhase,
    toasted: bool,
    toasts: Arc<dyn Toasts>,
}

impl CardView {
    pub fn new(kind: CardKind, toasts: Arc<dyn Toasts>) -> Self {
        Self {
            kind,
            phase: CardPhase::Loading,
            toasted: false,
            toasts,
        }
    }

    pub fn kind(&self) -> CardKind {
        self.kind
    }

    pub fn phase(&self) -> &CardPhase {
        &self.phase
    }

    /// Applies a query-state snapshot, advancing the state machine.
    pub fn apply(&mut self, state: &QueryState<Transaction>) {
        if let Some(data) = &state.data {
            self.phase = CardPhase::Ready(data.clone());
            return;
        }
        if state.is_error {
            if !self.toasted {
                let message = match state.error.as_deref() {
                    Some(m) if !m.is_empty() => m,
                    _ => self.kind.fallback_error(),
                };
                self.toasts.error(message);
                self.toasted = true;
            }
            // An error after Ready does not take the data away.
            if !matches!(self.phase, CardPhase::Ready(_)) {
                self.phase = CardPhase::Error;
            }
        }
        // A loading snapshot with no data changes nothing visible.
    }

    /// Renders the card as three lines: label, amount with currency code,
    /// transaction name with date. Loading and Error both render the
    /// placeholder; errors are communicated via toast, not in the card body.
    pub fn render(&self) -> String {
        match &self.phase {
            CardPhase::Ready(t) => format!(
                "┌ {}\n│ {} {}\n└ {}  {}",
                self.kind.label(),
                format_money(t.amount()),
                t.currency_iso_code(),
                t.transaction_name(),
                format_date(t.date()),
            ),
            CardPhase::Loading | CardPhase::Error => {
                format!("┌ {}\n│ …\n└ wczytywanie danych", self.kind.label())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Currency;
    use crate::view::MemoryToasts;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn wyplata() -> Transaction {
        Transaction::new(
            "Wypłata",
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            Decimal::from_str("1234.5").unwrap(),
            true,
            Currency::pln(),
        )
    }

    fn view() -> (CardView, Arc<MemoryToasts>) {
        let toasts = Arc::new(MemoryToasts::default());
        (
            CardView::new(CardKind::NextIncome, Arc::clone(&toasts) as Arc<dyn Toasts>),
            toasts,
        )
    }

    #[test]
    fn test_initial_phase_is_loading() {
        let (view, toasts) = view();
        assert_eq!(view.phase(), &CardPhase::Loading);
        assert!(toasts.messages().is_empty());
    }

    #[test]
    fn test_ready_render_contains_amount_name_and_date() {
        let (mut view, _toasts) = view();
        view.apply(&QueryState::ready(wyplata()));
        let rendered = view.render();
        assert!(rendered.contains("1234,5 PLN"));
        assert!(rendered.contains("Wypłata"));
        assert!(rendered.contains("15-06-2024"));
        assert!(rendered.contains("Następny przychód"));
    }

    #[test]
    fn test_error_keeps_placeholder_and_toasts_once() {
        let (mut view, toasts) = view();
        let placeholder = view.render();

        let failed = QueryState::failed("Network timeout");
        view.apply(&failed);
        view.apply(&failed);

        assert_eq!(view.phase(), &CardPhase::Error);
        assert_eq!(view.render(), placeholder);
        assert_eq!(toasts.messages(), vec!["Network timeout"]);
    }

    #[test]
    fn test_error_without_message_uses_polish_fallback() {
        let (mut view, toasts) = view();
        view.apply(&QueryState::failed(""));
        assert_eq!(
            toasts.messages(),
            vec!["Błąd podczas pobierania następnego przychodu"]
        );
    }

    #[test]
    fn test_expense_fallback_text() {
        let toasts = Arc::new(MemoryToasts::default());
        let mut view = CardView::new(
            CardKind::NextExpense,
            Arc::clone(&toasts) as Arc<dyn Toasts>,
        );
        let mut failed: QueryState<Transaction> = QueryState::failed("x");
        failed.error = None;
        view.apply(&failed);
        assert_eq!(
            toasts.messages(),
            vec!["Błąd podczas pobierania następnego wydatku"]
        );
    }

    #[test]
    fn test_ready_is_not_downgraded_by_later_error() {
        let (mut view, toasts) = view();
        view.apply(&QueryState::ready(wyplata()));
        view.apply(&QueryState::failed("refresh failed"));
        assert!(matches!(view.phase(), CardPhase::Ready(_)));
        // The failed refresh is still toasted.
        assert_eq!(toasts.messages(), vec!["refresh failed"]);
    }

    #[test]
    fn test_loading_snapshot_changes_nothing_once_ready() {
        let (mut view, _toasts) = view();
        view.apply(&QueryState::ready(wyplata()));
        view.apply(&QueryState::loading());
        assert!(matches!(view.phase(), CardPhase::Ready(_)));
    }
}
