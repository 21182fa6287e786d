//! Text rendering of the dashboard: cards, navigation shell and toasts.

mod card;
mod form;
mod layout;
mod nav;
mod toast;

pub use card::{CardKind, CardPhase, CardView};
pub use form::{TransactionData, TransactionForm};
pub use layout::{Page, Sidebar};
pub use nav::{NavigationLinks, ProgressBar, SETTINGS_LABEL};
pub use toast::{MemoryToasts, Toasts, TracingToasts};
