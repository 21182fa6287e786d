//! Types that represent the core data model, such as `Transaction` and `Currency`.
mod money;
mod transaction;

pub use money::{format_date, format_money, Currency};
pub use transaction::Transaction;
