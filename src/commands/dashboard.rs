use crate::args::DashboardArgs;
use crate::commands::card::render_card;
use crate::commands::Out;
use crate::model::Transaction;
use crate::query::QueryCache;
use crate::view::{CardKind, NavigationLinks, Page, ProgressBar, Sidebar, Toasts, TracingToasts};
use crate::{api, Config, Mode, Result};
use serde::Serialize;
use std::sync::Arc;

const TITLE: &str = "Złotówka";
const PROGRESS_WIDTH: usize = 20;

/// The structured result of a `dashboard` run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DashboardData {
    next_income: Option<Transaction>,
    next_expense: Option<Transaction>,
}

/// Renders the whole dashboard: the sidebar next to both cards, with an
/// optional savings progress bar. Both cards observe the same query cache, so
/// their fetches are deduplicated per key and run concurrently.
pub async fn dashboard(
    config: Config,
    mode: Mode,
    args: DashboardArgs,
) -> Result<Out<DashboardData>> {
    let api = api::cards(&config, mode)?;
    let cache: QueryCache<Transaction> = QueryCache::new(config.freshness());
    let toasts: Arc<dyn Toasts> = Arc::new(TracingToasts);

    let ((income_render, next_income), (expense_render, next_expense)) = tokio::join!(
        render_card(&cache, &api, CardKind::NextIncome, Arc::clone(&toasts)),
        render_card(&cache, &api, CardKind::NextExpense, Arc::clone(&toasts)),
    );

    let mut content = format!("{income_render}\n\n{expense_render}");
    if let Some(progress) = args.progress() {
        let bar = ProgressBar::new(progress);
        content.push_str(&format!("\n\nMarzenia: {}", bar.render(PROGRESS_WIDTH)));
    }

    let sidebar = Sidebar::new(TITLE, NavigationLinks::new(config.links().iter().cloned()));
    let page = Page::new(sidebar, content);

    Ok(Out::new(
        page.render(),
        DashboardData {
            next_income,
            next_expense,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_dashboard_in_test_mode() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        let config = Config::create(&home, "http://localhost:8080", None)
            .await
            .unwrap();

        let out = dashboard(config, Mode::Test, DashboardArgs::new(Some(0.4)))
            .await
            .unwrap();

        let message = out.message();
        assert!(message.contains("Złotówka"));
        assert!(message.contains("Pulpit"));
        assert!(message.contains("Następny przychód"));
        assert!(message.contains("Następny wydatek"));
        assert!(message.contains("40%"));

        let data = out.structure().unwrap();
        assert!(data.next_income.as_ref().unwrap().is_income());
        assert!(!data.next_expense.as_ref().unwrap().is_income());
    }
}
