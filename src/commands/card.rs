use crate::api::{Cards, CARD_SERVICE, GET_NEXT_TRANSACTION};
use crate::commands::Out;
use crate::model::Transaction;
use crate::query::{CacheKey, CancelToken, QueryCache};
use crate::view::{CardKind, CardView, Toasts, TracingToasts};
use crate::{api, Config, Mode, Result};
use std::sync::Arc;

/// Fetches and renders a single dashboard card.
pub async fn card(config: Config, mode: Mode, kind: CardKind) -> Result<Out<Transaction>> {
    let api = api::cards(&config, mode)?;
    let cache: QueryCache<Transaction> = QueryCache::new(config.freshness());
    let toasts: Arc<dyn Toasts> = Arc::new(TracingToasts);
    let (rendered, data) = render_card(&cache, &api, kind, toasts).await;
    Ok(match data {
        Some(transaction) => Out::new(rendered, transaction),
        None => Out::new_message(rendered),
    })
}

/// The cache key for a card's backing query.
pub(crate) fn card_key(kind: CardKind) -> CacheKey {
    CacheKey::new(CARD_SERVICE, GET_NEXT_TRANSACTION).with_param(kind.is_income())
}

/// Drives one card through a fetch cycle: observe the cache, apply the
/// resulting state, render. Shared with the `dashboard` command, which passes
/// the same cache to both cards.
pub(crate) async fn render_card(
    cache: &QueryCache<Transaction>,
    api: &Arc<dyn Cards>,
    kind: CardKind,
    toasts: Arc<dyn Toasts>,
) -> (String, Option<Transaction>) {
    let mut view = CardView::new(kind, toasts);
    let api = Arc::clone(api);
    let is_income = kind.is_income();
    let state = cache
        .observe(
            card_key(kind),
            move || async move { api.get_next_transaction(is_income).await },
            CancelToken::never(),
        )
        .await;
    view.apply(&state);
    (view.render(), state.data)
}
