//! Platform-agnostic page lifecycle.
//!
//! [`run_form_page`] is the async body a Dioxus `use_coroutine` runs. It
//! keeps at most one record fetch and one save in flight while it keeps
//! handling [`UiMessage`]s, and publishes a snapshot of the
//! [`GameFormPage`] after every change.

use std::future::{Future, pending};

use futures_util::future::{FutureExt, LocalBoxFuture};
use futures_util::{Stream, StreamExt};
use jogos_core::api::{ApiError, GameApi};
use jogos_core::page::{GameFormPage, LoadTicket, SubmitOutcome};
use jogos_core::record::GameRecord;
use jogos_core::route::{LISTING_ROUTE, Navigator, form_path};
use tracing::{debug, info};

use crate::UiMessage;

type LoadFuture<'a> = LocalBoxFuture<'a, (LoadTicket, Result<GameRecord, ApiError>)>;
type SaveFuture<'a> = LocalBoxFuture<'a, Result<(), ApiError>>;

/// Await the operation in `slot`, or never resolve when it is empty.
async fn in_flight<F: Future + Unpin>(slot: &mut Option<F>) -> F::Output {
    match slot.as_mut() {
        Some(fut) => fut.await,
        None => pending().await,
    }
}

/// Drive the form page until the message stream closes.
///
/// `publish` receives the page after every state change; on Dioxus this
/// writes the page into a `Signal`.
pub async fn run_form_page<A, N, P>(
    mut rx: impl Stream<Item = UiMessage> + Unpin,
    mut publish: P,
    api: A,
    nav: N,
) where
    A: GameApi,
    N: Navigator,
    P: FnMut(&GameFormPage),
{
    let api = &api;
    let mut page = GameFormPage::new();
    let mut load: Option<LoadFuture<'_>> = None;
    let mut save: Option<SaveFuture<'_>> = None;

    loop {
        tokio::select! {
            // Apply finished operations before handling more input.
            biased;

            (ticket, result) = in_flight(&mut load) => {
                load = None;
                if page.finish_load(&ticket, result) {
                    publish(&page);
                }
            }
            result = in_flight(&mut save) => {
                save = None;
                let outcome = page.finish_submit(result);
                publish(&page);
                if let SubmitOutcome::Navigate(route) = outcome {
                    nav.push(route);
                }
            }
            msg = rx.next() => {
                let Some(msg) = msg else {
                    return;
                };
                match msg {
                    UiMessage::Open(id) => {
                        debug!(path = %form_path(id.as_deref()), "Opening form page");
                        save = None;
                        load = page.open(id).map(|ticket| {
                            async move {
                                let result = api.fetch_game(ticket.id()).await;
                                (ticket, result)
                            }
                            .boxed_local()
                        });
                    }
                    UiMessage::Edit { field, value } => page.set_value(field, value),
                    UiMessage::Blur(field) => page.touch(field),
                    UiMessage::Submit => {
                        if let Some(request) = page.begin_submit() {
                            save = Some(async move { request.send(api).await }.boxed_local());
                        }
                    }
                    UiMessage::Back => {
                        info!(dirty = page.form().is_dirty(), "Leaving form without saving");
                        nav.push(LISTING_ROUTE);
                        continue;
                    }
                }
                publish(&page);
            }
        }
    }
}
