#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::mpsc;

use snaplink::application::services::LinkService;
use snaplink::domain::click_event::ClickEvent;
use snaplink::domain::entities::{Link, NewLink};
use snaplink::domain::repositories::LinkRepository;
use snaplink::infrastructure::persistence::MemoryLinkRepository;
use snaplink::state::AppState;

/// Builds handler state over a fresh in-memory store.
///
/// Returns the state, the click channel receiver (so tests can observe or
/// drain queued click events), and the store itself for direct seeding and
/// inspection.
pub fn create_test_state() -> (
    AppState,
    mpsc::Receiver<ClickEvent>,
    Arc<MemoryLinkRepository>,
) {
    let repository = Arc::new(MemoryLinkRepository::new());
    let (tx, rx) = mpsc::channel(100);

    let state = AppState {
        links: Arc::new(LinkService::new(
            repository.clone() as Arc<dyn LinkRepository>
        )),
        click_tx: tx,
    };

    (state, rx, repository)
}

pub async fn seed_link(repository: &MemoryLinkRepository, code: &str, url: &str) -> Link {
    repository
        .try_insert(NewLink {
            code: code.to_string(),
            target_url: url.to_string(),
        })
        .await
        .unwrap()
}
