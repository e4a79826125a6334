//! Background worker applying click events to the link store.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Drains click events from the channel and applies each increment.
///
/// Telemetry is best-effort relative to the redirect that produced it: a
/// failed or unmatched increment is logged and the worker moves on. The loop
/// ends when all senders are dropped.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn LinkRepository>,
) {
    while let Some(event) = rx.recv().await {
        match repository.record_click(&event.code, event.clicked_at).await {
            Ok(true) => {}
            Ok(false) => {
                // Link deleted between resolve and increment.
                debug!(code = %event.code, "dropping click for missing code");
            }
            Err(e) => {
                warn!(code = %event.code, error = %e, "failed to record click");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewLink;
    use crate::infrastructure::persistence::MemoryLinkRepository;
    use chrono::Utc;

    #[tokio::test]
    async fn test_worker_applies_increment() {
        let repository = Arc::new(MemoryLinkRepository::new());
        repository
            .try_insert(NewLink {
                code: "work01".to_string(),
                target_url: "https://example.com".to_string(),
            })
            .await
            .unwrap();

        let (tx, rx) = mpsc::channel(8);
        let worker = tokio::spawn(run_click_worker(
            rx,
            repository.clone() as Arc<dyn LinkRepository>,
        ));

        let at = Utc::now();
        tx.send(ClickEvent::new("work01".to_string(), at))
            .await
            .unwrap();
        drop(tx);
        worker.await.unwrap();

        let link = repository.find_by_code("work01").await.unwrap().unwrap();
        assert_eq!(link.clicks, 1);
        assert_eq!(link.last_clicked_at, Some(at));
    }

    #[tokio::test]
    async fn test_worker_survives_unknown_code() {
        let repository = Arc::new(MemoryLinkRepository::new());

        let (tx, rx) = mpsc::channel(8);
        let worker = tokio::spawn(run_click_worker(
            rx,
            repository as Arc<dyn LinkRepository>,
        ));

        tx.send(ClickEvent::new("ghost1".to_string(), Utc::now()))
            .await
            .unwrap();
        drop(tx);

        // The worker exits cleanly instead of panicking.
        worker.await.unwrap();
    }
}
