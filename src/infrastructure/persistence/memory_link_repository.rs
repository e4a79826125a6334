//! In-memory implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local link store backed by a `RwLock<HashMap>`.
///
/// Used when no `DATABASE_URL` is configured, and by integration tests. The
/// contract matches the PostgreSQL store: insert-if-absent and the click
/// increment each happen under a single write-lock acquisition, so they are
/// atomic with respect to every other operation.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, Link>>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn try_insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut links = self.links.write().await;

        match links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "code": new_link.code }),
            )),
            Entry::Vacant(slot) => {
                let link = Link::new(new_link.code, new_link.target_url, 0, None, Utc::now());
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.read().await.get(code).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self.links.read().await.values().cloned().collect();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(links)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.write().await.remove(code).is_some())
    }

    async fn record_click(&self, code: &str, at: DateTime<Utc>) -> Result<bool, AppError> {
        let mut links = self.links.write().await;

        match links.get_mut(code) {
            Some(link) => {
                link.clicks += 1;
                link.last_clicked_at = Some(at);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
