//! Repository trait for link store access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Persistence contract for short links.
///
/// Two operations carry the concurrency guarantees the rest of the system is
/// built on: [`try_insert`](LinkRepository::try_insert) must be an atomic
/// create-if-absent, and [`record_click`](LinkRepository::record_click) must
/// be an atomic increment. Neither may be implemented as a read-check-write
/// sequence visible to other callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Atomically creates a link if its code is free.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the code already exists. The
    /// conflict must be detected by the store itself (unique-constraint
    /// semantics), so that under concurrent creation of the same code exactly
    /// one caller succeeds.
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on store
    /// failures.
    async fn try_insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links, newest `created_at` first.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Deletes a link by its code.
    ///
    /// Returns `Ok(true)` if the link existed and was removed, `Ok(false)`
    /// otherwise.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Atomically increments the click counter by exactly 1 and sets
    /// `last_clicked_at` to `at`, in a single store operation.
    ///
    /// Concurrent calls for the same code must all be reflected: N concurrent
    /// increments leave the counter N higher, never less.
    ///
    /// Returns `Ok(false)` when the code no longer exists (e.g. deleted
    /// between resolve and increment).
    async fn record_click(&self, code: &str, at: DateTime<Utc>) -> Result<bool, AppError>;
}
