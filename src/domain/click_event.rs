//! Click event model for asynchronous click tracking.

use chrono::{DateTime, Utc};

/// A click captured on the redirect path, queued for async processing.
///
/// Carries the code and the timestamp observed at resolve time, so the stored
/// `last_clicked_at` reflects when the redirect happened rather than when the
/// worker got around to the write.
///
/// # Usage Flow
///
/// 1. Created in the redirect handler after a successful lookup
/// 2. Sent to a bounded channel (non-blocking)
/// 3. Applied by [`crate::domain::click_worker::run_click_worker`] via
///    [`crate::domain::repositories::LinkRepository::record_click`]
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
    pub clicked_at: DateTime<Utc>,
}

impl ClickEvent {
    /// Creates a new click event.
    pub fn new(code: String, clicked_at: DateTime<Utc>) -> Self {
        Self { code, clicked_at }
    }
}
