//! Link entity representing a short code to URL mapping.

use chrono::{DateTime, Utc};

/// A short link with its click telemetry.
///
/// `code` is the primary key and is immutable once assigned, as is
/// `target_url`. `clicks` only ever grows, by exactly 1 per successful
/// redirect, and `last_clicked_at` tracks the most recent of those redirects.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub last_clicked_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        code: String,
        target_url: String,
        clicks: i64,
        last_clicked_at: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            target_url,
            clicks,
            last_clicked_at,
            created_at,
        }
    }

    /// Returns true if the link has been resolved at least once.
    pub fn is_clicked(&self) -> bool {
        self.last_clicked_at.is_some()
    }
}

/// Input data for creating a new link.
///
/// Both fields are already validated and normalized by the allocator.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
}
