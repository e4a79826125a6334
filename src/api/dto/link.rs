//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The target URL. Required; scheme defaults to `https` when omitted.
    /// Modeled as an `Option` so a missing field produces a 400 rather than
    /// a body-deserialization rejection.
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: Option<String>,

    /// Optional custom short code (6-8 alphanumeric characters).
    pub code: Option<String>,
}

/// JSON representation of a link.
///
/// `last_clicked` serializes as `null` until the first redirect.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkSummary {
    pub code: String,
    pub url: String,
    pub clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkSummary {
    fn from(link: Link) -> Self {
        Self {
            code: link.code,
            url: link.target_url,
            clicks: link.clicks,
            last_clicked: link.last_clicked_at,
            created_at: link.created_at,
        }
    }
}

/// Response body for a successful deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_summary_field_names() {
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            0,
            None,
            Utc::now(),
        );

        let value = serde_json::to_value(LinkSummary::from(link)).unwrap();
        let obj = value.as_object().unwrap();

        assert!(obj.contains_key("code"));
        assert!(obj.contains_key("url"));
        assert!(obj.contains_key("clicks"));
        assert!(obj.contains_key("lastClicked"));
        assert!(obj.contains_key("createdAt"));
        assert!(obj["lastClicked"].is_null());
    }

    #[test]
    fn test_url_length_cap() {
        let request = CreateLinkRequest {
            url: Some(format!("https://example.com/{}", "a".repeat(3000))),
            code: None,
        };

        assert!(request.validate().is_err());
    }
}
