//! Link creation, lookup, listing, and deletion.

use std::sync::Arc;

use serde_json::json;
use tracing::error;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_custom_code};
use crate::utils::url_normalizer::normalize_url;

/// Cap on candidate generation before creation fails. Sustained collisions at
/// this depth mean the keyspace is saturated or the store is misbehaving.
const MAX_GENERATION_ATTEMPTS: usize = 32;

/// Service owning the link lifecycle: allocation, lookup, listing, deletion.
///
/// Uniqueness under concurrent creation comes entirely from the store's
/// atomic [`try_insert`](LinkRepository::try_insert); the service never
/// pre-checks existence before inserting.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service over the given store.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short link for `raw_url`, optionally under a caller-chosen
    /// code.
    ///
    /// # Code Allocation
    ///
    /// - With `custom_code`: the code is validated and inserted directly. A
    ///   store conflict surfaces as [`AppError::Conflict`]; a custom code is
    ///   never silently replaced by a generated one.
    /// - Without: candidates are generated and inserted until one is free,
    ///   up to a fixed ceiling, after which creation fails with
    ///   [`AppError::AllocationExhausted`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or code.
    pub async fn create_link(
        &self,
        raw_url: &str,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let target_url = normalize_url(raw_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(code) = custom_code {
            validate_custom_code(&code)?;

            return match self
                .repository
                .try_insert(NewLink {
                    code: code.clone(),
                    target_url,
                })
                .await
            {
                Err(AppError::Conflict { .. }) => Err(AppError::conflict(
                    "Code already exists",
                    json!({ "code": code }),
                )),
                other => other,
            };
        }

        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let candidate = NewLink {
                code: generate_code(),
                target_url: target_url.clone(),
            };

            match self.repository.try_insert(candidate).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        error!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "could not allocate a free code"
        );
        Err(AppError::allocation_exhausted(
            "Failed to allocate a unique code",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }

    /// Retrieves a link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Not found", json!({ "code": code })))
    }

    /// Lists all links, newest first.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_all().await
    }

    /// Deletes a link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.repository.delete(code).await? {
            return Err(AppError::not_found("Not found", json!({ "code": code })));
        }

        Ok(())
    }
}
