//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::LinkService;
use crate::domain::click_event::ClickEvent;

/// Per-request handler state.
///
/// Handlers are stateless across requests: everything mutable lives behind
/// the link service's store or on the click channel.
#[derive(Clone)]
pub struct AppState {
    pub links: Arc<LinkService>,
    pub click_tx: mpsc::Sender<ClickEvent>,
}
