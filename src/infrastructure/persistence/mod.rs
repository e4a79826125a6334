//! Link store implementations.
//!
//! Both backends honor the same contract: insertion is atomic
//! create-if-absent and the click increment is a single store operation.
//! The backend is chosen at startup; see [`crate::server`].
//!
//! # Stores
//!
//! - [`PgLinkRepository`] - durable PostgreSQL storage
//! - [`MemoryLinkRepository`] - process-local storage for development and
//!   tests

pub mod memory_link_repository;
pub mod pg_link_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
