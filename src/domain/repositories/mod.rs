//! Repository trait definitions for the domain layer.
//!
//! The [`LinkRepository`] trait abstracts the link store behind the atomicity
//! contract the allocator and the click pipeline rely on. Concrete
//! implementations live in `crate::infrastructure::persistence`; a mock is
//! auto-generated via `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
