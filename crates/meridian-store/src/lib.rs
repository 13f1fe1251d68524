//! # meridian-store — Repository Seam
//!
//! The storage boundary of the portal. The original implementation kept a
//! module-global mutable cache standing in for a backend; here that
//! becomes a trait ([`ProfileRepository`]) with an injected implementation
//! and a plain constructed lifecycle — created by the composition root,
//! dropped when the owner drops it, never ambient.
//!
//! A real deployment would put a Dataverse- or database-backed
//! implementation behind the same trait. That integration is out of
//! scope; [`InMemoryRepository`] is the only implementation shipped, and
//! it is a genuine store, not a fixture generator.
//!
//! ## Crate Policy
//!
//! - No process-wide state: no `static`, no `lazy_static`, no `OnceLock`.
//! - `StoreError::NotFound` is the only runtime failure; everything else
//!   about storage is infallible in memory.

pub mod memory;
pub mod repository;

pub use memory::InMemoryRepository;
pub use repository::{CompanyRecord, ProfileRepository, StoreError};
