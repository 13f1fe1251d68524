//! # meridian-core — Foundational Types for the Meridian Compliance Portal
//!
//! This crate is the bedrock of the Meridian workspace. It defines the
//! type-system primitives every other crate builds on. Every other crate in
//! the workspace depends on `meridian-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `CompanyId`, `DocumentId`,
//!    `ObligationId`, `SectionId`, `FieldKey` — all newtypes. No bare strings
//!    or UUIDs for identifiers, so a document id can never be passed where a
//!    company id is expected.
//!
//! 2. **Single `GrowthStage` enum.** One definition of the company lifecycle
//!    stages, exhaustive `match` everywhere. Adding a stage forces every
//!    consumer to handle it.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision. Non-UTC inputs are rejected at parse.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `meridian-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod stage;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::MeridianError;
pub use identity::{CompanyId, DocumentId, FieldKey, ObligationId, SectionId};
pub use stage::GrowthStage;
pub use temporal::Timestamp;
