//! # meridian-profile — Profile Records & Completion Engine
//!
//! Runtime profile data for one company plus the pure-function layer that
//! derives completion metrics from it:
//!
//! - **Records** (`record.rs`): `SectionData` (field values keyed by
//!   `FieldKey`) and `ProfileRecord` (identity, growth stage, per-section
//!   data). Owned and mutated by the surrounding edit layer; read, never
//!   mutated, by the engine.
//!
//! - **Completion** (`completion.rs`): the mandatory-field resolver and the
//!   completion calculators at group, section, and whole-profile scope.
//!   Stateless, side-effect-free, idempotent — recomputed on every edit.
//!
//! - **Missing-field report** (`report.rs`): the ordered list of mandatory
//!   fields still blank at the company's active stage, consumed by the
//!   portal's warning banners.
//!
//! ## Zero-Denominator Convention
//!
//! The two calculators deliberately disagree about empty denominators:
//! all-fields completion of a zero-field group is **0**, while mandatory
//! completion with zero mandatory fields is **100** (vacuously complete).
//! This asymmetry is inherited portal behavior and is preserved, not
//! unified — see the notes on [`completion::group_completion`] and
//! [`completion::MandatoryCompletion`].
//!
//! ## Crate Policy
//!
//! - The engine never errors: a missing stage, a missing section, or a
//!   blank value resolves to "not provided", never to `Err` or a panic.
//! - No mutation of `ProfileRecord` anywhere in this crate.

pub mod completion;
pub mod record;
pub mod report;

pub use completion::{
    group_completion, group_mandatory_completion, is_field_mandatory, profile_completion,
    profile_mandatory_completion, section_completion, section_mandatory_completion,
    MandatoryCompletion,
};
pub use record::{ProfileRecord, SectionData};
pub use report::{missing_mandatory_fields, MissingField};
