//! # meridian-config — Profile Configuration Tree
//!
//! The static configuration describing what a complete company profile
//! looks like: sections (tabs) containing field groups containing field
//! descriptors, each descriptor naming the growth stages at which it is
//! mandatory.
//!
//! ## Design
//!
//! The original portal carried this tree as loosely-typed object literals
//! keyed by string. Here every node is a closed record type, and the whole
//! tree is validated once at load time ([`ProfileConfiguration::validate`]).
//! Downstream code — the completion engine in particular — operates over a
//! checked schema and never revalidates.
//!
//! ## Crate Policy
//!
//! - Depends only on `meridian-core` internally.
//! - `ProfileConfiguration` is immutable after load: there are no mutating
//!   operations on a validated configuration.
//! - Validation failures are structured `ConfigError` variants naming the
//!   offending section and field.

pub mod configuration;
pub mod descriptor;

pub use configuration::{ConfigError, ProfileConfiguration};
pub use descriptor::{FieldDescriptor, FieldGroup, Section};
