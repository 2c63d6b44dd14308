//! Reference collection kinds.
//!
//! The curation platform groups its artifacts into three closed categories.
//! This module owns that closed set and the string resolver that turns
//! user-supplied names (path parameters, CLI args) into one of them.

pub mod error;
pub mod kind;

pub use error::InvalidCollectionKind;
pub use kind::{CollectionKind, resolve};
