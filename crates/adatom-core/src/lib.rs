//! Core types for the adatom kinetic Monte Carlo framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the lattice and process crates:
//! site and species identifiers, the species table, the ambient
//! [`Environment`], physical constants, and the shared error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod environment;
pub mod error;
pub mod id;
pub mod species;

pub use environment::Environment;
pub use error::{ConfigError, ProcessError, RateError};
pub use id::{SiteId, SpeciesId};
pub use species::SpeciesTable;
