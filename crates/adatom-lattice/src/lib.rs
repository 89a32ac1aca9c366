//! Lattice data structures for adatom simulations.
//!
//! This crate defines the [`Lattice`] trait — the only view the process
//! core has of the simulated surface — together with the per-site state
//! ([`Site`], [`Bond`]) and a reference backend.
//!
//! # Backends
//!
//! - [`SimpleCubic`]: solid-on-solid simple cubic surface, a 2D grid of
//!   columns with 4-connected neighbourhood and configurable
//!   [`EdgeBehavior`] (absorb, clamp, wrap)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod lattice;
pub mod simple_cubic;
pub mod site;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::LatticeError;
pub use lattice::{Lattice, Neighbours};
pub use simple_cubic::SimpleCubic;
pub use site::{Bond, Site};
