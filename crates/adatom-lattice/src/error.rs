//! Error types for lattice construction.

use thiserror::Error;

/// Errors arising from lattice construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LatticeError {
    /// Attempted to construct a lattice with zero sites.
    #[error("lattice must have at least one site")]
    EmptyLattice,
    /// The site count does not fit the `u32` id range.
    #[error("{rows} x {cols} sites exceeds the u32 site id range")]
    TooManySites {
        /// Requested rows.
        rows: u32,
        /// Requested columns.
        cols: u32,
    },
    /// A height map does not match the lattice size.
    #[error("height map has {got} entries, lattice has {expected} sites")]
    HeightMapMismatch {
        /// Number of sites in the lattice.
        expected: usize,
        /// Number of heights supplied.
        got: usize,
    },
}
