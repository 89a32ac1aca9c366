//! Adatom: the process-evaluation core of a lattice kinetic Monte Carlo
//! deposition simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the adatom sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use adatom::prelude::*;
//!
//! let species = SpeciesTable::with_adsorbates("Si", ["H", "O2"]).unwrap();
//! let env = Environment::new(600.0, 10.0).unwrap();
//! let ctx = InitContext::new(&species, env);
//!
//! let registry = ProcessRegistry::with_builtin();
//! let mut dimer = registry.create("Adsorption").unwrap();
//! dimer
//!     .init(&["arrhenius", "1e13", "0.9", "0.2", "1", "species=O2", "sites=2"], &ctx)
//!     .unwrap();
//!
//! let mut lattice = SimpleCubic::new(8, 8, EdgeBehavior::Wrap).unwrap();
//! let site = SiteId(10);
//! assert!(dimer.rules(&lattice, site));
//! dimer.perform(&mut lattice, site);
//! assert_eq!(lattice.count_species(species.id("O2").unwrap()), 2);
//! assert!(dimer.probability() > 0.0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `adatom-core` | IDs, species table, environment, constants, errors |
//! | [`lattice`] | `adatom-lattice` | `Lattice` trait, sites, `SimpleCubic` backend |
//! | [`process`] | `adatom-process` | `Process` trait, rate laws, rules, executions, registry |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, IDs and errors (`adatom-core`).
///
/// Contains [`types::SpeciesTable`], [`types::Environment`] and the
/// shared error types.
pub use adatom_core as types;

/// Lattice backends (`adatom-lattice`).
///
/// Provides the [`lattice::Lattice`] trait and the
/// [`lattice::SimpleCubic`] solid-on-solid surface.
pub use adatom_lattice as lattice;

/// Process evaluation (`adatom-process`).
///
/// The [`process::Process`] trait is the scheduler-facing contract;
/// [`process::Adsorption`] is the reference implementation.
pub use adatom_process as process;

/// Common imports for typical adatom usage.
pub mod prelude {
    // Core types
    pub use adatom_core::{Environment, SiteId, SpeciesId, SpeciesTable};

    // Errors
    pub use adatom_core::{ConfigError, ProcessError, RateError};

    // Lattice
    pub use adatom_lattice::{EdgeBehavior, Lattice, SimpleCubic, Site};

    // Process
    pub use adatom_process::{
        Adsorption, InitContext, Process, ProcessConfig, ProcessRegistry, RateLaw,
    };
}
