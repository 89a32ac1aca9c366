//! Process evaluation core for adatom simulations.
//!
//! A process answers three questions for the scheduler: may it fire at a
//! site ([`Process::rules`]), how fast does it fire
//! ([`Process::probability`]), and what does firing do to the lattice
//! ([`Process::perform`]). Each answer is delegated to a strategy selected
//! once at initialization:
//!
//! - [`RateLaw`]: constant, sticking-coefficient (`simple`) or Arrhenius
//! - [`RuleKind`]: unconditional, basic vacancy, species-aware vacancy,
//!   species-aware multi-site footprint
//! - [`ExecutionKind`]: {single, multi}-species × {single, multi}-site
//!
//! The [`geometry`] module holds the footprint, height and step helpers
//! that rules and executions share. [`Adsorption`] is the reference
//! process; [`ProcessRegistry`] maps process names to factories.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adsorption;
pub mod config;
pub mod execution;
pub mod geometry;
pub mod process;
pub mod rate;
pub mod registry;
pub mod rule;
pub mod selection;

pub use adsorption::Adsorption;
pub use config::{FootprintPolicy, FootprintShape, ProcessConfig, ProcessConfigBuilder};
pub use execution::{ExecutionKind, Incorporation};
pub use geometry::{Footprint, StepPolicy, Vacancy};
pub use process::{InitContext, Process};
pub use rate::RateLaw;
pub use registry::{ProcessFactory, ProcessRegistry};
pub use rule::RuleKind;
pub use selection::StrategySelection;
