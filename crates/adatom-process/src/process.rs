//! The [`Process`] trait and its initialization context.
//!
//! A process is one event type of the simulation. The scheduler asks it
//! whether it may fire at a site, how fast it fires, and lets it mutate the
//! lattice when it is chosen. All three answers come from strategies fixed
//! once by [`Process::init`].

use adatom_core::{Environment, ProcessError, RateError, SiteId, SpeciesTable};
use adatom_lattice::Lattice;

/// Read-only simulation state handed to [`Process::init`].
#[derive(Clone, Copy, Debug)]
pub struct InitContext<'a> {
    /// Species registered for this simulation.
    pub species: &'a SpeciesTable,
    /// Reactor conditions used to evaluate the rate law.
    pub environment: Environment,
}

impl<'a> InitContext<'a> {
    /// Bundle a species table with an environment.
    pub fn new(species: &'a SpeciesTable, environment: Environment) -> Self {
        Self {
            species,
            environment,
        }
    }
}

/// An event type evaluated by the KMC scheduler.
///
/// # Contract
///
/// - `init` is called exactly once, before any other query. A second call
///   fails with [`ConfigError::AlreadyInitialized`](adatom_core::ConfigError::AlreadyInitialized).
/// - `rules` and `probability` take `&self` and never mutate anything;
///   `rules` is idempotent.
/// - `perform` is only called for a site where `rules` returned `true` in
///   the current step, and changes exactly the sites of the footprint.
/// - `probability` returns the rate cached at `init` (or the last
///   `update_environment`): deterministic and non-negative.
///
/// # Object safety
///
/// This trait is object-safe; the registry hands processes out as
/// `Box<dyn Process>`.
pub trait Process: Send + Sync + 'static {
    /// Name the process is registered under.
    fn name(&self) -> &str;

    /// Configure the process from an ordered token list.
    fn init(&mut self, params: &[&str], ctx: &InitContext<'_>) -> Result<(), ProcessError>;

    /// Whether the process may fire at `site`.
    ///
    /// Returns `false` for a site outside the lattice and for an
    /// uninitialized process.
    fn rules(&self, lattice: &dyn Lattice, site: SiteId) -> bool;

    /// Cached rate [events/s]. Zero before `init`.
    fn probability(&self) -> f64;

    /// Fire the process at `site`.
    fn perform(&self, lattice: &mut dyn Lattice, site: SiteId);

    /// Park the site chosen by the scheduler.
    fn set_target_site(&mut self, site: SiteId);

    /// The parked site, if any.
    fn target_site(&self) -> Option<SiteId>;

    /// Recompute the cached rate for new reactor conditions.
    fn update_environment(&mut self, environment: &Environment) -> Result<(), RateError>;

    /// Fire the process at the parked site. No-op when none is parked.
    fn perform_target(&self, lattice: &mut dyn Lattice) {
        if let Some(site) = self.target_site() {
            self.perform(lattice, site);
        }
    }
}
