//! The adsorption process: a gas-phase species sticks to the surface.
//!
//! Adsorption delegates its three scheduler answers to strategies resolved
//! once at initialization (see [`StrategySelection`]) and caches its rate.
//! Adsorbing the surface species itself (physical vapour deposition of the
//! film material) grows the film instead of forming an adlayer.

use crate::config::{ProcessConfig, ProcessConfigBuilder};
use crate::execution::Incorporation;
use crate::geometry;
use crate::process::{InitContext, Process};
use crate::selection::StrategySelection;
use adatom_core::{ConfigError, Environment, ProcessError, RateError, SiteId, SpeciesId};
use adatom_lattice::Lattice;
use tracing::{debug, error, trace};

/// State fixed by a successful `init`.
#[derive(Clone, Debug)]
struct Configured {
    config: ProcessConfig,
    species: SpeciesId,
    selection: StrategySelection,
    environment: Environment,
    rate: f64,
}

/// Adsorption of one species onto a lattice.
///
/// # Examples
///
/// ```
/// use adatom_core::{Environment, SiteId, SpeciesTable};
/// use adatom_lattice::{EdgeBehavior, SimpleCubic};
/// use adatom_process::{Adsorption, InitContext, Process};
///
/// let species = SpeciesTable::with_adsorbates("Si", ["H"]).unwrap();
/// let ctx = InitContext::new(&species, Environment::default());
///
/// let mut ads = Adsorption::new();
/// ads.set_adsorbed("H");
/// ads.init(&["constant", "2.5"], &ctx).unwrap();
///
/// let mut lattice = SimpleCubic::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(ads.probability(), 2.5);
/// assert!(ads.rules(&lattice, SiteId(5)));
/// ads.perform(&mut lattice, SiteId(5));
/// assert!(!ads.rules(&lattice, SiteId(5)));
/// ```
#[derive(Clone, Debug)]
pub struct Adsorption {
    pending: ProcessConfigBuilder,
    state: Option<Configured>,
    target: Option<SiteId>,
}

impl Adsorption {
    /// Name under which the process is registered.
    pub const NAME: &'static str = "Adsorption";

    /// An unconfigured process, as created by the registry.
    pub fn new() -> Self {
        Self {
            pending: ProcessConfig::builder(),
            state: None,
            target: None,
        }
    }

    /// Build and initialize from a typed configuration.
    pub fn from_config(config: ProcessConfig, ctx: &InitContext<'_>) -> Result<Self, ProcessError> {
        let mut process = Self::new();
        process.configure(config, ctx)?;
        Ok(process)
    }

    /// Set the adsorbed species label before `init`.
    pub fn set_adsorbed(&mut self, label: &str) {
        self.pending = std::mem::take(&mut self.pending).species(label);
    }

    /// Set the footprint size before `init`. Validated by `init`.
    pub fn set_num_sites(&mut self, sites: i64) {
        self.pending = std::mem::take(&mut self.pending).footprint(sites);
    }

    /// Footprint size, once initialized.
    pub fn num_sites(&self) -> Option<u32> {
        self.state.as_ref().map(|s| s.config.footprint().size())
    }

    /// The resolved configuration, once initialized.
    pub fn config(&self) -> Option<&ProcessConfig> {
        self.state.as_ref().map(|s| &s.config)
    }

    /// The resolved strategies, once initialized.
    pub fn selection(&self) -> Option<StrategySelection> {
        self.state.as_ref().map(|s| s.selection)
    }

    /// Interned id of the adsorbed species, once initialized.
    pub fn species(&self) -> Option<SpeciesId> {
        self.state.as_ref().map(|s| s.species)
    }

    /// Whether `site` sits at the foot of an up-step, under the configured
    /// step policy.
    pub fn is_in_lower_step(&self, lattice: &dyn Lattice, site: SiteId) -> bool {
        geometry::is_in_lower_step(lattice, site, self.step_policy())
    }

    /// Whether `site` sits on the edge of a down-step, under the configured
    /// step policy.
    pub fn is_in_higher_step(&self, lattice: &dyn Lattice, site: SiteId) -> bool {
        geometry::is_in_higher_step(lattice, site, self.step_policy())
    }

    /// Number of neighbours of `site` standing at least as high.
    pub fn coordination(&self, lattice: &dyn Lattice, site: SiteId) -> usize {
        geometry::coordination(lattice, site)
    }

    /// Conditions the cached rate was computed for, once initialized.
    pub fn environment(&self) -> Option<Environment> {
        self.state.as_ref().map(|s| s.environment)
    }

    fn step_policy(&self) -> geometry::StepPolicy {
        self.state
            .as_ref()
            .map(|s| s.config.step_policy())
            .unwrap_or_default()
    }

    fn configure(
        &mut self,
        config: ProcessConfig,
        ctx: &InitContext<'_>,
    ) -> Result<(), ProcessError> {
        let species = ctx
            .species
            .id(config.species())
            .ok_or_else(|| ConfigError::UnknownSpecies {
                label: config.species().to_string(),
            })?;
        let growth = match config.incorporation() {
            Some(mode) => mode == Incorporation::Growth,
            None => species.is_surface(),
        };
        let selection = StrategySelection::resolve(
            ctx.species.is_multi_species(),
            config.footprint().size(),
            config.is_unconditional(),
            growth,
        );
        let rate = checked_rate(&config, &ctx.environment)?;

        debug!(
            process = Self::NAME,
            species = config.species(),
            sites = config.footprint().size(),
            law = config.rate_law().keyword(),
            rule = ?selection.rule,
            execution = ?selection.execution,
            incorporation = ?selection.incorporation,
            rate,
            "process initialized"
        );
        self.state = Some(Configured {
            config,
            species,
            selection,
            environment: ctx.environment,
            rate,
        });
        Ok(())
    }
}

impl Default for Adsorption {
    fn default() -> Self {
        Self::new()
    }
}

fn checked_rate(config: &ProcessConfig, environment: &Environment) -> Result<f64, RateError> {
    config
        .rate_law()
        .checked(Adsorption::NAME, environment)
        .inspect_err(|e| {
            error!(
                process = %e.process,
                law = e.law,
                parameters = %e.parameters,
                value = e.value,
                "non-physical rate"
            );
        })
}

impl Process for Adsorption {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn init(&mut self, params: &[&str], ctx: &InitContext<'_>) -> Result<(), ProcessError> {
        if self.state.is_some() {
            return Err(ConfigError::AlreadyInitialized {
                name: Self::NAME.to_string(),
            }
            .into());
        }
        let config = ProcessConfig::from_tokens(params, self.pending.clone())?;
        self.configure(config, ctx)
    }

    fn rules(&self, lattice: &dyn Lattice, site: SiteId) -> bool {
        self.state.as_ref().is_some_and(|s| {
            s.selection
                .rule
                .evaluate(lattice, site, s.config.footprint())
        })
    }

    fn probability(&self) -> f64 {
        self.state.as_ref().map_or(0.0, |s| s.rate)
    }

    fn perform(&self, lattice: &mut dyn Lattice, site: SiteId) {
        let Some(state) = self.state.as_ref() else {
            debug_assert!(false, "perform on an uninitialized process");
            return;
        };
        let Some(footprint) = geometry::footprint(
            &*lattice,
            site,
            state.config.footprint(),
            state.selection.rule.vacancy(),
        ) else {
            debug_assert!(
                false,
                "perform at site {site} where the applicability rule does not hold"
            );
            return;
        };
        trace!(process = Self::NAME, site = %site, sites = footprint.len(), "perform");
        state.selection.execution.apply(
            lattice,
            &footprint,
            state.species,
            state.selection.incorporation,
        );
    }

    fn set_target_site(&mut self, site: SiteId) {
        self.target = Some(site);
    }

    fn target_site(&self) -> Option<SiteId> {
        self.target
    }

    fn update_environment(&mut self, environment: &Environment) -> Result<(), RateError> {
        let Some(state) = self.state.as_mut() else {
            return Ok(());
        };
        state.rate = checked_rate(&state.config, environment)?;
        state.environment = *environment;
        debug!(
            process = Self::NAME,
            temperature = environment.temperature(),
            pressure = environment.pressure(),
            rate = state.rate,
            "rate updated"
        );
        Ok(())
    }
}
