//! Benchmark profiles and a reference KMC driver for adatom.
//!
//! - [`rough_surface`]: seeded random height map for realistic workloads
//! - [`reference_processes`]: the process set used by benches and the demo
//! - [`KmcDriver`]: rejection-free (BKL) event loop over boxed processes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use adatom_core::{ConfigError, Environment, ProcessError, SiteId, SpeciesTable};
use adatom_lattice::{EdgeBehavior, Lattice, LatticeError, SimpleCubic};
use adatom_process::{InitContext, Process, ProcessRegistry};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// Build a periodic `rows x cols` surface with heights drawn uniformly from
/// `0..=max_height`. Same seed, same surface.
pub fn rough_surface(
    rows: u32,
    cols: u32,
    max_height: i32,
    seed: u64,
) -> Result<SimpleCubic, LatticeError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let heights: Vec<i32> = (0..u64::from(rows) * u64::from(cols))
        .map(|_| rng.random_range(0..=max_height.max(0)))
        .collect();
    SimpleCubic::from_heights(rows, cols, EdgeBehavior::Wrap, &heights)
}

/// Species table of the reference profile: `Si` surface, `H` and `O2`
/// adsorbates.
pub fn reference_species() -> Result<SpeciesTable, ConfigError> {
    SpeciesTable::with_adsorbates("Si", ["H", "O2"])
}

/// The reference process set: atomic hydrogen sticking (simple law) and a
/// dissociative O2 adsorption covering two sites (Arrhenius law).
pub fn reference_processes(
    species: &SpeciesTable,
    environment: Environment,
) -> Result<Vec<Box<dyn Process>>, ProcessError> {
    let registry = ProcessRegistry::with_builtin();
    let ctx = InitContext::new(species, environment);
    let definitions: [&[&str]; 2] = [
        &["simple", "0.8", "1", "1.4e19", "0.001", "species=H"],
        &["arrhenius", "1e13", "0.9", "0.2", "1", "species=O2", "sites=2"],
    ];
    definitions
        .iter()
        .map(|params| -> Result<Box<dyn Process>, ProcessError> {
            let mut process = registry.create("Adsorption")?;
            process.init(params, &ctx)?;
            Ok(process)
        })
        .collect()
}

/// Counters reported by [`KmcDriver::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KmcStats {
    /// Events executed.
    pub events: u64,
    /// Simulated time advanced [s].
    pub time: f64,
}

/// Rejection-free kinetic Monte Carlo loop.
///
/// Each step enumerates every applicable (process, site) pair, picks one
/// with probability proportional to its rate, fires it and advances the
/// clock by an exponentially distributed waiting time.
pub struct KmcDriver {
    processes: Vec<Box<dyn Process>>,
    rng: ChaCha8Rng,
    stats: KmcStats,
}

impl KmcDriver {
    /// Create a driver with a seeded random stream.
    pub fn new(processes: Vec<Box<dyn Process>>, seed: u64) -> Self {
        Self {
            processes,
            rng: ChaCha8Rng::seed_from_u64(seed),
            stats: KmcStats::default(),
        }
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> KmcStats {
        self.stats
    }

    /// Total rate of every applicable event on `lattice`.
    pub fn total_rate(&self, lattice: &dyn Lattice) -> f64 {
        self.candidates(lattice).iter().map(|&(_, _, r)| r).sum()
    }

    fn candidates(&self, lattice: &dyn Lattice) -> Vec<(usize, SiteId, f64)> {
        let mut out = Vec::new();
        for (p, process) in self.processes.iter().enumerate() {
            let rate = process.probability();
            if rate <= 0.0 {
                continue;
            }
            for i in 0..lattice.site_count() as u32 {
                let site = SiteId(i);
                if process.rules(lattice, site) {
                    out.push((p, site, rate));
                }
            }
        }
        out
    }

    /// Execute one event. Returns `false` when nothing can happen.
    pub fn step(&mut self, lattice: &mut dyn Lattice) -> bool {
        let candidates = self.candidates(&*lattice);
        let total: f64 = candidates.iter().map(|&(_, _, r)| r).sum();
        if candidates.is_empty() || total <= 0.0 {
            return false;
        }

        let mut pick = self.rng.random::<f64>() * total;
        let mut chosen = candidates[candidates.len() - 1];
        for &candidate in &candidates {
            if pick < candidate.2 {
                chosen = candidate;
                break;
            }
            pick -= candidate.2;
        }

        let (p, site, _) = chosen;
        let process = &mut self.processes[p];
        process.set_target_site(site);
        process.perform_target(lattice);

        let u: f64 = self.rng.random::<f64>().max(f64::MIN_POSITIVE);
        self.stats.events += 1;
        self.stats.time += -u.ln() / total;
        debug!(
            process = process.name(),
            site = %site,
            total_rate = total,
            time = self.stats.time,
            "event"
        );
        true
    }

    /// Run up to `max_events` events, stopping early when the lattice is
    /// saturated.
    pub fn run(&mut self, lattice: &mut dyn Lattice, max_events: u64) -> KmcStats {
        for _ in 0..max_events {
            if !self.step(lattice) {
                info!(events = self.stats.events, "no applicable events left");
                break;
            }
        }
        self.stats
    }
}
