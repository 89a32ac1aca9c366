//! Seeded deposition run on a rough surface.
//!
//! Demonstrates: species table → registry → init → KMC loop → coverage.
//! Set `RUST_LOG=adatom_process=debug` to see process initialization, or
//! `RUST_LOG=adatom_bench=debug` for every event.

use adatom_bench::{reference_processes, reference_species, rough_surface, KmcDriver};
use adatom_core::Environment;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(true).compact().init();

    println!("=== adatom deposition example ===\n");

    let species = reference_species().unwrap();
    let env = Environment::new(600.0, 50.0).unwrap();
    let processes = reference_processes(&species, env).unwrap();
    for p in &processes {
        println!("  {:<12} rate={:>12.4e} 1/s", p.name(), p.probability());
    }

    let mut lattice = rough_surface(32, 32, 2, 42).unwrap();
    let sites = lattice.sites().len() as f64;
    let mut driver = KmcDriver::new(processes, 7);

    for batch in 1..=4 {
        let stats = driver.run(&mut lattice, 200);
        let coverage: Vec<String> = species
            .adsorbates()
            .map(|(id, label)| format!("{label}={:.3}", lattice.count_species(id) as f64 / sites))
            .collect();
        println!(
            "  batch {batch}: events={:>5}, t={:>10.3e} s, coverage [{}]",
            stats.events,
            stats.time,
            coverage.join(", "),
        );
    }
}
