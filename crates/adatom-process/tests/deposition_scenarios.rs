//! End-to-end process scenarios: registry creation, token configuration,
//! and the rules / probability / perform cycle on real lattices.

use adatom_core::constants::BOLTZMANN_EV;
use adatom_core::{Environment, SiteId, SpeciesId, SpeciesTable};
use adatom_lattice::{Bond, EdgeBehavior, Lattice, SimpleCubic};
use adatom_process::{Adsorption, InitContext, Process, ProcessRegistry};
use adatom_test_utils::fixtures::{
    changed_sites, flat_lattice, multi_species, single_species, terrace_lattice,
};
use adatom_test_utils::RecordingLattice;

fn create(table: &SpeciesTable, env: Environment, params: &[&str]) -> Box<dyn Process> {
    let registry = ProcessRegistry::with_builtin();
    let mut process = registry.create(Adsorption::NAME).unwrap();
    process
        .init(params, &InitContext::new(table, env))
        .unwrap();
    process
}

#[test]
fn constant_rate_ignores_lattice_state() {
    let table = single_species();
    let p = create(&table, Environment::default(), &["constant", "2.5", "species=H"]);
    assert_eq!(p.probability(), 2.5);

    let mut l = flat_lattice(4, 4);
    for i in 0..16 {
        let site = SiteId(i);
        if p.rules(&l, site) {
            p.perform(&mut l, site);
        }
    }
    assert_eq!(l.count_species(SpeciesId(1)), 16);
    assert_eq!(p.probability(), 2.5);
}

#[test]
fn arrhenius_rate_at_room_temperature() {
    let table = single_species();
    let env = Environment::new(300.0, 0.0).unwrap();
    let p = create(&table, env, &["arrhenius", "1e13", "1.2", "0.3", "1", "species=H"]);

    let kt = BOLTZMANN_EV * 300.0;
    let expected = 1e13 * ((1.2 - 0.3) / kt).exp() * (-1.0 * 1.2 / kt).exp();
    let got = p.probability();
    assert!((got - expected).abs() <= 1e-9 * expected, "{got} vs {expected}");
}

#[test]
fn basic_rule_tracks_occupancy() {
    let table = single_species();
    let p = create(&table, Environment::default(), &["constant", "1", "species=H"]);
    let mut l = flat_lattice(3, 3);

    assert!(p.rules(&l, SiteId(4)));
    l.get_mut(SiteId(4)).unwrap().set_species(SpeciesId(1));
    assert!(!p.rules(&l, SiteId(4)));
    assert!(!p.rules(&l, SiteId(9)));
}

#[test]
fn multi_species_footprint_needs_free_level_neighbour() {
    let table = multi_species();
    let o2 = table.id("O2").unwrap();
    let p = create(
        &table,
        Environment::default(),
        &["constant", "1", "species=O2", "sites=2"],
    );
    let mut l = SimpleCubic::new(1, 2, EdgeBehavior::Absorb).unwrap();

    // The only neighbour is taken by H.
    let neighbour = l.get_mut(SiteId(1)).unwrap();
    neighbour.set_species(SpeciesId(1));
    neighbour.set_bond(Some(Bond {
        species: SpeciesId(1),
        anchor: SiteId(1),
    }));
    assert!(!p.rules(&l, SiteId(0)));

    l.get_mut(SiteId(1)).unwrap().clear();
    assert!(p.rules(&l, SiteId(0)));

    let before = l.sites().to_vec();
    p.perform(&mut l, SiteId(0));
    assert_eq!(changed_sites(&before, l.sites()), vec![SiteId(0), SiteId(1)]);
    for id in [SiteId(0), SiteId(1)] {
        let site = l.get(id).unwrap();
        assert_eq!(site.species(), o2);
        assert_eq!(
            site.bond(),
            Some(Bond {
                species: o2,
                anchor: SiteId(0)
            })
        );
    }
    assert!(!p.rules(&l, SiteId(0)));
    assert!(!p.rules(&l, SiteId(1)));
}

#[test]
fn multi_site_footprint_is_blocked_across_a_step() {
    let table = single_species();
    let p = create(
        &table,
        Environment::default(),
        &["constant", "1", "species=H", "sites=2", "footprint=fixed"],
    );
    // 1x4 terrace, heights 0 0 1 1: site 1 has W=0 (level) and E=2 (one up).
    let l = terrace_lattice(1, 4);
    assert!(p.rules(&l, SiteId(1)));

    let wide = create(
        &table,
        Environment::default(),
        &["constant", "1", "species=H", "sites=3", "footprint=fixed"],
    );
    assert!(!wide.rules(&l, SiteId(1)));
    let first_fit = create(
        &table,
        Environment::default(),
        &["constant", "1", "species=H", "sites=3"],
    );
    // Only one level neighbour is available either way.
    assert!(!first_fit.rules(&l, SiteId(1)));
}

#[test]
fn perform_touches_only_the_footprint() {
    let table = single_species();
    let p = create(
        &table,
        Environment::default(),
        &["constant", "1", "species=H", "sites=3"],
    );
    let mut l = RecordingLattice::new(flat_lattice(5, 5));
    assert!(p.rules(&l, SiteId(12)));
    p.perform(&mut l, SiteId(12));
    // Centre of a 5x5 grid: N=7, S=17.
    assert_eq!(l.touched(), &[SiteId(12), SiteId(7), SiteId(17)]);
    assert_eq!(l.inner().count_species(SpeciesId(1)), 3);
}

#[test]
fn film_growth_raises_columns() {
    let table = SpeciesTable::new("Si").unwrap();
    let p = create(&table, Environment::default(), &["constant", "1", "species=Si"]);
    let mut l = flat_lattice(3, 3);

    for _ in 0..3 {
        assert!(p.rules(&l, SiteId(0)));
        p.perform(&mut l, SiteId(0));
    }
    assert_eq!(l.get(SiteId(0)).unwrap().height(), 3);
    assert!(l.sites().iter().all(|s| s.is_free()));
    assert!((l.mean_height() - 3.0 / 9.0).abs() < 1e-12);
}

#[test]
fn scheduler_parks_and_fires_target() {
    let table = single_species();
    let mut p = create(&table, Environment::default(), &["constant", "1", "species=H"]);
    let mut l = flat_lattice(2, 2);
    p.set_target_site(SiteId(2));
    assert!(p.rules(&l, p.target_site().unwrap()));
    p.perform_target(&mut l);
    assert_eq!(l.get(SiteId(2)).unwrap().species(), SpeciesId(1));
}

#[test]
fn environment_change_rescales_sticking_rate() {
    let table = single_species();
    let cold = Environment::new(300.0, 10.0).unwrap();
    let mut p = create(
        &table,
        cold,
        &["simple", "0.5", "1", "1e19", "0.002", "species=H"],
    );
    let r_cold = p.probability();
    assert!(r_cold > 0.0);

    // Flux scales as P / sqrt(T): doubling P and quadrupling T cancel out.
    p.update_environment(&Environment::new(1200.0, 20.0).unwrap())
        .unwrap();
    let ratio = p.probability() / r_cold;
    assert!((ratio - 1.0).abs() < 1e-9, "{ratio}");

    p.update_environment(&Environment::new(1200.0, 40.0).unwrap())
        .unwrap();
    assert!((p.probability() / r_cold - 2.0).abs() < 1e-9);
}
