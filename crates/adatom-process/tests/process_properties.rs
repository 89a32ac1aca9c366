//! Property tests for the process contract on randomized lattices.

use adatom_core::{Environment, SiteId, SpeciesId, SpeciesTable};
use adatom_lattice::{EdgeBehavior, Lattice, SimpleCubic};
use adatom_process::{Adsorption, InitContext, Process};
use adatom_test_utils::fixtures::{changed_sites, multi_species, single_species};
use proptest::prelude::*;

fn arb_edge() -> impl Strategy<Value = EdgeBehavior> {
    prop_oneof![
        Just(EdgeBehavior::Absorb),
        Just(EdgeBehavior::Clamp),
        Just(EdgeBehavior::Wrap),
    ]
}

/// A lattice with random heights in `0..3` and roughly a third of the
/// sites occupied by species 1.
fn arb_lattice() -> impl Strategy<Value = SimpleCubic> {
    (2u32..6, 2u32..6, arb_edge()).prop_flat_map(|(rows, cols, edge)| {
        let n = (rows * cols) as usize;
        (
            prop::collection::vec(0i32..3, n),
            prop::collection::vec(prop::bool::weighted(0.3), n),
        )
            .prop_map(move |(heights, occupied)| {
                let mut l = SimpleCubic::from_heights(rows, cols, edge, &heights).unwrap();
                for (i, occ) in occupied.into_iter().enumerate() {
                    if occ {
                        l.get_mut(SiteId(i as u32))
                            .unwrap()
                            .set_species(SpeciesId(1));
                    }
                }
                l
            })
    })
}

fn adsorption(table: &SpeciesTable, params: &[&str]) -> Adsorption {
    let mut p = Adsorption::new();
    p.init(params, &InitContext::new(table, Environment::default()))
        .unwrap();
    p
}

proptest! {
    #[test]
    fn rules_is_idempotent_and_pure(
        l in arb_lattice(),
        multi in any::<bool>(),
        sites in 1u32..5,
        idx in 0u32..64,
    ) {
        let table = if multi { multi_species() } else { single_species() };
        let sites_opt = format!("sites={sites}");
        let p = adsorption(&table, &["constant", "1", "species=H", sites_opt.as_str()]);
        let site = SiteId(idx % l.site_count() as u32);
        let before = l.sites().to_vec();
        let first = p.rules(&l, site);
        prop_assert_eq!(first, p.rules(&l, site));
        prop_assert_eq!(before.as_slice(), l.sites());
    }

    #[test]
    fn perform_changes_exactly_the_footprint(
        l in arb_lattice(),
        multi in any::<bool>(),
        sites in 1u32..5,
        fixed in any::<bool>(),
        unconditional in any::<bool>(),
    ) {
        let mut l = l;
        let table = if multi { multi_species() } else { single_species() };
        let h = table.id("H").unwrap();
        let sites_opt = format!("sites={sites}");
        let policy = if fixed { "footprint=fixed" } else { "footprint=first-fit" };
        let mut params = vec!["constant", "1", "species=H", sites_opt.as_str(), policy];
        if unconditional {
            params.push("unconditional");
        }
        let p = adsorption(&table, &params);

        // Relabelling a target that already holds H is not a change.
        let candidates: Vec<SiteId> = (0..l.site_count() as u32)
            .map(SiteId)
            .filter(|&s| p.rules(&l, s) && l.get(s).unwrap().species() != h)
            .collect();
        if let Some(&site) = candidates.first() {
            let before = l.sites().to_vec();
            p.perform(&mut l, site);
            let changed = changed_sites(&before, l.sites());
            prop_assert_eq!(changed.len(), sites as usize);
            prop_assert!(changed.contains(&site));
            for id in changed {
                let b = before[id.index()];
                prop_assert_eq!(l.get(id).unwrap().height(), b.height());
                prop_assert_eq!(l.get(id).unwrap().height(), before[site.index()].height());
            }
            if !unconditional {
                prop_assert!(!p.rules(&l, site));
            }
        }
    }

    #[test]
    fn probability_is_deterministic_and_non_negative(
        v0 in 1.0e6f64..1.0e14,
        e in 0.0f64..2.0,
        em in 0.0f64..2.0,
        n in 0.0f64..3.0,
        t in 200.0f64..1500.0,
    ) {
        let table = single_species();
        let env = Environment::new(t, 0.0).unwrap();
        let (v0, e, em, n) = (v0.to_string(), e.to_string(), em.to_string(), n.to_string());
        let params = ["arrhenius", v0.as_str(), e.as_str(), em.as_str(), n.as_str(), "species=H"];
        let mut a = Adsorption::new();
        let mut b = Adsorption::new();
        let ctx = InitContext::new(&table, env);
        match (a.init(&params, &ctx), b.init(&params, &ctx)) {
            (Ok(()), Ok(())) => {
                prop_assert!(a.probability() >= 0.0);
                prop_assert!(a.probability().is_finite());
                prop_assert_eq!(a.probability().to_bits(), b.probability().to_bits());
                prop_assert_eq!(a.probability().to_bits(), a.probability().to_bits());
            }
            // Overflowing Boltzmann factors are rejected, never cached.
            (Err(_), Err(_)) => prop_assert_eq!(a.probability(), 0.0),
            _ => prop_assert!(false, "identical configurations diverged"),
        }
    }
}
