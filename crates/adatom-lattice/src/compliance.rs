//! Lattice trait compliance test helpers.
//!
//! These functions verify that a backend satisfies the invariants the
//! process core relies on. Reused across backend test modules.

use crate::lattice::Lattice;
use adatom_core::SiteId;
use indexmap::IndexSet;

fn all_sites(lattice: &dyn Lattice) -> impl Iterator<Item = SiteId> {
    (0..lattice.site_count() as u32).map(SiteId)
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(lattice: &dyn Lattice) {
    for site in all_sites(lattice) {
        for nb in lattice.neighbours(site) {
            assert!(
                lattice.neighbours(nb).contains(&site),
                "neighbour symmetry violated: {nb:?} in N({site:?}) but {site:?} not in N({nb:?})"
            );
        }
    }
}

/// Assert that two calls to `neighbours` return the same sequence.
pub fn assert_neighbour_order_deterministic(lattice: &dyn Lattice) {
    for site in all_sites(lattice) {
        assert_eq!(
            lattice.neighbours(site),
            lattice.neighbours(site),
            "neighbour order of {site:?} is non-deterministic"
        );
    }
}

/// Assert that every listed neighbour is addressable.
pub fn assert_neighbours_in_range(lattice: &dyn Lattice) {
    for site in all_sites(lattice) {
        for nb in lattice.neighbours(site) {
            assert!(lattice.get(nb).is_some(), "{nb:?} (neighbour of {site:?}) out of range");
        }
    }
}

/// Assert that `contains` and `get` agree on the site range.
pub fn assert_contains_matches_get(lattice: &dyn Lattice) {
    let count = lattice.site_count() as u32;
    for id in 0..count + 2 {
        let site = SiteId(id);
        assert_eq!(
            lattice.contains(site),
            lattice.get(site).is_some(),
            "contains/get disagree for {site:?}"
        );
    }
}

/// Assert that the set of neighbour-of relations covers every site at
/// least once unless the lattice is a single isolated site.
pub fn assert_connected_coverage(lattice: &dyn Lattice) {
    if lattice.site_count() < 2 {
        return;
    }
    let reached: IndexSet<SiteId> = all_sites(lattice)
        .flat_map(|s| lattice.neighbours(s))
        .collect();
    assert_eq!(
        reached.len(),
        lattice.site_count(),
        "some sites are nobody's neighbour"
    );
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance(lattice: &dyn Lattice) {
    assert_neighbours_symmetric(lattice);
    assert_neighbour_order_deterministic(lattice);
    assert_neighbours_in_range(lattice);
    assert_contains_matches_get(lattice);
    assert_connected_coverage(lattice);
}
