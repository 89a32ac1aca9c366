//! Reusable lattice and species fixtures.
//!
//! - [`flat_lattice`]: every column at height 0, periodic edges.
//! - [`terrace_lattice`]: two terraces split by a single up-step.
//! - [`single_species`] / [`multi_species`]: species tables for PVD-like
//!   and CVD-like simulations.

use adatom_core::{SiteId, SpeciesTable};
use adatom_lattice::{EdgeBehavior, Site, SimpleCubic};

/// Surface species used by every fixture table.
pub const SURFACE: &str = "Si";

/// A flat, periodic `rows × cols` lattice.
pub fn flat_lattice(rows: u32, cols: u32) -> SimpleCubic {
    SimpleCubic::new(rows, cols, EdgeBehavior::Wrap).expect("fixture dimensions are valid")
}

/// A `rows × cols` lattice with absorbing edges whose left half sits at
/// height 0 and whose right half sits at height 1.
///
/// The step runs between columns `cols / 2 - 1` and `cols / 2`.
pub fn terrace_lattice(rows: u32, cols: u32) -> SimpleCubic {
    let heights: Vec<i32> = (0..rows)
        .flat_map(|_| (0..cols).map(move |c| i32::from(c >= cols / 2)))
        .collect();
    SimpleCubic::from_heights(rows, cols, EdgeBehavior::Absorb, &heights)
        .expect("fixture dimensions are valid")
}

/// One adsorbate (`H`) on the surface.
pub fn single_species() -> SpeciesTable {
    SpeciesTable::with_adsorbates(SURFACE, ["H"]).expect("fixture labels are valid")
}

/// Two adsorbates (`H`, `O2`) on the surface.
pub fn multi_species() -> SpeciesTable {
    SpeciesTable::with_adsorbates(SURFACE, ["H", "O2"]).expect("fixture labels are valid")
}

/// Sites whose state differs between two snapshots of the same lattice.
pub fn changed_sites(before: &[Site], after: &[Site]) -> Vec<SiteId> {
    assert_eq!(before.len(), after.len(), "snapshots of different lattices");
    before
        .iter()
        .zip(after)
        .enumerate()
        .filter(|(_, (b, a))| b != a)
        .map(|(i, _)| SiteId(i as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adatom_core::SpeciesId;
    use adatom_lattice::Lattice;

    #[test]
    fn terrace_has_one_step() {
        let l = terrace_lattice(2, 4);
        let heights: Vec<i32> = l.sites().iter().map(Site::height).collect();
        assert_eq!(heights, vec![0, 0, 1, 1, 0, 0, 1, 1]);
    }

    #[test]
    fn species_tables() {
        assert!(!single_species().is_multi_species());
        assert!(multi_species().is_multi_species());
        assert_eq!(multi_species().id("O2"), Some(SpeciesId(2)));
    }

    #[test]
    fn changed_sites_reports_diffs() {
        let mut l = flat_lattice(2, 2);
        let before = l.sites().to_vec();
        l.get_mut(SiteId(1)).unwrap().set_height(4);
        assert_eq!(changed_sites(&before, l.sites()), vec![SiteId(1)]);
    }
}
