use adatom_core::{SiteId, SpeciesId};
use adatom_lattice::{Bond, EdgeBehavior, Lattice, SimpleCubic};

#[test]
fn one_row_lattice_behaves_as_a_line() {
    let absorb = SimpleCubic::new(1, 4, EdgeBehavior::Absorb).unwrap();
    assert_eq!(absorb.neighbours(SiteId(0)).as_slice(), &[SiteId(1)]);
    assert_eq!(
        absorb.neighbours(SiteId(2)).as_slice(),
        &[SiteId(1), SiteId(3)]
    );

    let wrap = SimpleCubic::new(1, 4, EdgeBehavior::Wrap).unwrap();
    // North and south wrap onto the site itself on a single row.
    assert_eq!(
        wrap.neighbours(SiteId(0)).as_slice(),
        &[SiteId(0), SiteId(0), SiteId(3), SiteId(1)]
    );
}

#[test]
fn terrace_height_map_is_row_major() {
    let heights = [0, 0, 1, 1, 0, 0, 1, 1];
    let l = SimpleCubic::from_heights(2, 4, EdgeBehavior::Absorb, &heights).unwrap();
    let observed: Vec<i32> = l.sites().iter().map(|s| s.height()).collect();
    assert_eq!(observed, heights);
    assert!(l.sites().iter().all(|s| s.is_free()));
}

#[test]
fn mutation_through_dyn_lattice() {
    let mut l = SimpleCubic::new(2, 2, EdgeBehavior::Absorb).unwrap();
    {
        let dynl: &mut dyn Lattice = &mut l;
        let site = dynl.get_mut(SiteId(3)).unwrap();
        site.set_species(SpeciesId(2));
        site.set_bond(Some(Bond {
            species: SpeciesId(2),
            anchor: SiteId(3),
        }));
    }
    let s = l.get(SiteId(3)).unwrap();
    assert_eq!(s.species(), SpeciesId(2));
    assert_eq!(s.bond().map(|b| b.anchor), Some(SiteId(3)));
}
