//! Applicability-rule strategies.

use crate::config::FootprintShape;
use crate::geometry::{self, Vacancy};
use adatom_core::SiteId;
use adatom_lattice::Lattice;

/// Predicate deciding whether a process may execute at a site.
///
/// Every variant is a pure read of the lattice. Multi-site footprints are
/// enumerated with [`geometry::footprint`], the same function executions
/// use to place the adsorbate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// No occupancy precondition on the target. A multi-site footprint
    /// must still exist: level, with members free of other adsorbates.
    Unconditional,
    /// The site (every footprint site, for multi-site species) carries the
    /// surface label; footprints must be level.
    Basic,
    /// The site is vacant with respect to every species.
    MultiSpeciesSingleSite,
    /// A level footprint of sites vacant with respect to every species
    /// exists around the site.
    MultiSpeciesFootprint,
}

impl RuleKind {
    /// Vacancy definition this rule applies to footprint members.
    pub fn vacancy(self) -> Vacancy {
        match self {
            Self::Unconditional => Vacancy::Any,
            Self::Basic => Vacancy::Label,
            Self::MultiSpeciesSingleSite | Self::MultiSpeciesFootprint => Vacancy::Free,
        }
    }

    /// Evaluate the rule. Sites outside the lattice are never applicable.
    pub fn evaluate(self, lattice: &dyn Lattice, site: SiteId, shape: FootprintShape) -> bool {
        let Some(target) = lattice.get(site) else {
            return false;
        };
        match self {
            Self::Unconditional if !shape.is_multi_site() => true,
            Self::Unconditional => {
                geometry::footprint(lattice, site, shape, self.vacancy()).is_some()
            }
            Self::MultiSpeciesSingleSite => target.is_free(),
            Self::Basic if !shape.is_multi_site() => target.is_vacant(),
            Self::Basic | Self::MultiSpeciesFootprint => {
                geometry::has_vacant_neighbours(
                    lattice,
                    site,
                    self.vacancy(),
                    shape.size() as usize - 1,
                ) && geometry::footprint(lattice, site, shape, self.vacancy()).is_some()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FootprintPolicy;
    use adatom_core::SpeciesId;
    use adatom_lattice::{Bond, EdgeBehavior, SimpleCubic};

    fn single() -> FootprintShape {
        FootprintShape::new(1, FootprintPolicy::FirstFit).unwrap()
    }

    fn pair() -> FootprintShape {
        FootprintShape::new(2, FootprintPolicy::FirstFit).unwrap()
    }

    fn bonded(l: &mut SimpleCubic, site: SiteId) {
        l.get_mut(site).unwrap().set_bond(Some(Bond {
            species: SpeciesId(2),
            anchor: site,
        }));
    }

    #[test]
    fn unconditional_accepts_occupied_sites() {
        let mut l = SimpleCubic::new(2, 2, EdgeBehavior::Absorb).unwrap();
        l.get_mut(SiteId(0)).unwrap().set_species(SpeciesId(1));
        assert!(RuleKind::Unconditional.evaluate(&l, SiteId(0), single()));
        assert!(!RuleKind::Unconditional.evaluate(&l, SiteId(4), single()));
    }

    #[test]
    fn unconditional_multi_site_needs_footprint() {
        let mut l = SimpleCubic::from_heights(1, 3, EdgeBehavior::Absorb, &[0, 0, 2]).unwrap();
        l.get_mut(SiteId(0)).unwrap().set_species(SpeciesId(1));
        // Occupied target, free level neighbour.
        assert!(RuleKind::Unconditional.evaluate(&l, SiteId(0), pair()));
        // The only level neighbour is held by another adsorbate.
        assert!(!RuleKind::Unconditional.evaluate(&l, SiteId(1), pair()));
        // No level neighbour at all.
        assert!(!RuleKind::Unconditional.evaluate(&l, SiteId(2), pair()));
    }

    #[test]
    fn basic_checks_label() {
        let mut l = SimpleCubic::new(2, 2, EdgeBehavior::Absorb).unwrap();
        assert!(RuleKind::Basic.evaluate(&l, SiteId(0), single()));
        l.get_mut(SiteId(0)).unwrap().set_species(SpeciesId(1));
        assert!(!RuleKind::Basic.evaluate(&l, SiteId(0), single()));
    }

    #[test]
    fn basic_ignores_bonds_but_multi_species_does_not() {
        let mut l = SimpleCubic::new(2, 2, EdgeBehavior::Absorb).unwrap();
        bonded(&mut l, SiteId(1));
        assert!(RuleKind::Basic.evaluate(&l, SiteId(1), single()));
        assert!(!RuleKind::MultiSpeciesSingleSite.evaluate(&l, SiteId(1), single()));
        assert!(RuleKind::MultiSpeciesSingleSite.evaluate(&l, SiteId(0), single()));
    }

    #[test]
    fn multi_site_needs_enough_vacant_neighbours() {
        let mut l = SimpleCubic::new(1, 2, EdgeBehavior::Absorb).unwrap();
        assert!(RuleKind::MultiSpeciesFootprint.evaluate(&l, SiteId(0), pair()));
        bonded(&mut l, SiteId(1));
        assert!(!RuleKind::MultiSpeciesFootprint.evaluate(&l, SiteId(0), pair()));
        // The label-only rule does not see the bond.
        assert!(RuleKind::Basic.evaluate(&l, SiteId(0), pair()));
    }

    #[test]
    fn multi_site_needs_level_footprint() {
        let l = SimpleCubic::from_heights(1, 2, EdgeBehavior::Absorb, &[3, 4]).unwrap();
        assert!(!RuleKind::MultiSpeciesFootprint.evaluate(&l, SiteId(0), pair()));
        assert!(!RuleKind::Basic.evaluate(&l, SiteId(0), pair()));
    }
}
