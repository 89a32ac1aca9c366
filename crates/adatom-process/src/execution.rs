//! Execution strategies: the lattice mutations performed when a process
//! fires.

use adatom_core::{SiteId, SpeciesId};
use adatom_lattice::{Bond, Lattice};

/// How an adsorbed particle is incorporated into the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Incorporation {
    /// The particle stays on top of the surface and labels the sites it
    /// covers.
    #[default]
    Adlayer,
    /// The particle is the surface's own species: it becomes part of the
    /// film, raising each covered column by one layer and leaving the new
    /// top vacant.
    Growth,
}

/// State mutation applied to a validated footprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExecutionKind {
    /// Label the target site. Single-species simulations (PVD).
    SingleSpeciesSingleSite,
    /// Label every footprint site. Single-species simulations.
    SingleSpeciesMultiSite,
    /// Label the target site and record a [`Bond`]. Multi-species
    /// simulations (CVD, ALD).
    MultiSpeciesSingleSite,
    /// Label every footprint site and record a [`Bond`] anchored at the
    /// target on each of them.
    MultiSpeciesMultiSite,
}

impl ExecutionKind {
    /// Whether this variant records species bookkeeping.
    pub fn records_bonds(self) -> bool {
        matches!(
            self,
            Self::MultiSpeciesSingleSite | Self::MultiSpeciesMultiSite
        )
    }

    /// Whether this variant covers more than the target site.
    pub fn is_multi_site(self) -> bool {
        matches!(
            self,
            Self::SingleSpeciesMultiSite | Self::MultiSpeciesMultiSite
        )
    }

    /// Mutate the sites of `footprint`; `footprint[0]` is the target.
    ///
    /// Touches no site outside `footprint`. Single-site variants touch
    /// only the target.
    pub fn apply(
        self,
        lattice: &mut dyn Lattice,
        footprint: &[SiteId],
        species: SpeciesId,
        incorporation: Incorporation,
    ) {
        let Some(&anchor) = footprint.first() else {
            return;
        };
        let covered = if self.is_multi_site() {
            footprint
        } else {
            debug_assert_eq!(footprint.len(), 1, "single-site execution on a wider footprint");
            &footprint[..1]
        };
        let bond = self.records_bonds().then_some(Bond { species, anchor });
        for &id in covered {
            let Some(site) = lattice.get_mut(id) else {
                continue;
            };
            match incorporation {
                Incorporation::Adlayer => {
                    site.set_species(species);
                    if bond.is_some() {
                        site.set_bond(bond);
                    }
                }
                Incorporation::Growth => {
                    site.set_height(site.height().saturating_add(1));
                    site.clear();
                }
            }
        }
    }
}
