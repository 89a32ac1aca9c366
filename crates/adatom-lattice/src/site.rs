//! Per-site state.

use adatom_core::{SiteId, SpeciesId};

/// Species bookkeeping recorded on every site covered by an adsorbate in
/// multi-species simulations.
///
/// `anchor` is the site the adsorption event targeted, so all members of a
/// multi-site footprint point at the same anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bond {
    /// Species bound at this site.
    pub species: SpeciesId,
    /// Target site of the event that placed the adsorbate.
    pub anchor: SiteId,
}

/// State of one lattice site.
///
/// The occupancy label is either [`SpeciesId::SURFACE`] (vacant) or an
/// adsorbate species. `height` is the step level of the column below the
/// site in solid-on-solid models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Site {
    species: SpeciesId,
    height: i32,
    bond: Option<Bond>,
}

impl Site {
    /// A vacant site at the given height.
    pub const fn vacant(height: i32) -> Self {
        Self {
            species: SpeciesId::SURFACE,
            height,
            bond: None,
        }
    }

    /// Current occupancy label.
    #[inline]
    pub fn species(&self) -> SpeciesId {
        self.species
    }

    /// Step level.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Species bookkeeping, if a multi-species event placed it.
    #[inline]
    pub fn bond(&self) -> Option<Bond> {
        self.bond
    }

    /// Whether the label equals the surface sentinel.
    #[inline]
    pub fn is_vacant(&self) -> bool {
        self.species.is_surface()
    }

    /// Vacant with respect to every species: surface label and no bond.
    #[inline]
    pub fn is_free(&self) -> bool {
        self.species.is_surface() && self.bond.is_none()
    }

    /// Set the occupancy label.
    #[inline]
    pub fn set_species(&mut self, species: SpeciesId) {
        self.species = species;
    }

    /// Set the step level.
    #[inline]
    pub fn set_height(&mut self, height: i32) {
        self.height = height;
    }

    /// Record (or clear) species bookkeeping.
    #[inline]
    pub fn set_bond(&mut self, bond: Option<Bond>) {
        self.bond = bond;
    }

    /// Return the site to the vacant state, keeping its height.
    pub fn clear(&mut self) {
        self.species = SpeciesId::SURFACE;
        self.bond = None;
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::vacant(0)
    }
}
