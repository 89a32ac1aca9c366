//! Strongly-typed identifiers for lattice sites and species.

use std::fmt;

/// Identifies a site within a lattice.
///
/// Sites are numbered densely from zero in the lattice's canonical order,
/// so `SiteId(n)` is also the flat storage index of the n-th site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteId(pub u32);

impl SiteId {
    /// The flat storage index of this site.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SiteId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a species interned in a [`SpeciesTable`](crate::SpeciesTable).
///
/// `SpeciesId(0)` is always the surface species of the table, which doubles
/// as the vacant-site sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpeciesId(pub u32);

impl SpeciesId {
    /// The surface (lattice) species. A site carrying this label is vacant.
    pub const SURFACE: SpeciesId = SpeciesId(0);

    /// Whether this is the surface sentinel.
    #[inline]
    pub fn is_surface(self) -> bool {
        self == Self::SURFACE
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SpeciesId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
