//! The core `Lattice` trait and `dyn Lattice` downcast support.

use crate::site::Site;
use adatom_core::SiteId;
use smallvec::SmallVec;
use std::any::Any;

/// Neighbour list of a site. Inline storage covers every backend with a
/// coordination of eight or less.
pub type Neighbours = SmallVec<[SiteId; 8]>;

/// The lattice as seen by the process core.
///
/// Processes read occupancy, species, height and adjacency through this
/// trait and write occupancy, species, height and bond state on `perform`.
/// They never own the lattice.
///
/// # Object Safety
///
/// Designed for use as `dyn Lattice`. Use
/// `downcast_ref` for opt-in specialization on concrete backends.
///
/// # Thread Safety
///
/// `Send + Sync` so a lattice can be handed between driver threads. The
/// process core itself never mutates a lattice concurrently.
pub trait Lattice: Any + Send + Sync + 'static {
    /// Total number of sites.
    fn site_count(&self) -> usize;

    /// Whether `site` addresses a site of this lattice.
    fn contains(&self, site: SiteId) -> bool {
        site.index() < self.site_count()
    }

    /// Read a site. `None` when out of range.
    fn get(&self, site: SiteId) -> Option<&Site>;

    /// Mutable access to a site. `None` when out of range.
    fn get_mut(&mut self, site: SiteId) -> Option<&mut Site>;

    /// Enumerate the neighbours of a site.
    ///
    /// Returns ids in a deterministic, backend-defined order. Footprint
    /// enumeration depends on this order being stable across calls.
    /// Backends with clamped edges may list the site itself.
    fn neighbours(&self, site: SiteId) -> Neighbours;
}

impl dyn Lattice {
    /// Attempt to downcast a trait object to a concrete backend.
    pub fn downcast_ref<T: Lattice>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
