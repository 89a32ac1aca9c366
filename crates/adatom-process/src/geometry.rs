//! Neighbourhood, footprint, height and step helpers shared by rules and
//! executions.
//!
//! Every function here is a pure read of the lattice. In particular
//! [`footprint`] is the single source of truth for which sites a
//! multi-site adsorbate covers: the rule that validates a footprint and the
//! execution that fills it both call it with the same arguments, so they
//! cannot disagree.

use crate::config::{FootprintPolicy, FootprintShape};
use adatom_core::SiteId;
use adatom_lattice::{Lattice, Site};
use smallvec::SmallVec;

/// Sites covered by one adsorbate, target first, then neighbours in
/// lattice neighbour order.
pub type Footprint = SmallVec<[SiteId; 4]>;

/// What counts as an empty site for a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Vacancy {
    /// Every site qualifies.
    Any,
    /// The occupancy label is the surface sentinel.
    Label,
    /// Vacant with respect to every species: surface label and no
    /// recorded bond.
    Free,
}

impl Vacancy {
    /// Whether `site` is empty under this definition.
    #[inline]
    pub fn admits(self, site: &Site) -> bool {
        match self {
            Self::Any => true,
            Self::Label => site.is_vacant(),
            Self::Free => site.is_free(),
        }
    }

    /// Definition applied to the footprint members other than the target.
    ///
    /// An unconditional target may be taken over, but its neighbours must
    /// still be free of every other adsorbate.
    #[inline]
    pub fn for_members(self) -> Self {
        match self {
            Self::Any => Self::Free,
            other => other,
        }
    }
}

/// Height comparison used by the step-membership tests.
///
/// A site is in a *lower step* when some neighbour stands at least
/// `min_height_difference` layers above it (the site sits at the foot of an
/// up-step), and in a *higher step* when it stands at least
/// `min_height_difference` layers above some neighbour (the site sits on
/// the edge of a down-step).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepPolicy {
    /// Minimum height difference that counts as a step. Default: 1.
    pub min_height_difference: i32,
}

impl StepPolicy {
    /// Smallest accepted `min_height_difference`.
    pub const MIN_HEIGHT_DIFFERENCE: i32 = 1;

    /// Whether the policy classifies anything: the threshold must be at
    /// least [`Self::MIN_HEIGHT_DIFFERENCE`].
    pub fn is_valid(&self) -> bool {
        self.min_height_difference >= Self::MIN_HEIGHT_DIFFERENCE
    }

    fn threshold(&self) -> i64 {
        i64::from(self.min_height_difference)
    }
}

impl Default for StepPolicy {
    fn default() -> Self {
        Self {
            min_height_difference: 1,
        }
    }
}

/// Number of neighbours of `site` satisfying `pred`.
///
/// Self-loops (clamped edges) are not counted. Returns 0 for a site
/// outside the lattice.
pub fn count_neighbours(
    lattice: &dyn Lattice,
    site: SiteId,
    pred: impl Fn(&Site) -> bool,
) -> usize {
    lattice
        .neighbours(site)
        .into_iter()
        .filter(|&nb| nb != site)
        .filter_map(|nb| lattice.get(nb))
        .filter(|s| pred(*s))
        .count()
}

/// Coordination of `site`: neighbours whose column is at least as high.
pub fn coordination(lattice: &dyn Lattice, site: SiteId) -> usize {
    let Some(h) = lattice.get(site).map(Site::height) else {
        return 0;
    };
    count_neighbours(lattice, site, |s| s.height() >= h)
}

/// Neighbours of `site` that are empty under `vacancy`.
pub fn vacant_neighbour_count(lattice: &dyn Lattice, site: SiteId, vacancy: Vacancy) -> usize {
    count_neighbours(lattice, site, |s| vacancy.admits(s))
}

/// Whether at least `n` neighbours of `site` are empty under `vacancy`.
pub fn has_vacant_neighbours(
    lattice: &dyn Lattice,
    site: SiteId,
    vacancy: Vacancy,
    n: usize,
) -> bool {
    n == 0 || vacant_neighbour_count(lattice, site, vacancy) >= n
}

/// Whether every site in `sites` exists and all share one height.
/// An empty slice is trivially level.
pub fn has_same_height(lattice: &dyn Lattice, sites: &[SiteId]) -> bool {
    let mut heights = sites.iter().map(|&s| lattice.get(s).map(Site::height));
    let Some(first) = heights.next() else {
        return true;
    };
    let Some(first) = first else {
        return false;
    };
    heights.all(|h| h == Some(first))
}

/// Enumerate the footprint an adsorbate of `shape` would cover at `site`.
///
/// The target must be empty under `vacancy`, the other members under
/// [`Vacancy::for_members`]. Neighbours are visited in
/// lattice order, skipping self-loops and repeats:
///
/// - [`FootprintPolicy::Fixed`]: the first `size - 1` distinct neighbours
///   form the footprint; it is rejected unless all of them are empty and
///   level with the target.
/// - [`FootprintPolicy::FirstFit`]: the first `size - 1` distinct
///   neighbours that are empty and level with the target are taken.
///
/// Returns `None` when fewer qualifying neighbours exist than the
/// footprint requires; partial footprints are never returned.
pub fn footprint(
    lattice: &dyn Lattice,
    site: SiteId,
    shape: FootprintShape,
    vacancy: Vacancy,
) -> Option<Footprint> {
    let target = lattice.get(site)?;
    if !vacancy.admits(target) {
        return None;
    }
    let need = shape.size() as usize;
    let mut sites = Footprint::new();
    sites.push(site);
    if need == 1 {
        return Some(sites);
    }

    let height = target.height();
    let member = vacancy.for_members();
    for nb in lattice.neighbours(site) {
        if sites.len() == need {
            break;
        }
        if sites.contains(&nb) {
            continue;
        }
        match shape.policy() {
            FootprintPolicy::Fixed => sites.push(nb),
            FootprintPolicy::FirstFit => {
                let fits = lattice
                    .get(nb)
                    .is_some_and(|s| member.admits(s) && s.height() == height);
                if fits {
                    sites.push(nb);
                }
            }
        }
    }

    if sites.len() < need {
        return None;
    }
    let all_empty = sites[1..]
        .iter()
        .all(|&s| lattice.get(s).is_some_and(|s| member.admits(s)));
    (all_empty && has_same_height(lattice, &sites)).then_some(sites)
}

/// Whether some neighbour stands at least `policy.min_height_difference`
/// above `site`.
pub fn is_in_lower_step(lattice: &dyn Lattice, site: SiteId, policy: StepPolicy) -> bool {
    let Some(h) = lattice.get(site).map(Site::height) else {
        return false;
    };
    count_neighbours(lattice, site, |s| rise(h, s.height()) >= policy.threshold()) > 0
}

/// Whether `site` stands at least `policy.min_height_difference` above
/// some neighbour.
pub fn is_in_higher_step(lattice: &dyn Lattice, site: SiteId, policy: StepPolicy) -> bool {
    let Some(h) = lattice.get(site).map(Site::height) else {
        return false;
    };
    count_neighbours(lattice, site, |s| rise(s.height(), h) >= policy.threshold()) > 0
}

/// Height of `to` above `from`, widened so extreme columns cannot overflow.
#[inline]
fn rise(from: i32, to: i32) -> i64 {
    i64::from(to) - i64::from(from)
}
