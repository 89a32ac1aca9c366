//! Lattice edge (boundary) behavior.

/// How a lattice backend handles neighbours at its edges.
///
/// # Examples
///
/// ```
/// use adatom_core::SiteId;
/// use adatom_lattice::{EdgeBehavior, Lattice, SimpleCubic};
///
/// // Absorb: corner has 2 neighbours, interior has 4.
/// let absorb = SimpleCubic::new(4, 4, EdgeBehavior::Absorb).unwrap();
/// assert_eq!(absorb.neighbours(SiteId(0)).len(), 2);
/// assert_eq!(absorb.neighbours(SiteId(5)).len(), 4);
///
/// // Wrap: every site has exactly 4 neighbours (torus).
/// let wrap = SimpleCubic::new(4, 4, EdgeBehavior::Wrap).unwrap();
/// assert_eq!(wrap.neighbours(SiteId(0)).len(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour maps to the boundary site (self-loop).
    Clamp,
    /// Out-of-bounds neighbour wraps to the opposite side (periodic).
    Wrap,
    /// Out-of-bounds neighbour is omitted (fewer neighbours at edges).
    Absorb,
}

impl EdgeBehavior {
    /// Resolve a single axis value. Returns `None` for Absorb out-of-bounds.
    pub(crate) fn resolve_axis(self, val: i64, len: u32) -> Option<u32> {
        let n = i64::from(len);
        if (0..n).contains(&val) {
            return Some(val as u32);
        }
        match self {
            Self::Absorb => None,
            Self::Clamp => Some(val.clamp(0, n - 1) as u32),
            Self::Wrap => Some(val.rem_euclid(n) as u32),
        }
    }
}
