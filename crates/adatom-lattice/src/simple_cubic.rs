//! Solid-on-solid simple cubic surface with 4-connected neighbourhood.

use crate::edge::EdgeBehavior;
use crate::error::LatticeError;
use crate::lattice::{Lattice, Neighbours};
use crate::site::Site;
use adatom_core::{SiteId, SpeciesId};

/// Neighbour offsets in enumeration order: north, south, west, east.
const OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A simple cubic surface stored as a 2D grid of columns.
///
/// Each site has coordinate `(row, col)` with `0 <= row < rows` and
/// `0 <= col < cols`; `SiteId` is the row-major index. Neighbours are the
/// four in-plane directions, listed north, south, west, east. The height of
/// a site is the number of layers grown on its column.
///
/// Boundary handling is controlled by [`EdgeBehavior`]:
/// - **Absorb**: edge sites have fewer neighbours (corners have 2, edges have 3)
/// - **Clamp**: edge sites self-loop on the boundary axis
/// - **Wrap**: periodic boundary (torus topology)
#[derive(Debug, Clone)]
pub struct SimpleCubic {
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
    sites: Vec<Site>,
}

impl SimpleCubic {
    /// Maximum number of sites: ids are `u32`.
    pub const MAX_SITES: u64 = u32::MAX as u64;

    /// Create a flat, fully vacant `rows * cols` surface at height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use adatom_lattice::{EdgeBehavior, Lattice, SimpleCubic};
    ///
    /// let lattice = SimpleCubic::new(16, 16, EdgeBehavior::Wrap).unwrap();
    /// assert_eq!(lattice.site_count(), 256);
    /// ```
    pub fn new(rows: u32, cols: u32, edge: EdgeBehavior) -> Result<Self, LatticeError> {
        let count = Self::checked_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            edge,
            sites: vec![Site::vacant(0); count],
        })
    }

    /// Create a vacant surface with the given row-major height map.
    pub fn from_heights(
        rows: u32,
        cols: u32,
        edge: EdgeBehavior,
        heights: &[i32],
    ) -> Result<Self, LatticeError> {
        let count = Self::checked_count(rows, cols)?;
        if heights.len() != count {
            return Err(LatticeError::HeightMapMismatch {
                expected: count,
                got: heights.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            edge,
            sites: heights.iter().map(|&h| Site::vacant(h)).collect(),
        })
    }

    fn checked_count(rows: u32, cols: u32) -> Result<usize, LatticeError> {
        if rows == 0 || cols == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        let count = u64::from(rows) * u64::from(cols);
        if count > Self::MAX_SITES {
            return Err(LatticeError::TooManySites { rows, cols });
        }
        Ok(count as usize)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Always returns `false` — construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Site id of `(row, col)`, if in bounds.
    pub fn site_at(&self, row: u32, col: u32) -> Option<SiteId> {
        (row < self.rows && col < self.cols).then(|| SiteId(row * self.cols + col))
    }

    /// `(row, col)` of a site, if in range.
    pub fn coord(&self, site: SiteId) -> Option<(u32, u32)> {
        self.contains(site)
            .then(|| (site.0 / self.cols, site.0 % self.cols))
    }

    /// All sites in row-major order.
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Number of sites labelled with `species`.
    pub fn count_species(&self, species: SpeciesId) -> usize {
        self.sites.iter().filter(|s| s.species() == species).count()
    }

    /// Mean height of the surface.
    pub fn mean_height(&self) -> f64 {
        let total: i64 = self.sites.iter().map(|s| i64::from(s.height())).sum();
        total as f64 / self.sites.len() as f64
    }
}

impl Lattice for SimpleCubic {
    fn site_count(&self) -> usize {
        self.sites.len()
    }

    fn get(&self, site: SiteId) -> Option<&Site> {
        self.sites.get(site.index())
    }

    fn get_mut(&mut self, site: SiteId) -> Option<&mut Site> {
        self.sites.get_mut(site.index())
    }

    fn neighbours(&self, site: SiteId) -> Neighbours {
        let mut result = Neighbours::new();
        let Some((r, c)) = self.coord(site) else {
            return result;
        };
        for (dr, dc) in OFFSETS {
            let nr = self.edge.resolve_axis(i64::from(r) + dr, self.rows);
            let nc = self.edge.resolve_axis(i64::from(c) + dc, self.cols);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                result.push(SiteId(nr * self.cols + nc));
            }
        }
        result
    }
}
