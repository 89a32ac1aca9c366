//! Test utilities for adatom development.
//!
//! Provides lattice and species-table fixtures ([`fixtures`]) and a
//! [`RecordingLattice`] that logs every mutable site access, so tests can
//! assert that a process touched exactly the sites it should.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use adatom_core::SiteId;
use adatom_lattice::{Lattice, Neighbours, Site};

/// Wraps a lattice and records every site handed out through
/// [`Lattice::get_mut`].
///
/// Reads pass straight through. Inspect the log with
/// [`touched`](RecordingLattice::touched).
pub struct RecordingLattice<L: Lattice> {
    inner: L,
    touched: Vec<SiteId>,
}

impl<L: Lattice> RecordingLattice<L> {
    pub fn new(inner: L) -> Self {
        Self {
            inner,
            touched: Vec::new(),
        }
    }

    /// Sites accessed mutably, in access order, repeats included.
    pub fn touched(&self) -> &[SiteId] {
        &self.touched
    }

    /// Forget recorded accesses.
    pub fn reset(&mut self) {
        self.touched.clear();
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    pub fn into_inner(self) -> L {
        self.inner
    }
}

impl<L: Lattice> Lattice for RecordingLattice<L> {
    fn site_count(&self) -> usize {
        self.inner.site_count()
    }

    fn get(&self, site: SiteId) -> Option<&Site> {
        self.inner.get(site)
    }

    fn get_mut(&mut self, site: SiteId) -> Option<&mut Site> {
        self.touched.push(site);
        self.inner.get_mut(site)
    }

    fn neighbours(&self, site: SiteId) -> Neighbours {
        self.inner.neighbours(site)
    }
}
