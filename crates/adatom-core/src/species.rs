//! Interned species labels.

use crate::error::ConfigError;
use crate::id::SpeciesId;
use indexmap::IndexSet;

/// Dense interning table for species labels.
///
/// Entry 0 is the surface species: the lattice's own material, whose label
/// marks a site as vacant. Every later entry is an adsorbate. The number of
/// adsorbates decides whether a simulation runs in single- or multi-species
/// mode.
///
/// Film growth of the surface species is not an adsorbate: grown columns
/// stay vacant and carry no bond, so a table holding the surface plus one
/// adsorbate (Si growth alongside H adsorption, say) stays single-species.
///
/// # Examples
///
/// ```
/// use adatom_core::{SpeciesId, SpeciesTable};
///
/// let mut table = SpeciesTable::new("Cu").unwrap();
/// let h = table.intern("H").unwrap();
/// assert_eq!(table.surface(), SpeciesId::SURFACE);
/// assert_eq!(table.label(h), Some("H"));
/// assert!(!table.is_multi_species());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeciesTable {
    labels: IndexSet<String>,
}

impl SpeciesTable {
    /// Create a table whose surface species is `surface`.
    pub fn new(surface: &str) -> Result<Self, ConfigError> {
        let surface = normalize(surface)?;
        let mut labels = IndexSet::new();
        labels.insert(surface.to_string());
        Ok(Self { labels })
    }

    /// Create a table with a surface species and a list of adsorbates.
    pub fn with_adsorbates<'a>(
        surface: &str,
        adsorbates: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ConfigError> {
        let mut table = Self::new(surface)?;
        for label in adsorbates {
            table.intern(label)?;
        }
        Ok(table)
    }

    /// Intern `label`, returning its id. Re-interning returns the existing id.
    pub fn intern(&mut self, label: &str) -> Result<SpeciesId, ConfigError> {
        let label = normalize(label)?;
        if let Some(idx) = self.labels.get_index_of(label) {
            return Ok(SpeciesId(idx as u32));
        }
        let (idx, _) = self.labels.insert_full(label.to_string());
        Ok(SpeciesId(idx as u32))
    }

    /// Look up the id of an already interned label.
    pub fn id(&self, label: &str) -> Option<SpeciesId> {
        self.labels
            .get_index_of(label.trim())
            .map(|idx| SpeciesId(idx as u32))
    }

    /// The label of an interned species.
    pub fn label(&self, id: SpeciesId) -> Option<&str> {
        self.labels.get_index(id.0 as usize).map(String::as_str)
    }

    /// The surface (vacant sentinel) species.
    pub fn surface(&self) -> SpeciesId {
        SpeciesId::SURFACE
    }

    /// Label of the surface species.
    pub fn surface_label(&self) -> &str {
        // Entry 0 always exists: `new` inserts it.
        self.labels.get_index(0).map(String::as_str).unwrap_or_default()
    }

    /// Whether `id` names an interned species.
    pub fn contains(&self, id: SpeciesId) -> bool {
        (id.0 as usize) < self.labels.len()
    }

    /// Whether `id` names an adsorbate (interned and not the surface).
    pub fn is_adsorbate(&self, id: SpeciesId) -> bool {
        !id.is_surface() && self.contains(id)
    }

    /// Total number of species, surface included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always `false`: the surface species is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of adsorbate species.
    pub fn adsorbate_count(&self) -> usize {
        self.labels.len() - 1
    }

    /// Whether more than one adsorbate species can occupy sites in this
    /// simulation. The surface species never counts, even when a process
    /// grows it.
    pub fn is_multi_species(&self) -> bool {
        self.adsorbate_count() > 1
    }

    /// Adsorbates in interning order.
    pub fn adsorbates(&self) -> impl Iterator<Item = (SpeciesId, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .skip(1)
            .map(|(idx, label)| (SpeciesId(idx as u32), label.as_str()))
    }
}

fn normalize(label: &str) -> Result<&str, ConfigError> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::SpeciesUnset);
    }
    Ok(trimmed)
}
