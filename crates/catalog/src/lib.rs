//! # Sector Catalog
//!
//! Immutable reference data for every known sector: identifiers, display names,
//! baseline market figures, typical valuation ratios, descriptions and curated
//! company templates.
//!
//! The catalog is an ordered list with an identifier index, so "all sectors"
//! responses come back in a fixed order rather than hash order. The set of
//! valid sector identifiers is exactly the catalog's key set.

pub mod builtin;
pub mod error;

pub use builtin::{GENERIC_RATIOS, generic_templates, psx_sectors};
pub use error::CatalogError;

use core_types::{CompanyTemplate, SectorBaseline, ValuationRatios};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SectorCatalog {
    sectors: Vec<SectorBaseline>,
    index: HashMap<String, usize>,
    fallback_templates: Vec<CompanyTemplate>,
}

impl SectorCatalog {
    /// The built-in PSX catalog.
    pub fn psx() -> Self {
        // The built-in rows are unique and non-empty, so this cannot fail.
        Self::build(psx_sectors())
    }

    /// Builds a catalog from externally supplied baselines, rejecting empty or
    /// duplicate identifiers.
    pub fn from_baselines(sectors: Vec<SectorBaseline>) -> Result<Self, CatalogError> {
        if sectors.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashMap::with_capacity(sectors.len());
        for (position, sector) in sectors.iter().enumerate() {
            if sector.id.trim().is_empty() {
                return Err(CatalogError::EmptyIdentifier(position));
            }
            if seen.insert(sector.id.as_str(), position).is_some() {
                return Err(CatalogError::DuplicateSector(sector.id.clone()));
            }
        }

        Ok(Self::build(sectors))
    }

    fn build(sectors: Vec<SectorBaseline>) -> Self {
        let index = sectors
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();
        Self {
            sectors,
            index,
            fallback_templates: generic_templates(),
        }
    }

    pub fn baseline(&self, sector_id: &str) -> Result<&SectorBaseline, CatalogError> {
        self.index
            .get(sector_id)
            .map(|&i| &self.sectors[i])
            .ok_or_else(|| CatalogError::NotFound(sector_id.to_string()))
    }

    pub fn contains(&self, sector_id: &str) -> bool {
        self.index.contains_key(sector_id)
    }

    /// Sector identifiers in catalog order.
    pub fn all_sector_ids(&self) -> impl Iterator<Item = &str> {
        self.sectors.iter().map(|s| s.id.as_str())
    }

    pub fn baselines(&self) -> &[SectorBaseline] {
        &self.sectors
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Human-readable description. Unknown sectors get an empty string.
    pub fn description_for(&self, sector_id: &str) -> &str {
        self.baseline(sector_id)
            .map(|s| s.description.as_str())
            .unwrap_or("")
    }

    /// Curated templates for the sector, or the three generic placeholders.
    pub fn company_templates_for(&self, sector_id: &str) -> &[CompanyTemplate] {
        match self.baseline(sector_id) {
            Ok(sector) if !sector.templates.is_empty() => &sector.templates,
            _ => &self.fallback_templates,
        }
    }

    /// Typical ratios for the sector, or [`GENERIC_RATIOS`].
    pub fn ratios_for(&self, sector_id: &str) -> ValuationRatios {
        self.baseline(sector_id)
            .ok()
            .and_then(|s| s.ratios)
            .unwrap_or(GENERIC_RATIOS)
    }
}

impl Default for SectorCatalog {
    fn default() -> Self {
        Self::psx()
    }
}
