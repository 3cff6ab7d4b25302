//! Aircraft catalog loading.
//!
//! The catalog is an injected, immutable dependency: loaded once at startup
//! from TOML configuration and passed by reference into the fleet search.
//! Entries that fail validation (non-positive range or speed) are logged and
//! excluded so that one defective row cannot take down quote computation for
//! the rest of the fleet.

use super::aircraft::{AircraftProfile, CatalogError};
use crate::api::AircraftId;
use serde::Deserialize;
use std::path::Path;

/// TOML catalog built into the binary, used when no `CATALOG_PATH` override
/// is configured.
const BUILTIN_FLEET: &str = include_str!("../../config/fleet.toml");

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    aircraft: Vec<AircraftProfile>,
}

/// The immutable aircraft catalog.
///
/// Entry order is preserved from the source file; fleet ranking relies on it
/// for stable tie-breaking.
#[derive(Debug, Clone)]
pub struct AircraftCatalog {
    entries: Vec<AircraftProfile>,
}

impl AircraftCatalog {
    /// Parse and validate a catalog from TOML text.
    ///
    /// Defective entries are excluded with a warning. An input that yields
    /// zero valid entries is a configuration error.
    pub fn from_toml_str(input: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(input)?;

        let mut entries = Vec::with_capacity(file.aircraft.len());
        for profile in file.aircraft {
            match profile.validate() {
                Ok(()) => entries.push(profile),
                Err(e) => log::warn!("excluding catalog entry: {}", e),
            }
        }

        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries })
    }

    /// Load a catalog from a TOML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// The fleet built into the binary.
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_FLEET).expect("built-in fleet catalog must be valid")
    }

    /// Construct a catalog from already-validated profiles (tests, fixtures).
    ///
    /// # Errors
    /// Returns the first validation failure, or [`CatalogError::Empty`] for
    /// an empty list.
    pub fn from_profiles(profiles: Vec<AircraftProfile>) -> Result<Self, CatalogError> {
        for profile in &profiles {
            profile.validate()?;
        }
        if profiles.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries: profiles })
    }

    pub fn entries(&self) -> &[AircraftProfile] {
        &self.entries
    }

    pub fn get(&self, id: &AircraftId) -> Option<&AircraftProfile> {
        self.entries.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
