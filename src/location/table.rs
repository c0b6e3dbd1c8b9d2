use crate::{Error, ErrorContext, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// What the user asked for: a city name plus optional explicit coordinates.
///
/// Explicit coordinates default to `0.0`; a zero value counts as "not given".
#[derive(Debug, Clone, PartialEq)]
pub struct LocationQuery {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationQuery {
    pub fn city(name: impl Into<String>) -> Self {
        Self {
            city: name.into(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    fn explicit(&self) -> Option<Coordinates> {
        // (0, 0) and half-zero pairs are indistinguishable from "flag not given".
        if self.latitude != 0.0 && self.longitude != 0.0 {
            Some(Coordinates::new(self.latitude, self.longitude))
        } else {
            None
        }
    }
}

/// Entry shapes accepted in a city file: `[lat, lon]` or `{latitude, longitude}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CityEntry {
    Pair([f64; 2]),
    Named(Coordinates),
}

impl From<CityEntry> for Coordinates {
    fn from(entry: CityEntry) -> Self {
        match entry {
            CityEntry::Pair([lat, lon]) => Coordinates::new(lat, lon),
            CityEntry::Named(c) => c,
        }
    }
}

/// Known cities, keyed by lowercase name.
#[derive(Debug, Clone, PartialEq)]
pub struct CityTable {
    cities: HashMap<String, Coordinates>,
}

impl CityTable {
    /// An empty table. Resolution then relies on explicit coordinates only.
    pub fn empty() -> Self {
        Self {
            cities: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, coords: Coordinates) {
        self.cities.insert(name.to_lowercase(), coords);
    }

    pub fn with_city(mut self, name: &str, coords: Coordinates) -> Self {
        self.insert(name, coords);
        self
    }

    pub fn get(&self, name: &str) -> Option<Coordinates> {
        self.cities.get(&name.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Overlay `other` on top of this table; its entries win on conflict.
    pub fn merge(&mut self, other: CityTable) {
        self.cities.extend(other.cities);
    }

    /// Parse a YAML mapping of city name to coordinates.
    ///
    /// ```yaml
    /// prague: [50.0874654, 14.4212503]
    /// quito: { latitude: -0.2299, longitude: -78.5249 }
    /// ```
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let raw: HashMap<String, CityEntry> = serde_yaml::from_str(text).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid city table: {}", e),
                ErrorContext::new().with_source("location"),
            )
        })?;
        let mut table = Self::empty();
        for (name, entry) in raw {
            table.insert(&name, entry.into());
        }
        Ok(table)
    }

    /// Read a YAML city table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with_context(
                format!("Failed to read city table: {}", e),
                ErrorContext::new()
                    .with_field_path("--cities")
                    .with_details(path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text)
    }

    /// Table lookup first, then explicit non-zero coordinates, otherwise a
    /// configuration error.
    pub fn resolve(&self, query: &LocationQuery) -> Result<Coordinates> {
        if let Some(coords) = self.get(&query.city) {
            return Ok(coords);
        }
        if let Some(coords) = query.explicit() {
            return Ok(coords);
        }
        Err(Error::configuration_with_context(
            "Please provide a city name from the predefined list or latitude and longitude",
            ErrorContext::new()
                .with_source("location")
                .with_details(format!("no resolvable location for city '{}'", query.city)),
        ))
    }
}

impl Default for CityTable {
    fn default() -> Self {
        Self::empty().with_city("prague", Coordinates::new(50.0874654, 14.4212503))
    }
}
