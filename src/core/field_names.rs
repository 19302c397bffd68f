//! Feld-Konfiguration eines Karten-Blocks (Label- und Geometriefeld).

use serde::{Deserialize, Serialize};

/// Standard-Feldname für Label und Geometrie, wenn nichts konfiguriert ist.
pub const DEFAULT_FIELD_NAME: &str = "id";

/// Welche Felder eines Datensatzes der Block verwendet.
///
/// Fehlt die Konfiguration, wird auf `id`/`id` zurückgefallen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    /// Feld für das Overlay-Label (`None` = kein Label)
    pub marker: Option<String>,
    /// Geometrietragendes Feld
    pub field: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            marker: Some(DEFAULT_FIELD_NAME.to_owned()),
            field: DEFAULT_FIELD_NAME.to_owned(),
        }
    }
}

impl FieldNames {
    /// Konfiguration mit Geometriefeld und optionalem Label-Feld.
    pub fn new(field: impl Into<String>, marker: Option<&str>) -> Self {
        Self {
            marker: marker.map(str::to_owned),
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_configuration_falls_back_to_id() {
        let names: FieldNames = toml::from_str("").expect("leere Konfiguration ist gültig");
        assert_eq!(names, FieldNames::default());
        assert_eq!(names.field, "id");
        assert_eq!(names.marker.as_deref(), Some("id"));
    }

    #[test]
    fn partial_configuration_keeps_defaults_for_missing_keys() {
        let names: FieldNames = toml::from_str("field = \"location\"").expect("gültiges TOML");
        assert_eq!(names.field, "location");
        assert_eq!(names.marker.as_deref(), Some("id"));
    }
}
