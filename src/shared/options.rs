//! Zentrale Konfiguration der Overlay-Darstellung und des Zeichenwerkzeugs.
//!
//! `OverlayOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Farben ──────────────────────────────────────────────────────────

/// Standard-Farbe nicht selektierter Overlays (Linie und Füllung).
pub const OVERLAY_COLOR_DEFAULT: &str = "#4e9bff";
/// Farbe selektierter Overlays.
pub const OVERLAY_COLOR_SELECTED: &str = "#F18b62";
/// Cursor über klickbaren Overlays.
pub const OVERLAY_CURSOR: &str = "pointer";

// ── Labels ──────────────────────────────────────────────────────────

/// Schriftgröße der Overlay-Labels.
pub const LABEL_FONT_SIZE: &str = "13px";
/// Schriftfarbe der Overlay-Labels.
pub const LABEL_COLOR: &str = "#333";
/// Schriftfamilie der Overlay-Labels.
pub const LABEL_FONT_FAMILY: &str = "inherit";
/// CSS-Klasse des Label-Rahmens.
pub const LABEL_CLASS_NAME: &str = "map-overlay-label";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Optionen des Zeichenwerkzeugs für die Selektionsregion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingOptions {
    /// Region nach dem Zeichnen per Vertex-Drag editierbar
    pub editable: bool,
    /// Region als Ganzes verschiebbar
    pub draggable: bool,
}

impl Default for DrawingOptions {
    fn default() -> Self {
        Self {
            editable: true,
            draggable: true,
        }
    }
}

/// Alle zur Laufzeit änderbaren Overlay-Optionen.
/// Wird als `map_overlay_select.toml` vom Host geladen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    // ── Farben ──────────────────────────────────────────────────
    /// Linien-/Füllfarbe nicht selektierter Overlays
    pub color_default: String,
    /// Linien-/Füllfarbe selektierter Overlays
    pub color_selected: String,
    /// Cursor über Overlays
    pub cursor: String,

    // ── Labels ──────────────────────────────────────────────────
    /// Schriftgröße der Labels
    pub label_font_size: String,
    /// Schriftfarbe der Labels
    pub label_color: String,
    /// Schriftfamilie der Labels
    pub label_font_family: String,
    /// CSS-Klasse der Labels
    pub label_class_name: String,

    // ── Zeichenwerkzeug ─────────────────────────────────────────
    /// Optionen für die Lasso-Region
    pub drawing: DrawingOptions,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            color_default: OVERLAY_COLOR_DEFAULT.to_owned(),
            color_selected: OVERLAY_COLOR_SELECTED.to_owned(),
            cursor: OVERLAY_CURSOR.to_owned(),
            label_font_size: LABEL_FONT_SIZE.to_owned(),
            label_color: LABEL_COLOR.to_owned(),
            label_font_family: LABEL_FONT_FAMILY.to_owned(),
            label_class_name: LABEL_CLASS_NAME.to_owned(),
            drawing: DrawingOptions::default(),
        }
    }
}

impl OverlayOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Overlay-Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!(
                        "Overlay-Optionen fehlerhaft, verwende Standardwerte: {}",
                        e
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Overlay-Optionen gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        use anyhow::Context;

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Overlay-Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Overlay-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }
}
