//! Darstellungs-Vertrag zwischen Selektionslogik und Karten-Provider.

use super::OverlayOptions;

/// Icon-Variante für Punkt-Overlays (Marker)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerIcon {
    /// Standard-Icon
    #[default]
    Default,
    /// Hervorgehobenes Icon
    Selected,
}

/// Text-Label an einem Overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLabel {
    /// Angezeigter Text
    pub text: String,
    /// CSS-Klasse
    pub class_name: String,
    /// Schriftfamilie
    pub font_family: String,
    /// Schriftgröße
    pub font_size: String,
    /// Schriftfarbe
    pub color: String,
}

/// Vollständige Darstellungsoptionen eines Overlays.
///
/// Marker werten `icon` aus, Flächen und Linien `stroke_color`/`fill_color`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayStyle {
    /// Linienfarbe
    pub stroke_color: String,
    /// Füllfarbe
    pub fill_color: String,
    /// Marker-Icon
    pub icon: MarkerIcon,
    /// Cursor über dem Overlay
    pub cursor: String,
    /// Optionales Label
    pub label: Option<OverlayLabel>,
}

impl OverlayStyle {
    /// Baut den Stil für den gegebenen Hervorhebungszustand.
    pub fn from_options(options: &OverlayOptions, selected: bool, label: Option<&str>) -> Self {
        let color = if selected {
            &options.color_selected
        } else {
            &options.color_default
        };
        Self {
            stroke_color: color.clone(),
            fill_color: color.clone(),
            icon: if selected {
                MarkerIcon::Selected
            } else {
                MarkerIcon::Default
            },
            cursor: options.cursor.clone(),
            label: label.map(|text| OverlayLabel {
                text: text.to_owned(),
                class_name: options.label_class_name.clone(),
                font_family: options.label_font_family.clone(),
                font_size: options.label_font_size.clone(),
                color: options.label_color.clone(),
            }),
        }
    }

    /// `true`, wenn der Stil den hervorgehobenen Zustand darstellt.
    pub fn is_selected(&self) -> bool {
        self.icon == MarkerIcon::Selected
    }
}
