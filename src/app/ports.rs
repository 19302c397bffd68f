//! Schnittstellen zu externen Kollaborateuren (Karten-Provider, Zeichenwerkzeug,
//! Filter-Verbindung, Detail-Ansicht, Selektions-Callback).
//!
//! Alle Aufrufe sind fire-and-forget gegen ein externes, zustandsbehaftetes
//! Objekt. Events der Kollaborateure kommen als `AppIntent` zurück.

use crate::core::{GeometryKind, GeometryValue, Record, RecordId};
use crate::shared::{DrawingOptions, OverlayStyle};

/// Kennung eines Overlays auf der Karte (vom Karten-Provider vergeben)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayHandle(pub u64);

/// Kennung eines registrierten Event-Listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Form, die das Zeichenwerkzeug erzeugen soll
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawShape {
    /// Polygon (Lasso-Region)
    Polygon,
}

/// Ziel eines Karten-Listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    /// Ein Datensatz-Overlay
    Overlay(OverlayHandle),
    /// Der Rand (Vertex-Pfad) einer Selektionsregion
    RegionBoundary(OverlayHandle),
}

/// Karten-Events, für die Listener registriert werden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapEvent {
    /// Klick auf ein Overlay
    Click,
    /// Vertex eingefügt
    InsertAt,
    /// Vertex entfernt
    RemoveAt,
    /// Vertex verschoben
    SetAt,
}

/// Events des Zeichenwerkzeugs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawEvent {
    /// Eine Form wurde fertig gezeichnet
    OverlayComplete,
}

/// Vergleichsoperator eines Filter-Prädikats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterOperator {
    /// Gleichheit
    #[default]
    Eq,
}

impl FilterOperator {
    /// Operator-Kürzel der Filter-API.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOperator::Eq => "$eq",
        }
    }
}

/// Filter-Prädikat `record[field] <op> value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPredicate {
    /// Vergleichswert (Primärschlüssel des angeklickten Datensatzes)
    pub value: RecordId,
    /// Feld, wenn das Filterziel kein eigenes Feld konfiguriert hat
    pub fallback_field: String,
    /// Operator
    pub operator: FilterOperator,
}

impl FilterPredicate {
    /// Gleichheits-Prädikat auf den Primärschlüssel.
    pub fn equals(value: RecordId, primary_key: &str) -> Self {
        Self {
            value,
            fallback_field: primary_key.to_owned(),
            operator: FilterOperator::Eq,
        }
    }

    /// Feld, auf das ein konkretes Filterziel filtert.
    pub fn field_for<'a>(&'a self, target_field: Option<&'a str>) -> &'a str {
        target_field.unwrap_or(&self.fallback_field)
    }
}

/// Karten-Instanz des Providers.
pub trait MapHandle {
    /// Erstellt ein Overlay für eine Geometrie.
    ///
    /// `None`, wenn der Provider sie nicht darstellen kann.
    fn create_overlay(
        &mut self,
        kind: GeometryKind,
        value: &GeometryValue,
        style: &OverlayStyle,
    ) -> Option<OverlayHandle>;
    /// Setzt die Darstellung eines Overlays neu.
    fn set_overlay_style(&mut self, overlay: OverlayHandle, style: &OverlayStyle);
    /// Entfernt ein Overlay von der Karte.
    fn remove_overlay(&mut self, overlay: OverlayHandle);
    /// Löst alle Bindungen eines Overlays.
    fn unbind_all(&mut self, overlay: OverlayHandle);
    /// Registriert einen Listener.
    fn add_listener(&mut self, target: ListenerTarget, event: MapEvent) -> ListenerId;
    /// Entfernt einen Listener.
    fn remove_listener(&mut self, listener: ListenerId);
    /// Passt den Viewport an die Overlays an.
    fn fit_viewport(&mut self, overlays: &[OverlayHandle]);
    /// Erstellt das Zeichenwerkzeug dieser Karte.
    fn create_drawing_tool(
        &mut self,
        enabled: bool,
        options: &DrawingOptions,
    ) -> Box<dyn DrawingTool>;
}

/// Zeichenwerkzeug für die Selektionsregion.
pub trait DrawingTool {
    /// Aktiviert einen Zeichenmodus (`None` = aus).
    fn set_mode(&mut self, mode: Option<DrawShape>);
    /// Registriert einen Listener.
    fn add_listener(&mut self, event: DrawEvent) -> ListenerId;
    /// Entfernt einen Listener.
    fn remove_listener(&mut self, listener: ListenerId);
    /// Löst alle Bindungen des Werkzeugs.
    fn unbind_all(&mut self);
}

/// Verbindung zu einem externen Datensatz-Filter.
pub trait FilterConnection {
    /// Ob ein Filterziel verbunden ist.
    fn is_connected(&self) -> bool;
    /// Setzt (`Some`) oder entfernt (`None`) den Filter.
    fn apply_filter(&mut self, predicate: Option<&FilterPredicate>);
}

/// Seitenpanel mit Datensatz-Details.
pub trait DetailView {
    /// Zeigt einen Datensatz an (`None` schließt das Panel).
    fn show(&mut self, record: Option<&Record>);
}

/// Empfänger des Selektionsergebnisses (akkumulierte Datensatz-Schlüssel).
pub trait SelectionSink {
    /// Wird bei jeder Änderung des Selektionsergebnisses aufgerufen.
    fn selected_record_keys_changed(&mut self, keys: &[RecordId]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_prefers_target_field_over_primary_key() {
        let predicate = FilterPredicate::equals(RecordId::Int(4), "id");
        assert_eq!(predicate.field_for(None), "id");
        assert_eq!(predicate.field_for(Some("station_id")), "station_id");
        assert_eq!(predicate.operator.as_str(), "$eq");
    }
}
