//! Handler für Datensätze, Feld-Konfiguration und Overlay-Aufbau.

use std::sync::Arc;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{FieldNames, GeometryKind, RecordSet};
use crate::shared::OverlayOptions;

/// Übernimmt eine neue Datensatz-Menge.
pub fn set_records(state: &mut AppState, records: Arc<RecordSet>) {
    state.records = records;
}

/// Übernimmt Feld-Konfiguration und Feldtyp des Geometriefeldes.
pub fn set_field_config(
    state: &mut AppState,
    fields: FieldNames,
    geometry_kind: Option<GeometryKind>,
) {
    state.field_names = fields;
    state.geometry_kind = geometry_kind;
}

/// Übernimmt neue Darstellungs-Optionen.
pub fn apply_options(state: &mut AppState, options: OverlayOptions) {
    use_cases::overlays::apply_options(state, options);
}

/// Baut die Overlays neu auf.
pub fn rebuild(state: &mut AppState) {
    use_cases::overlays::rebuild_overlays(state);
}

/// Bindet die Klick-Listener neu.
pub fn bind_clicks(state: &mut AppState) {
    use_cases::overlays::bind_overlay_clicks(state);
}
