//! Use-Case: Overlay-Menge aus der Datensatz-Menge aufbauen.
//!
//! Jeder Neuaufbau gibt vorher alle Overlays und Klick-Listener der alten
//! Menge frei. Datensätze ohne darstellbare Geometrie werden übersprungen.

use crate::app::ports::{ListenerTarget, MapEvent};
use crate::app::registry::OverlayRecord;
use crate::app::AppState;
use crate::core::GeometryValue;
use crate::shared::{OverlayOptions, OverlayStyle};

use super::filter_bridge;

/// Baut alle Overlays neu auf und passt den Viewport an.
pub fn rebuild_overlays(state: &mut AppState) {
    state.listeners.overlay_clicks.release(state.map.as_mut());
    state.registry.clear(state.map.as_mut());

    if state.selection.click_selected.take().is_some() {
        filter_bridge::publish_filter(state, None);
    }

    let Some(kind) = state.geometry_kind else {
        log::debug!("Geometriefeld unbekannt, keine Overlays");
        return;
    };
    let Some(session) = state.map.as_mut() else {
        log::debug!("Karte nicht initialisiert, Overlay-Aufbau übersprungen");
        return;
    };

    let records = state.records.clone();
    let mut skipped = 0usize;

    for record in &records.records {
        let Some(raw) = record.get(&state.field_names.field) else {
            skipped += 1;
            continue;
        };
        let Some(geometry) = GeometryValue::from_field(kind, raw) else {
            skipped += 1;
            continue;
        };
        let Some(record_id) = record.id(&records.primary_key) else {
            log::warn!(
                "Datensatz ohne Primärschlüssel '{}' übersprungen",
                records.primary_key
            );
            skipped += 1;
            continue;
        };

        let label = state
            .field_names
            .marker
            .as_deref()
            .and_then(|marker| record.label_text(marker));

        let style = OverlayStyle::from_options(&state.options, false, label.as_deref());
        let Some(handle) = session.map.create_overlay(kind, &geometry, &style) else {
            log::debug!("Provider lehnt Overlay für {record_id} ab");
            skipped += 1;
            continue;
        };
        state.registry.insert(OverlayRecord {
            record_id,
            geometry,
            handle,
            label,
            selected: false,
            confirmed: false,
        });
    }

    let handles = state.registry.handles();
    if !handles.is_empty() {
        session.map.fit_viewport(&handles);
    }

    log::info!(
        "Overlays aufgebaut: {} Overlays, {} Datensätze übersprungen",
        handles.len(),
        skipped
    );
}

/// Bindet den Klick-Listener auf jedem Overlay der aktuellen Menge.
pub fn bind_overlay_clicks(state: &mut AppState) {
    state.listeners.overlay_clicks.release(state.map.as_mut());

    let Some(session) = state.map.as_mut() else {
        return;
    };
    for handle in state.registry.handles() {
        state.listeners.overlay_clicks.bind_map(
            session.map.as_mut(),
            ListenerTarget::Overlay(handle),
            MapEvent::Click,
        );
    }
}

/// Übernimmt neue Optionen und stellt alle Overlays neu dar.
pub fn apply_options(state: &mut AppState, options: OverlayOptions) {
    state.options = options;
    if let Some(session) = state.map.as_mut() {
        state.registry.restyle_all(session, &state.options);
    }
}
