//! Use-Case: Freigabe von Karten-Ressourcen und verzögerte Aufgaben.
//!
//! Alle Freigaben sind ohne (oder mit bereits abgebauter) Karte No-Ops.

use crate::app::deferred::DeferredTask;
use crate::app::AppState;

use super::{filter_bridge, selection};

/// Führt alle fälligen verzögerten Aufgaben aus.
pub fn run_deferred_tasks(state: &mut AppState) {
    for task in state.deferred.take_due() {
        match task {
            DeferredTask::ClearSelectionResult => filter_bridge::clear_selection_result(state),
        }
    }
}

/// Gibt Region, Listener und Overlays der aktuellen Karte frei.
///
/// Der Interaktionsmodus bleibt erhalten, damit er auf einer neuen Karte
/// wieder scharf geschaltet werden kann.
pub fn release_map_resources(state: &mut AppState) {
    selection::lasso::release_drawing(state);
    state.listeners.overlay_clicks.release(state.map.as_mut());
    state.registry.clear(state.map.as_mut());
    if state.selection.click_selected.take().is_some() {
        filter_bridge::publish_filter(state, None);
    }
}

/// Karte wurde extern abgebaut: Session verwerfen, Listen ohne Aufrufe leeren.
pub fn release_map(state: &mut AppState) {
    state.map = None;
    release_map_resources(state);
}

/// Baut den Block vollständig ab (Unmount).
pub fn teardown(state: &mut AppState) {
    selection::lasso::exit_lasso(state);
    release_map_resources(state);
    state.deferred.cancel_all();
    selection::click::close_record_detail(state);
    state.map = None;
    log::info!("Karten-Block abgebaut");
}
