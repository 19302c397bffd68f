//! Handler für Karten-Lebenszyklus und verzögerte Aufgaben.

use crate::app::use_cases::{filter_bridge, lifecycle};
use crate::app::AppState;

/// Plant das Leeren des Selektionsergebnisses.
pub fn schedule_selection_clear(state: &mut AppState) {
    filter_bridge::schedule_selection_clear(state);
}

/// Führt fällige verzögerte Aufgaben aus.
pub fn run_deferred(state: &mut AppState) {
    lifecycle::run_deferred_tasks(state);
}

/// Gibt die Ressourcen der aktuellen Karte frei.
pub fn release_map_resources(state: &mut AppState) {
    lifecycle::release_map_resources(state);
}

/// Verwirft eine extern abgebaute Karte.
pub fn release_map(state: &mut AppState) {
    lifecycle::release_map(state);
}

/// Baut den Block ab.
pub fn teardown(state: &mut AppState) {
    lifecycle::teardown(state);
}
