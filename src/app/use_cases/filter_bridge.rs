//! Use-Case: Selektion an Filter-Verbindung und Ergebnis-Empfänger weitergeben.

use crate::app::deferred::DeferredTask;
use crate::app::ports::FilterPredicate;
use crate::app::AppState;

/// Setzt (`Some`) oder entfernt (`None`) den externen Filter.
///
/// Ohne verbundenes Filterziel wird nichts veröffentlicht.
pub fn publish_filter(state: &mut AppState, predicate: Option<FilterPredicate>) {
    match state.collaborators.filter.as_mut() {
        Some(filter) if filter.is_connected() => {
            log::debug!("Filter veröffentlicht: {predicate:?}");
            filter.apply_filter(predicate.as_ref());
        }
        _ => log::debug!("Kein Filterziel verbunden, Filter {predicate:?} verworfen"),
    }
}

/// Meldet das akkumulierte Selektionsergebnis an den Empfänger.
pub fn publish_selection_result(state: &mut AppState) {
    if let Some(sink) = state.collaborators.selection_sink.as_mut() {
        sink.selected_record_keys_changed(&state.selection.result);
    }
}

/// Plant das Leeren des Selektionsergebnisses nach Abschluss des Updates.
pub fn schedule_selection_clear(state: &mut AppState) {
    let token = state.deferred.schedule(DeferredTask::ClearSelectionResult);
    log::debug!("Leeren des Selektionsergebnisses geplant (#{token})");
}

/// Leert das Selektionsergebnis und meldet die leere Liste.
pub fn clear_selection_result(state: &mut AppState) {
    state.selection.result.clear();
    publish_selection_result(state);
}
