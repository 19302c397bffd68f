//! Use-Case: Einzelklick-Selektion.

use crate::app::ports::{FilterPredicate, OverlayHandle};
use crate::app::use_cases::filter_bridge;
use crate::app::AppState;

/// Nimmt die Hervorhebung zurück, sofern sie nicht aus einer bestätigten Lasso-Selektion stammt.
fn unhighlight_unless_confirmed(state: &mut AppState, handle: OverlayHandle) {
    if state.registry.get(handle).is_some_and(|o| !o.confirmed) {
        state
            .registry
            .set_highlight(handle, false, false, state.map.as_mut(), &state.options);
    }
}

/// Hebt eine aktive Klick-Selektion auf und entfernt den Filter.
pub fn reset_click_selection(state: &mut AppState) {
    let Some(previous) = state.selection.click_selected.take() else {
        return;
    };
    unhighlight_unless_confirmed(state, previous);
    filter_bridge::publish_filter(state, None);
}

/// Schaltet die Klick-Selektion eines Overlays um.
///
/// Erneuter Klick auf dasselbe Overlay hebt die Selektion auf, ein anderes
/// Overlay ersetzt sie.
pub fn toggle_click_selection(state: &mut AppState, overlay: OverlayHandle) {
    let Some((record_id, confirmed)) = state
        .registry
        .get(overlay)
        .map(|o| (o.record_id.clone(), o.confirmed))
    else {
        log::debug!("Klick auf unbekanntes Overlay {overlay:?} ignoriert");
        return;
    };
    if state.records.find(&record_id).is_none() {
        log::debug!("Datensatz {record_id} nicht mehr vorhanden, Klick ignoriert");
        return;
    }

    let previous = state.selection.click_selected.take();
    if let Some(previous) = previous {
        unhighlight_unless_confirmed(state, previous);
    }

    if previous == Some(overlay) {
        log::info!("Klick-Selektion {record_id} aufgehoben");
        filter_bridge::publish_filter(state, None);
        return;
    }

    state
        .registry
        .set_highlight(overlay, true, confirmed, state.map.as_mut(), &state.options);
    state.selection.click_selected = Some(overlay);

    log::info!("Klick-Selektion: {record_id}");
    let predicate = FilterPredicate::equals(record_id, &state.records.primary_key);
    filter_bridge::publish_filter(state, Some(predicate));
}

/// Öffnet den Datensatz eines Overlays im Detail-Panel.
pub fn show_record_detail(state: &mut AppState, overlay: OverlayHandle) {
    let record = state
        .registry
        .get(overlay)
        .and_then(|o| state.records.find(&o.record_id))
        .cloned();
    let Some(record) = record else {
        log::debug!("Kein Datensatz für Overlay {overlay:?}, Detail-Panel bleibt zu");
        return;
    };

    if let Some(view) = state.collaborators.detail_view.as_mut() {
        view.show(Some(&record));
    }
    state.detail_record = Some(record);
}

/// Schließt das Detail-Panel.
pub fn close_record_detail(state: &mut AppState) {
    state.detail_record = None;
    if let Some(view) = state.collaborators.detail_view.as_mut() {
        view.show(None);
    }
}
