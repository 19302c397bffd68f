//! Handler für Klick- und Lasso-Selektion.

use glam::DVec2;

use crate::app::ports::OverlayHandle;
use crate::app::state::BoundaryEdit;
use crate::app::use_cases::selection::{click, lasso};
use crate::app::AppState;

/// Schaltet die Klick-Selektion eines Overlays um.
pub fn toggle_click(state: &mut AppState, overlay: OverlayHandle) {
    click::toggle_click_selection(state, overlay);
}

/// Zeigt den Datensatz eines Overlays im Detail-Panel.
pub fn show_detail(state: &mut AppState, overlay: OverlayHandle) {
    click::show_record_detail(state, overlay);
}

/// Schließt das Detail-Panel.
pub fn close_detail(state: &mut AppState) {
    click::close_record_detail(state);
}

/// Betritt den Lasso-Modus.
pub fn enter_lasso(state: &mut AppState) {
    lasso::enter_lasso(state);
}

/// Verlässt den Lasso-Modus.
pub fn exit_lasso(state: &mut AppState) {
    lasso::exit_lasso(state);
}

/// Aktiviert das Lasso auf einer neuen Karte.
pub fn rearm_lasso(state: &mut AppState) {
    lasso::rearm_lasso(state);
}

/// Übernimmt eine fertig gezeichnete Region.
pub fn accept_region(state: &mut AppState, region: OverlayHandle, boundary: Vec<DVec2>) {
    lasso::accept_region(state, region, boundary);
}

/// Übernimmt eine Randänderung der Region.
pub fn apply_boundary_edit(state: &mut AppState, region: OverlayHandle, edit: BoundaryEdit) {
    lasso::apply_boundary_edit(state, region, edit);
}

/// Bestätigt die offene Region.
pub fn confirm_region(state: &mut AppState) {
    lasso::confirm_region(state);
}
