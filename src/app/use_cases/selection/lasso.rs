//! Use-Case: Übergänge der Lasso-Zustandsmaschine.
//!
//! `Idle → Drawing → RegionReady → (Bestätigen) Drawing` bzw. `→ (Verlassen) Idle`.
//! Jeder Übergang gibt Listener und Region der verlassenen Phase synchron frei.

use glam::DVec2;

use super::{click, resolve};
use crate::app::listeners::ListenerScope;
use crate::app::ports::{DrawEvent, DrawShape, ListenerTarget, MapEvent, OverlayHandle};
use crate::app::state::{
    BoundaryEdit, InteractionMode, MapSession, SelectionPhase, SelectionRegion,
};
use crate::app::use_cases::filter_bridge;
use crate::app::AppState;

const BOUNDARY_EVENTS: [MapEvent; 3] = [MapEvent::InsertAt, MapEvent::RemoveAt, MapEvent::SetAt];

/// Entnimmt die offene Region; die Phase fällt auf `Drawing` zurück.
fn take_region(state: &mut AppState) -> Option<SelectionRegion> {
    if !matches!(state.selection.phase, SelectionPhase::RegionReady(_)) {
        return None;
    }
    match std::mem::replace(&mut state.selection.phase, SelectionPhase::Drawing) {
        SelectionPhase::RegionReady(region) => Some(region),
        _ => None,
    }
}

/// Löst die Rand-Listener und entfernt die Region von der Karte.
fn release_region(mut session: Option<&mut MapSession>, mut region: SelectionRegion) {
    region.listeners.release(session.as_deref_mut());
    if let Some(session) = session {
        session.map.unbind_all(region.handle);
        session.map.remove_overlay(region.handle);
    }
}

/// Aktiviert den Polygon-Modus und bindet `overlaycomplete`.
fn arm_drawing_tool(state: &mut AppState) -> bool {
    let Some(session) = state.map.as_mut() else {
        log::debug!("Karte nicht initialisiert, Zeichenwerkzeug wird später aktiviert");
        return false;
    };
    let tool = session.drawing_tool(&state.options.drawing);
    tool.set_mode(Some(DrawShape::Polygon));
    state
        .listeners
        .draw_complete
        .bind_drawing(tool, DrawEvent::OverlayComplete);
    true
}

/// Deaktiviert das Zeichenwerkzeug und löst alle seine Bindungen.
fn disarm_drawing_tool(state: &mut AppState) {
    state.listeners.draw_complete.release(state.map.as_mut());
    if let Some(tool) = state
        .map
        .as_mut()
        .and_then(|session| session.existing_drawing_tool())
    {
        tool.set_mode(None);
        tool.unbind_all();
    }
}

/// `Idle → Drawing`: setzt die Klick-Selektion zurück und aktiviert das Zeichenwerkzeug.
pub fn enter_lasso(state: &mut AppState) {
    if state.interaction_mode() == InteractionMode::Lasso {
        return;
    }
    click::reset_click_selection(state);
    state.selection.phase = SelectionPhase::Drawing;
    arm_drawing_tool(state);
    log::info!("Lasso-Modus aktiviert");
}

/// `Drawing/RegionReady → Idle`: verwirft die offene Region und nimmt
/// unbestätigte Hervorhebungen zurück.
pub fn exit_lasso(state: &mut AppState) {
    if state.interaction_mode() != InteractionMode::Lasso {
        return;
    }
    if let Some(region) = take_region(state) {
        release_region(state.map.as_mut(), region);
    }
    disarm_drawing_tool(state);

    let restored = state
        .registry
        .rollback_unconfirmed(state.map.as_mut(), &state.options);
    state.selection.phase = SelectionPhase::Idle;
    log::info!("Lasso-Modus beendet, {restored} Hervorhebungen zurückgenommen");
}

/// Gibt Region und Zeichenwerkzeug der aktuellen Karte frei, der Modus bleibt erhalten.
pub fn release_drawing(state: &mut AppState) {
    if state.interaction_mode() != InteractionMode::Lasso {
        return;
    }
    if let Some(region) = take_region(state) {
        release_region(state.map.as_mut(), region);
    }
    disarm_drawing_tool(state);
}

/// Schaltet das Lasso nach einem Kartenwechsel auf der neuen Karte scharf.
pub fn rearm_lasso(state: &mut AppState) {
    if state.interaction_mode() != InteractionMode::Lasso {
        return;
    }
    if let Some(region) = take_region(state) {
        release_region(state.map.as_mut(), region);
    }
    if arm_drawing_tool(state) {
        log::info!("Lasso-Modus auf neuer Karte aktiviert");
    }
}

/// `Drawing → RegionReady`: übernimmt die gezeichnete Region, ohne sie aufzulösen.
pub fn accept_region(state: &mut AppState, handle: OverlayHandle, boundary: Vec<DVec2>) {
    if state.interaction_mode() != InteractionMode::Lasso {
        return;
    }
    if let Some(previous) = take_region(state) {
        release_region(state.map.as_mut(), previous);
    }
    let Some(session) = state.map.as_mut() else {
        return;
    };
    if let Some(tool) = session.existing_drawing_tool() {
        tool.set_mode(None);
    }

    let mut listeners = ListenerScope::new();
    for event in BOUNDARY_EVENTS {
        listeners.bind_map(
            session.map.as_mut(),
            ListenerTarget::RegionBoundary(handle),
            event,
        );
    }

    log::debug!("Region {handle:?} mit {} Vertices übernommen", boundary.len());
    state.selection.phase = SelectionPhase::RegionReady(SelectionRegion {
        handle,
        boundary,
        listeners,
    });
}

/// Übernimmt eine Randänderung der offenen Region.
///
/// Nur der Rand wird nachgeführt, aufgelöst wird erst beim Bestätigen.
pub fn apply_boundary_edit(state: &mut AppState, handle: OverlayHandle, edit: BoundaryEdit) {
    let Some(region) = state
        .selection
        .region_mut()
        .filter(|region| region.handle == handle)
    else {
        return;
    };
    if !edit.apply(&mut region.boundary) {
        log::debug!("Ungültige Randänderung {edit:?} ignoriert");
    }
}

/// `RegionReady → Drawing`: löst die Region auf, akkumuliert das Ergebnis
/// (neueste zuerst) und aktiviert das Zeichenwerkzeug erneut.
pub fn confirm_region(state: &mut AppState) {
    let Some(region) = take_region(state) else {
        log::debug!("Keine Region zum Bestätigen");
        return;
    };

    let mut ids = resolve::highlight_contained(state, &region.boundary, region.handle);
    let found = ids.len();
    ids.append(&mut state.selection.result);
    state.selection.result = ids;
    filter_bridge::publish_selection_result(state);

    release_region(state.map.as_mut(), region);
    if let Some(tool) = state
        .map
        .as_mut()
        .and_then(|session| session.existing_drawing_tool())
    {
        tool.set_mode(Some(DrawShape::Polygon));
    }

    log::info!(
        "Lasso-Selektion bestätigt: {found} neue, {} gesamt",
        state.selection.result.len()
    );
}
