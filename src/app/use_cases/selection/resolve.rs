//! Use-Case: Enthaltensein-Auflösung einer Lasso-Region.

use glam::DVec2;

use crate::app::ports::OverlayHandle;
use crate::app::registry::OverlayRegistry;
use crate::app::AppState;
use crate::core::{geometry_in_region, RecordId};

/// Overlays, deren Geometrie in der Region liegt, in Overlay-Reihenfolge.
///
/// Die Region selbst wird übersprungen. Punkte und Kreise werden über ihren
/// (Mittel-)Punkt getestet, Linien und Polygone über beliebige Vertices.
pub fn contained_overlays(
    registry: &OverlayRegistry,
    boundary: &[DVec2],
    region: OverlayHandle,
) -> Vec<OverlayHandle> {
    registry
        .iter()
        .filter(|overlay| overlay.handle != region)
        .filter(|overlay| geometry_in_region(&overlay.geometry, boundary))
        .map(|overlay| overlay.handle)
        .collect()
}

/// Hebt alle enthaltenen Overlays bestätigt hervor und liefert ihre Datensatz-IDs.
///
/// Bestätigte Hervorhebungen überstehen einen späteren Rollback.
pub fn highlight_contained(
    state: &mut AppState,
    boundary: &[DVec2],
    region: OverlayHandle,
) -> Vec<RecordId> {
    let handles = contained_overlays(&state.registry, boundary, region);
    let mut ids = Vec::with_capacity(handles.len());

    for handle in handles {
        let Some(overlay) = state.registry.get(handle) else {
            continue;
        };
        ids.push(overlay.record_id.clone());
        state
            .registry
            .set_highlight(handle, true, true, state.map.as_mut(), &state.options);
    }
    ids
}
