use glam::DVec2;

use crate::app::listeners::ListenerScope;
use crate::app::ports::{MapEvent, OverlayHandle};
use crate::core::RecordId;

/// Extern sichtbarer Interaktionsmodus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Klick-Selektion (ein Datensatz)
    #[default]
    Idle,
    /// Lasso-Selektion per gezeichnetem Polygon
    Lasso,
}

/// Vertex-Änderung am Rand einer Selektionsregion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryEdit {
    /// Vertex an Index eingefügt
    InsertAt { index: usize, point: DVec2 },
    /// Vertex an Index entfernt
    RemoveAt { index: usize },
    /// Vertex an Index verschoben
    SetAt { index: usize, point: DVec2 },
}

impl BoundaryEdit {
    /// Karten-Event, das diese Änderung meldet.
    pub fn event(&self) -> MapEvent {
        match self {
            BoundaryEdit::InsertAt { .. } => MapEvent::InsertAt,
            BoundaryEdit::RemoveAt { .. } => MapEvent::RemoveAt,
            BoundaryEdit::SetAt { .. } => MapEvent::SetAt,
        }
    }

    /// Wendet die Änderung auf eine Vertex-Liste an. Ungültige Indizes werden ignoriert.
    pub fn apply(&self, boundary: &mut Vec<DVec2>) -> bool {
        match *self {
            BoundaryEdit::InsertAt { index, point } if index <= boundary.len() => {
                boundary.insert(index, point);
                true
            }
            BoundaryEdit::RemoveAt { index } if index < boundary.len() => {
                boundary.remove(index);
                true
            }
            BoundaryEdit::SetAt { index, point } if index < boundary.len() => {
                boundary[index] = point;
                true
            }
            _ => false,
        }
    }
}

/// Gezeichnete, noch nicht bestätigte Lasso-Region.
///
/// Besitzt ihre Rand-Listener; beim Verlassen auf jedem Weg wird sie freigegeben.
#[derive(Debug)]
pub struct SelectionRegion {
    /// Handle der Region auf der Karte
    pub handle: OverlayHandle,
    /// Aktuelle Vertices
    pub boundary: Vec<DVec2>,
    /// Listener auf dem Rand (Insert/Remove/Set)
    pub listeners: ListenerScope,
}

/// Phase der Selektions-Zustandsmaschine
#[derive(Debug, Default)]
pub enum SelectionPhase {
    /// Klick-Modus
    #[default]
    Idle,
    /// Lasso aktiv, Zeichenwerkzeug wartet auf eine Region
    Drawing,
    /// Region gezeichnet, wartet auf Bestätigung
    RegionReady(SelectionRegion),
}

/// Auswahlbezogener Zustand
#[derive(Debug, Default)]
pub struct SelectionState {
    /// Aktuelle Phase
    pub phase: SelectionPhase,
    /// Per Klick selektiertes Overlay (Rückverweis für Toggle)
    pub click_selected: Option<OverlayHandle>,
    /// Akkumuliertes Selektionsergebnis (neueste zuerst, ohne Deduplizierung)
    pub result: Vec<RecordId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extern sichtbarer Modus.
    pub fn mode(&self) -> InteractionMode {
        match self.phase {
            SelectionPhase::Idle => InteractionMode::Idle,
            SelectionPhase::Drawing | SelectionPhase::RegionReady(_) => InteractionMode::Lasso,
        }
    }

    /// Gezeichnete Region, falls vorhanden.
    pub fn region(&self) -> Option<&SelectionRegion> {
        match &self.phase {
            SelectionPhase::RegionReady(region) => Some(region),
            _ => None,
        }
    }

    /// Gezeichnete Region (mutable), falls vorhanden.
    pub fn region_mut(&mut self) -> Option<&mut SelectionRegion> {
        match &mut self.phase {
            SelectionPhase::RegionReady(region) => Some(region),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_edits_apply_in_place() {
        let mut boundary = vec![DVec2::ZERO, DVec2::X, DVec2::Y];

        assert!(BoundaryEdit::SetAt {
            index: 1,
            point: DVec2::new(2.0, 0.0)
        }
        .apply(&mut boundary));
        assert!(BoundaryEdit::InsertAt {
            index: 3,
            point: DVec2::ONE
        }
        .apply(&mut boundary));
        assert!(BoundaryEdit::RemoveAt { index: 0 }.apply(&mut boundary));

        assert_eq!(
            boundary,
            vec![DVec2::new(2.0, 0.0), DVec2::Y, DVec2::ONE]
        );
    }

    #[test]
    fn out_of_range_edits_are_ignored() {
        let mut boundary = vec![DVec2::ZERO];
        assert!(!BoundaryEdit::RemoveAt { index: 4 }.apply(&mut boundary));
        assert!(!BoundaryEdit::SetAt {
            index: 1,
            point: DVec2::ONE
        }
        .apply(&mut boundary));
        assert_eq!(boundary.len(), 1);
    }

    #[test]
    fn mode_is_lasso_while_drawing_or_region_ready() {
        let mut selection = SelectionState::new();
        assert_eq!(selection.mode(), InteractionMode::Idle);
        selection.phase = SelectionPhase::Drawing;
        assert_eq!(selection.mode(), InteractionMode::Lasso);
        selection.phase = SelectionPhase::RegionReady(SelectionRegion {
            handle: OverlayHandle(9),
            boundary: Vec::new(),
            listeners: ListenerScope::new(),
        });
        assert_eq!(selection.mode(), InteractionMode::Lasso);
        assert_eq!(selection.region().map(|r| r.handle), Some(OverlayHandle(9)));
    }
}
