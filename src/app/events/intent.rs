use std::sync::Arc;

use glam::DVec2;

use super::super::ports::OverlayHandle;
use super::super::state::{BoundaryEdit, InteractionMode};
use crate::core::{FieldNames, GeometryKind, RecordSet};
use crate::shared::OverlayOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Host/Karte ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Karten-Instanz wurde gesetzt oder gewechselt (siehe `AppController::attach_map`)
    MapInstanceChanged,
    /// Karten-Instanz wurde extern abgebaut
    MapDetached,
    /// Neue Datensatz-Menge
    RecordsChanged { records: Arc<RecordSet> },
    /// Feld-Konfiguration oder Feldtyp des Geometriefeldes geändert
    FieldConfigChanged {
        fields: FieldNames,
        geometry_kind: Option<GeometryKind>,
    },
    /// Darstellungs-Optionen geändert
    OptionsChanged { options: OverlayOptions },
    /// Klick auf ein Overlay (Karten-Event)
    OverlayClicked { overlay: OverlayHandle },
    /// Interaktionsmodus wechseln (Toolbar)
    InteractionModeRequested { mode: InteractionMode },
    /// Zeichenwerkzeug hat eine Region fertiggestellt (`overlaycomplete`)
    RegionCompleted {
        region: OverlayHandle,
        boundary: Vec<DVec2>,
    },
    /// Rand der Region wurde editiert (`insert_at`/`remove_at`/`set_at`)
    RegionBoundaryEdited {
        region: OverlayHandle,
        edit: BoundaryEdit,
    },
    /// Lasso-Selektion bestätigen
    ConfirmSelectionRequested,
    /// Detail-Panel wurde geschlossen
    DetailViewClosed,
    /// Synchrones Update abgeschlossen, verzögerte Aufgaben ausführen
    UpdateSettled,
    /// Block wird abgebaut
    TeardownRequested,
}
