use std::sync::Arc;

use glam::DVec2;

use super::super::ports::OverlayHandle;
use super::super::state::BoundaryEdit;
use crate::core::{FieldNames, GeometryKind, RecordSet};
use crate::shared::OverlayOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Datensätze & Konfiguration ===
    /// Datensatz-Menge übernehmen
    SetRecords { records: Arc<RecordSet> },
    /// Feld-Konfiguration übernehmen
    SetFieldConfig {
        fields: FieldNames,
        geometry_kind: Option<GeometryKind>,
    },
    /// Optionen übernehmen und Overlays neu darstellen
    ApplyOptions { options: OverlayOptions },

    // === Overlays ===
    /// Overlays aus der aktuellen Datensatz-Menge neu aufbauen
    RebuildOverlays,
    /// Klick-Listener auf allen Overlays neu binden
    BindOverlayClicks,

    // === Verzögerte Aufgaben ===
    /// Leeren des Selektionsergebnisses nach dem Update planen
    ScheduleSelectionClear,
    /// Fällige verzögerte Aufgaben ausführen
    RunDeferredTasks,

    // === Klick-Modus ===
    /// Klick-Selektion umschalten (Filter verbunden)
    ToggleClickSelection { overlay: OverlayHandle },
    /// Datensatz im Detail-Panel anzeigen (Filter nicht verbunden)
    ShowRecordDetail { overlay: OverlayHandle },
    /// Detail-Panel schließen
    CloseRecordDetail,

    // === Lasso-Modus ===
    /// Lasso-Modus betreten
    EnterLasso,
    /// Lasso-Modus verlassen (unbestätigte Region verwerfen)
    ExitLasso,
    /// Lasso nach Kartenwechsel auf der neuen Karte scharf schalten
    RearmLasso,
    /// Gezeichnete Region übernehmen
    AcceptRegion {
        region: OverlayHandle,
        boundary: Vec<DVec2>,
    },
    /// Randänderung der Region übernehmen
    ApplyBoundaryEdit {
        region: OverlayHandle,
        edit: BoundaryEdit,
    },
    /// Region auflösen und Ergebnis akkumulieren
    ConfirmRegion,

    // === Lebenszyklus ===
    /// Karten-Ressourcen freigeben, bevor die Karte gewechselt wird
    ReleaseMapResources,
    /// Karte wurde extern abgebaut
    ReleaseMap,
    /// Alle Ressourcen freigeben (Unmount)
    Teardown,
}
