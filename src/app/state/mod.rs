//! Application State: zentrale Datenhaltung des Karten-Blocks.

mod map_session;
mod selection;

pub use map_session::MapSession;
pub use selection::{
    BoundaryEdit, InteractionMode, SelectionPhase, SelectionRegion, SelectionState,
};

use std::sync::Arc;

use super::deferred::DeferredQueue;
use super::listeners::ListenerScope;
use super::ports::{DetailView, FilterConnection, SelectionSink};
use super::registry::OverlayRegistry;
use super::CommandLog;
use crate::core::{FieldNames, GeometryKind, Record, RecordSet};
use crate::shared::OverlayOptions;

/// Listener, die unabhängig von einer einzelnen Region gebunden sind
#[derive(Debug, Default)]
pub struct ListenerState {
    /// Klick-Listener auf allen Overlays der aktuellen Menge
    pub overlay_clicks: ListenerScope,
    /// `overlaycomplete`-Listener auf dem Zeichenwerkzeug (nur im Lasso-Modus)
    pub draw_complete: ListenerScope,
}

/// Externe Kollaborateure ohne Karten-Bezug
#[derive(Default)]
pub struct Collaborators {
    /// Filter-Verbindung (fehlend = nicht verbunden)
    pub filter: Option<Box<dyn FilterConnection>>,
    /// Detail-Panel
    pub detail_view: Option<Box<dyn DetailView>>,
    /// Empfänger des Selektionsergebnisses
    pub selection_sink: Option<Box<dyn SelectionSink>>,
}

impl Collaborators {
    /// Ob ein Filterziel verbunden ist.
    pub fn is_filter_connected(&self) -> bool {
        self.filter.as_ref().is_some_and(|f| f.is_connected())
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("filter", &self.filter.is_some())
            .field("detail_view", &self.detail_view.is_some())
            .field("selection_sink", &self.selection_sink.is_some())
            .finish()
    }
}

/// Hauptzustand des Karten-Blocks
#[derive(Debug)]
pub struct AppState {
    /// Karten-Instanz (None = nicht initialisiert oder bereits abgebaut)
    pub map: Option<MapSession>,
    /// Aktuelle Datensatz-Menge
    pub records: Arc<RecordSet>,
    /// Feld-Konfiguration (Label, Geometrie)
    pub field_names: FieldNames,
    /// Feldtyp des Geometriefeldes laut Schema (None = Feld unbekannt)
    pub geometry_kind: Option<GeometryKind>,
    /// Lebende Overlays
    pub registry: OverlayRegistry,
    /// Selektions-Zustandsmaschine
    pub selection: SelectionState,
    /// Gebundene Listener
    pub listeners: ListenerState,
    /// Externe Kollaborateure
    pub collaborators: Collaborators,
    /// Im Detail-Panel geöffneter Datensatz
    pub detail_record: Option<Record>,
    /// Verzögerte Aufgaben
    pub deferred: DeferredQueue,
    /// Darstellungs-Optionen
    pub options: OverlayOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl AppState {
    /// Erstellt einen neuen, leeren State ohne Karte.
    pub fn new() -> Self {
        Self {
            map: None,
            records: Arc::new(RecordSet::default()),
            field_names: FieldNames::default(),
            geometry_kind: None,
            registry: OverlayRegistry::new(),
            selection: SelectionState::new(),
            listeners: ListenerState::default(),
            collaborators: Collaborators::default(),
            detail_record: None,
            deferred: DeferredQueue::new(),
            options: OverlayOptions::default(),
            command_log: CommandLog::new(),
        }
    }

    /// Ob die Karte initialisiert ist.
    pub fn is_map_ready(&self) -> bool {
        self.map.is_some()
    }

    /// Aktueller Interaktionsmodus.
    pub fn interaction_mode(&self) -> InteractionMode {
        self.selection.mode()
    }

    /// Ob "Selektion bestätigen" angeboten wird (nur im Lasso-Modus).
    pub fn can_confirm_selection(&self) -> bool {
        self.selection.mode() == InteractionMode::Lasso
    }

    /// Akkumuliertes Selektionsergebnis.
    pub fn selection_result(&self) -> &[crate::core::RecordId] {
        &self.selection.result
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
