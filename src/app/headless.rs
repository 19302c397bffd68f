//! In-Memory-Kollaborateure ohne echten Karten-Provider.
//!
//! Jede Implementierung protokolliert ihre Aufrufe. Die Handles teilen sich
//! ihren Zustand (`Rc<RefCell<_>>`), sodass der Host (oder ein Test) nach der
//! Übergabe an den `AppState` weiter beobachten kann.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;
use indexmap::IndexMap;

use super::ports::{
    DetailView, DrawEvent, DrawShape, DrawingTool, FilterConnection, FilterPredicate, ListenerId,
    ListenerTarget, MapEvent, MapHandle, OverlayHandle, SelectionSink,
};
use crate::core::{GeometryKind, GeometryValue, Record, RecordId};
use crate::shared::{DrawingOptions, OverlayStyle};

/// Ein Datensatz-Overlay auf der Headless-Karte.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessOverlay {
    /// Feldtyp
    pub kind: GeometryKind,
    /// Geometrie
    pub geometry: GeometryValue,
    /// Zuletzt gesetzter Stil
    pub style: OverlayStyle,
}

/// Gemeinsamer Zustand von `HeadlessMap` und `HeadlessDrawingTool`.
#[derive(Debug, Default)]
pub struct HeadlessMapState {
    next_id: u64,
    /// Datensatz-Overlays auf der Karte
    pub overlays: IndexMap<OverlayHandle, HeadlessOverlay>,
    /// Mit dem Zeichenwerkzeug gezeichnete Regionen
    pub regions: IndexMap<OverlayHandle, Vec<DVec2>>,
    /// Aktive Karten-Listener
    pub listeners: IndexMap<ListenerId, (ListenerTarget, MapEvent)>,
    /// Aktive Listener des Zeichenwerkzeugs
    pub draw_listeners: IndexMap<ListenerId, DrawEvent>,
    /// Overlays, deren Bindungen gelöst wurden
    pub unbound: Vec<OverlayHandle>,
    /// Aufrufe von `fit_viewport`
    pub fit_calls: Vec<Vec<OverlayHandle>>,
    /// Aktueller Zeichenmodus
    pub drawing_mode: Option<DrawShape>,
    /// Alle gesetzten Zeichenmodi in Reihenfolge
    pub mode_history: Vec<Option<DrawShape>>,
    /// Optionen jedes erzeugten Zeichenwerkzeugs
    pub drawing_tools_created: Vec<DrawingOptions>,
    /// Aufrufe von `DrawingTool::unbind_all`
    pub drawing_unbind_calls: usize,
}

impl HeadlessMapState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Karten-Handle ohne Rendering.
#[derive(Debug, Clone, Default)]
pub struct HeadlessMap {
    state: Rc<RefCell<HeadlessMapState>>,
}

impl HeadlessMap {
    /// Erstellt eine leere Karte.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simuliert eine fertig gezeichnete Region und liefert ihr Handle.
    pub fn draw_region(&self, boundary: Vec<DVec2>) -> OverlayHandle {
        let mut state = self.state.borrow_mut();
        let handle = OverlayHandle(state.next_id());
        state.regions.insert(handle, boundary);
        handle
    }

    /// Lesezugriff auf den Zustand.
    pub fn inspect<R>(&self, f: impl FnOnce(&HeadlessMapState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Anzahl der Datensatz-Overlays auf der Karte.
    pub fn overlay_count(&self) -> usize {
        self.state.borrow().overlays.len()
    }

    /// Anzahl aktiver Listener (Karte und Zeichenwerkzeug).
    pub fn active_listener_count(&self) -> usize {
        let state = self.state.borrow();
        state.listeners.len() + state.draw_listeners.len()
    }

    /// Aktueller Zeichenmodus.
    pub fn drawing_mode(&self) -> Option<DrawShape> {
        self.state.borrow().drawing_mode
    }

    /// Zuletzt gesetzter Stil eines Overlays.
    pub fn style_of(&self, overlay: OverlayHandle) -> Option<OverlayStyle> {
        self.state
            .borrow()
            .overlays
            .get(&overlay)
            .map(|o| o.style.clone())
    }

    /// Handles aller Datensatz-Overlays in Erstellungsreihenfolge.
    pub fn overlay_handles(&self) -> Vec<OverlayHandle> {
        self.state.borrow().overlays.keys().copied().collect()
    }

    /// `true`, wenn für Ziel und Event ein Listener aktiv ist.
    pub fn has_listener(&self, target: ListenerTarget, event: MapEvent) -> bool {
        self.state
            .borrow()
            .listeners
            .values()
            .any(|bound| *bound == (target, event))
    }
}

impl MapHandle for HeadlessMap {
    fn create_overlay(
        &mut self,
        kind: GeometryKind,
        value: &GeometryValue,
        style: &OverlayStyle,
    ) -> Option<OverlayHandle> {
        let mut state = self.state.borrow_mut();
        let handle = OverlayHandle(state.next_id());
        state.overlays.insert(
            handle,
            HeadlessOverlay {
                kind,
                geometry: value.clone(),
                style: style.clone(),
            },
        );
        Some(handle)
    }

    fn set_overlay_style(&mut self, overlay: OverlayHandle, style: &OverlayStyle) {
        if let Some(o) = self.state.borrow_mut().overlays.get_mut(&overlay) {
            o.style = style.clone();
        }
    }

    fn remove_overlay(&mut self, overlay: OverlayHandle) {
        let mut state = self.state.borrow_mut();
        state.overlays.shift_remove(&overlay);
        state.regions.shift_remove(&overlay);
    }

    fn unbind_all(&mut self, overlay: OverlayHandle) {
        let mut state = self.state.borrow_mut();
        state.listeners.retain(|_, (target, _)| match target {
            ListenerTarget::Overlay(h) | ListenerTarget::RegionBoundary(h) => *h != overlay,
        });
        state.unbound.push(overlay);
    }

    fn add_listener(&mut self, target: ListenerTarget, event: MapEvent) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId(state.next_id());
        state.listeners.insert(id, (target, event));
        id
    }

    fn remove_listener(&mut self, listener: ListenerId) {
        self.state.borrow_mut().listeners.shift_remove(&listener);
    }

    fn fit_viewport(&mut self, overlays: &[OverlayHandle]) {
        self.state.borrow_mut().fit_calls.push(overlays.to_vec());
    }

    fn create_drawing_tool(
        &mut self,
        _enabled: bool,
        options: &DrawingOptions,
    ) -> Box<dyn DrawingTool> {
        self.state.borrow_mut().drawing_tools_created.push(*options);
        Box::new(HeadlessDrawingTool {
            state: Rc::clone(&self.state),
        })
    }
}

/// Zeichenwerkzeug der `HeadlessMap`.
#[derive(Debug, Clone)]
pub struct HeadlessDrawingTool {
    state: Rc<RefCell<HeadlessMapState>>,
}

impl DrawingTool for HeadlessDrawingTool {
    fn set_mode(&mut self, mode: Option<DrawShape>) {
        let mut state = self.state.borrow_mut();
        state.drawing_mode = mode;
        state.mode_history.push(mode);
    }

    fn add_listener(&mut self, event: DrawEvent) -> ListenerId {
        let mut state = self.state.borrow_mut();
        let id = ListenerId(state.next_id());
        state.draw_listeners.insert(id, event);
        id
    }

    fn remove_listener(&mut self, listener: ListenerId) {
        self.state.borrow_mut().draw_listeners.shift_remove(&listener);
    }

    fn unbind_all(&mut self) {
        let mut state = self.state.borrow_mut();
        state.draw_listeners.clear();
        state.drawing_unbind_calls += 1;
    }
}

/// Filter-Verbindung, die jedes veröffentlichte Prädikat protokolliert.
#[derive(Debug, Clone, Default)]
pub struct RecordingFilter {
    connected: Rc<RefCell<bool>>,
    calls: Rc<RefCell<Vec<Option<FilterPredicate>>>>,
}

impl RecordingFilter {
    /// Erstellt eine (nicht) verbundene Filter-Verbindung.
    pub fn new(connected: bool) -> Self {
        Self {
            connected: Rc::new(RefCell::new(connected)),
            calls: Rc::default(),
        }
    }

    /// Verbindet oder trennt das Filterziel.
    pub fn set_connected(&self, connected: bool) {
        *self.connected.borrow_mut() = connected;
    }

    /// Alle veröffentlichten Prädikate in Reihenfolge.
    pub fn calls(&self) -> Vec<Option<FilterPredicate>> {
        self.calls.borrow().clone()
    }

    /// Zuletzt veröffentlichtes Prädikat.
    pub fn last(&self) -> Option<Option<FilterPredicate>> {
        self.calls.borrow().last().cloned()
    }
}

impl FilterConnection for RecordingFilter {
    fn is_connected(&self) -> bool {
        *self.connected.borrow()
    }

    fn apply_filter(&mut self, predicate: Option<&FilterPredicate>) {
        self.calls.borrow_mut().push(predicate.cloned());
    }
}

/// Detail-Panel, das jeden angezeigten Datensatz protokolliert.
#[derive(Debug, Clone, Default)]
pub struct RecordingDetailView {
    shown: Rc<RefCell<Vec<Option<Record>>>>,
}

impl RecordingDetailView {
    /// Erstellt ein leeres Detail-Panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle `show`-Aufrufe in Reihenfolge.
    pub fn shown(&self) -> Vec<Option<Record>> {
        self.shown.borrow().clone()
    }
}

impl DetailView for RecordingDetailView {
    fn show(&mut self, record: Option<&Record>) {
        self.shown.borrow_mut().push(record.cloned());
    }
}

/// Ergebnis-Empfänger, der jede gemeldete Schlüsselliste protokolliert.
#[derive(Debug, Clone, Default)]
pub struct RecordingSelectionSink {
    results: Rc<RefCell<Vec<Vec<RecordId>>>>,
}

impl RecordingSelectionSink {
    /// Erstellt einen leeren Empfänger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle gemeldeten Ergebnisse in Reihenfolge.
    pub fn results(&self) -> Vec<Vec<RecordId>> {
        self.results.borrow().clone()
    }

    /// Zuletzt gemeldetes Ergebnis.
    pub fn last(&self) -> Option<Vec<RecordId>> {
        self.results.borrow().last().cloned()
    }
}

impl SelectionSink for RecordingSelectionSink {
    fn selected_record_keys_changed(&mut self, keys: &[RecordId]) {
        self.results.borrow_mut().push(keys.to_vec());
    }
}
