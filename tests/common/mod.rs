#![allow(dead_code)]

use std::sync::Arc;

use glam::DVec2;
use map_overlay_select::app::headless::{
    HeadlessMap, RecordingDetailView, RecordingFilter, RecordingSelectionSink,
};
use map_overlay_select::app::OverlayHandle;
use map_overlay_select::{
    AppController, AppIntent, AppState, FieldNames, GeometryKind, Record, RecordId, RecordSet,
};

/// Controller, State und beobachtbare Headless-Kollaborateure.
pub struct Harness {
    pub controller: AppController,
    pub state: AppState,
    pub map: HeadlessMap,
    pub filter: RecordingFilter,
    pub detail: RecordingDetailView,
    pub sink: RecordingSelectionSink,
}

impl Harness {
    pub fn new(filter_connected: bool) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let filter = RecordingFilter::new(filter_connected);
        let detail = RecordingDetailView::new();
        let sink = RecordingSelectionSink::new();

        let mut state = AppState::new();
        state.collaborators.filter = Some(Box::new(filter.clone()));
        state.collaborators.detail_view = Some(Box::new(detail.clone()));
        state.collaborators.selection_sink = Some(Box::new(sink.clone()));

        let mut controller = AppController::new();
        let map = HeadlessMap::new();
        controller
            .attach_map(&mut state, Box::new(map.clone()))
            .expect("attach_map sollte ohne Fehler durchlaufen");

        Self {
            controller,
            state,
            map,
            filter,
            detail,
            sink,
        }
    }

    pub fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    /// Lädt Punkt-Datensätze `(id, x, y)` mit Geometrie im Feld `geo`.
    pub fn load_points(&mut self, points: &[(i64, f64, f64)]) {
        let records = points
            .iter()
            .map(|&(id, x, y)| {
                Record::new()
                    .with("id", id)
                    .with("name", format!("Station {id}"))
                    .with("geo", format!("POINT({x};{y})"))
            })
            .collect();
        self.load(GeometryKind::Point, records);
    }

    pub fn load(&mut self, kind: GeometryKind, records: Vec<Record>) {
        self.send(AppIntent::FieldConfigChanged {
            fields: FieldNames::new("geo", Some("name")),
            geometry_kind: Some(kind),
        });
        self.send(AppIntent::RecordsChanged {
            records: Arc::new(RecordSet::new(records)),
        });
    }

    pub fn handle_of(&self, id: i64) -> OverlayHandle {
        self.state
            .registry
            .find_by_record(&RecordId::Int(id))
            .expect("Overlay für Datensatz erwartet")
            .handle
    }

    pub fn is_highlighted(&self, id: i64) -> bool {
        self.state
            .registry
            .find_by_record(&RecordId::Int(id))
            .is_some_and(|o| o.selected)
    }

    pub fn click(&mut self, id: i64) {
        let overlay = self.handle_of(id);
        self.send(AppIntent::OverlayClicked { overlay });
    }

    /// Zeichnet eine Region auf der Karte und meldet sie als fertig.
    pub fn draw(&mut self, boundary: Vec<DVec2>) -> OverlayHandle {
        let region = self.map.draw_region(boundary.clone());
        self.send(AppIntent::RegionCompleted { region, boundary });
        region
    }
}

pub fn square(min: f64, max: f64) -> Vec<DVec2> {
    vec![
        DVec2::new(min, min),
        DVec2::new(max, min),
        DVec2::new(max, max),
        DVec2::new(min, max),
    ]
}

pub fn ids(values: &[i64]) -> Vec<RecordId> {
    values.iter().copied().map(RecordId::Int).collect()
}
