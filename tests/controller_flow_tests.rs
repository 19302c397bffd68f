mod common;

use std::sync::Arc;

use common::{ids, Harness};
use map_overlay_select::app::headless::HeadlessMap;
use map_overlay_select::app::{FilterPredicate, InteractionMode, ListenerTarget, MapEvent};
use map_overlay_select::{AppIntent, GeometryKind, Record, RecordId, RecordSet};

#[test]
fn test_overlay_count_matches_records_with_geometry() {
    let mut h = Harness::new(true);
    h.load(
        GeometryKind::Point,
        vec![
            Record::new().with("id", 1).with("geo", "POINT(1;1)"),
            Record::new().with("id", 2).with("geo", ""),
            Record::new().with("id", 3).with("geo", "POINT(3;3)"),
            Record::new().with("geo", "POINT(4;4)"),
            Record::new().with("id", 5).with("geo", "LINESTRING(1;1,2;2)"),
        ],
    );

    assert_eq!(h.state.registry.len(), 2);
    assert_eq!(h.map.overlay_count(), 2);
    let fitted = h.map.inspect(|s| s.fit_calls.last().cloned());
    assert_eq!(fitted, Some(h.map.overlay_handles()));
}

#[test]
fn test_integral_float_id_creates_overlay() {
    let mut h = Harness::new(true);
    h.load(
        GeometryKind::Point,
        vec![Record::new().with("id", 3.0).with("geo", "POINT(1;1)")],
    );

    assert_eq!(h.map.overlay_count(), 1);
    assert!(h.state.registry.find_by_record(&RecordId::Int(3)).is_some());
}

#[test]
fn test_missing_geometry_field_config_creates_no_overlays() {
    let mut h = Harness::new(true);
    h.send(AppIntent::RecordsChanged {
        records: Arc::new(RecordSet::new(vec![Record::new()
            .with("id", 1)
            .with("geo", "POINT(1;1)")])),
    });

    assert!(h.state.registry.is_empty());
    assert_eq!(h.map.overlay_count(), 0);
}

#[test]
fn test_rebuild_does_not_leak_overlays_or_listeners() {
    let mut h = Harness::new(true);
    h.load_points(&[(1, 1.0, 1.0), (2, 2.0, 2.0), (3, 3.0, 3.0)]);
    h.load_points(&[(1, 1.0, 1.0), (2, 2.0, 2.0)]);

    assert_eq!(h.map.overlay_count(), 2);
    assert_eq!(h.map.active_listener_count(), 2);
    for overlay in h.map.overlay_handles() {
        assert!(h
            .map
            .has_listener(ListenerTarget::Overlay(overlay), MapEvent::Click));
    }
}

#[test]
fn test_labels_use_marker_field() {
    let mut h = Harness::new(true);
    h.load_points(&[(4, 1.0, 1.0)]);

    let style = h
        .map
        .style_of(h.handle_of(4))
        .expect("Stil für Overlay erwartet");
    let label = style.label.as_ref().expect("Label erwartet");
    assert_eq!(label.text, "Station 4");
    assert!(!style.is_selected());
}

#[test]
fn test_click_toggle_publishes_filter_and_highlight() {
    let mut h = Harness::new(true);
    h.load_points(&[(1, 1.0, 1.0), (2, 2.0, 2.0)]);

    h.click(1);
    assert!(h.is_highlighted(1));
    assert_eq!(
        h.filter.last(),
        Some(Some(FilterPredicate::equals(RecordId::Int(1), "id")))
    );

    h.click(1);
    assert!(!h.is_highlighted(1));
    assert_eq!(h.filter.last(), Some(None));

    h.click(1);
    h.click(2);
    assert!(!h.is_highlighted(1));
    assert!(h.is_highlighted(2));
    assert!(h
        .map
        .style_of(h.handle_of(2))
        .is_some_and(|style| style.is_selected()));
    assert_eq!(
        h.filter.calls(),
        vec![
            Some(FilterPredicate::equals(RecordId::Int(1), "id")),
            None,
            Some(FilterPredicate::equals(RecordId::Int(1), "id")),
            Some(FilterPredicate::equals(RecordId::Int(2), "id")),
        ]
    );
}

#[test]
fn test_click_without_filter_opens_and_closes_detail() {
    let mut h = Harness::new(false);
    h.load_points(&[(1, 1.0, 1.0)]);

    h.click(1);
    assert!(!h.is_highlighted(1));
    assert!(h.filter.calls().is_empty());
    let opened = h
        .state
        .detail_record
        .as_ref()
        .and_then(|r| r.id("id"));
    assert_eq!(opened, Some(RecordId::Int(1)));

    h.send(AppIntent::DetailViewClosed);
    assert!(h.state.detail_record.is_none());
    let shown = h.detail.shown();
    assert_eq!(shown.len(), 2);
    assert!(shown[0].is_some());
    assert!(shown[1].is_none());
}

#[test]
fn test_records_change_with_click_selection_clears_filter() {
    let mut h = Harness::new(true);
    h.load_points(&[(1, 1.0, 1.0)]);
    h.click(1);

    h.load_points(&[(1, 1.0, 1.0)]);

    assert_eq!(h.filter.last(), Some(None));
    assert!(h.state.selection.click_selected.is_none());
    assert!(!h.is_highlighted(1));
}

#[test]
fn test_selection_result_is_cleared_after_update_settled() {
    let mut h = Harness::new(true);
    h.load_points(&[(1, 10.0, 10.0)]);
    h.send(AppIntent::InteractionModeRequested {
        mode: InteractionMode::Lasso,
    });
    h.draw(common::square(5.0, 15.0));
    h.send(AppIntent::ConfirmSelectionRequested);
    assert_eq!(h.state.selection_result(), ids(&[1]).as_slice());

    h.load_points(&[(1, 10.0, 10.0)]);
    assert_eq!(
        h.state.selection_result(),
        ids(&[1]).as_slice(),
        "Leeren erst nach Abschluss des Updates"
    );

    h.send(AppIntent::UpdateSettled);
    assert!(h.state.selection_result().is_empty());
    assert_eq!(h.sink.last(), Some(Vec::new()));
    assert_eq!(h.state.command_log.count_of("RunDeferredTasks"), 1);
}

#[test]
fn test_teardown_releases_everything() {
    let mut h = Harness::new(true);
    h.load_points(&[(1, 1.0, 1.0), (2, 2.0, 2.0)]);
    h.send(AppIntent::InteractionModeRequested {
        mode: InteractionMode::Lasso,
    });
    h.draw(common::square(0.0, 5.0));

    h.send(AppIntent::TeardownRequested);

    assert_eq!(h.map.overlay_count(), 0);
    assert_eq!(h.map.active_listener_count(), 0);
    assert!(h.map.inspect(|s| s.regions.is_empty()));
    assert!(!h.state.is_map_ready());
    assert_eq!(h.state.interaction_mode(), InteractionMode::Idle);
}

#[test]
fn test_teardown_closes_open_detail_panel() {
    let mut h = Harness::new(false);
    h.load_points(&[(1, 1.0, 1.0)]);
    h.click(1);
    assert!(h.state.detail_record.is_some());

    h.send(AppIntent::TeardownRequested);

    assert!(h.state.detail_record.is_none());
    let shown = h.detail.shown();
    assert_eq!(
        shown.last(),
        Some(&None),
        "Detail-Panel muss beim Abbau geschlossen werden"
    );
}

#[test]
fn test_teardown_after_map_detached_is_a_no_op() {
    let mut h = Harness::new(true);
    h.load_points(&[(1, 1.0, 1.0)]);
    h.click(1);

    h.send(AppIntent::MapDetached);
    h.send(AppIntent::TeardownRequested);
    h.send(AppIntent::TeardownRequested);

    assert!(h.state.registry.is_empty());
    assert!(h.state.listeners.overlay_clicks.is_empty());
    let last = h
        .state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(last.contains("Teardown"), "Unerwarteter letzter Command: {last}");
}

#[test]
fn test_map_switch_moves_overlays_to_new_map() {
    let mut h = Harness::new(true);
    h.load_points(&[(1, 1.0, 1.0), (2, 2.0, 2.0)]);
    let old_map = h.map.clone();

    let new_map = HeadlessMap::new();
    h.controller
        .attach_map(&mut h.state, Box::new(new_map.clone()))
        .expect("attach_map sollte ohne Fehler durchlaufen");

    assert_eq!(old_map.overlay_count(), 0);
    assert_eq!(old_map.active_listener_count(), 0);
    assert_eq!(new_map.overlay_count(), 2);
    assert_eq!(new_map.active_listener_count(), 2);
    assert!(h.state.is_map_ready());
}
