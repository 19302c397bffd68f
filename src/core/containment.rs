//! Punkt-in-Polygon-Tests für die Lasso-Selektion.

use glam::DVec2;

use super::GeometryValue;

/// Toleranz für "Punkt liegt auf der Kante".
const EDGE_EPSILON: f64 = 1e-9;

/// Prüft ob ein Punkt auf einem Liniensegment liegt.
fn point_on_segment(point: DVec2, a: DVec2, b: DVec2) -> bool {
    let ab = b - a;
    let ap = point - a;
    let scale = ab.length().max(1.0);
    if ab.perp_dot(ap).abs() > EDGE_EPSILON * scale {
        return false;
    }

    let dot = ap.dot(ab);
    dot >= 0.0 && dot <= ab.length_squared()
}

/// Prüft ob ein Punkt innerhalb eines Polygons liegt (Ray-Casting, Rand inklusive).
pub fn point_in_polygon(point: DVec2, polygon: &[DVec2]) -> bool {
    let Some(&last) = polygon.last() else {
        return false;
    };
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut previous = last;

    for &current in polygon {
        if point_on_segment(point, previous, current) {
            return true;
        }

        let crosses = (current.y > point.y) != (previous.y > point.y);
        if crosses
            && point.x
                < (previous.x - current.x) * (point.y - current.y) / (previous.y - current.y)
                    + current.x
        {
            inside = !inside;
        }

        previous = current;
    }

    inside
}

/// Enthaltensein einer Overlay-Geometrie in einer Selektionsregion.
///
/// Punkt: Position, Kreis: Mittelpunkt, Linienzug/Polygon: mindestens ein Vertex.
/// Für Linienzüge und Polygone ist das eine Näherung, kein Schnitt-Test:
/// eine Form, die die Region nur mit einer Kante kreuzt, zählt nicht.
pub fn geometry_in_region(geometry: &GeometryValue, region: &[DVec2]) -> bool {
    geometry
        .sample_points()
        .iter()
        .any(|&point| point_in_polygon(point, region))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(min, min),
            DVec2::new(max, min),
            DVec2::new(max, max),
            DVec2::new(min, max),
        ]
    }

    #[test]
    fn point_inside_and_outside_square() {
        let region = square(0.0, 10.0);
        assert!(point_in_polygon(DVec2::new(5.0, 5.0), &region));
        assert!(!point_in_polygon(DVec2::new(15.0, 5.0), &region));
        assert!(!point_in_polygon(DVec2::new(-0.1, 5.0), &region));
    }

    #[test]
    fn point_on_edge_or_vertex_counts_as_inside() {
        let region = square(0.0, 10.0);
        assert!(point_in_polygon(DVec2::new(10.0, 4.0), &region));
        assert!(point_in_polygon(DVec2::new(0.0, 0.0), &region));
    }

    #[test]
    fn degenerate_regions_contain_nothing() {
        assert!(!point_in_polygon(DVec2::ZERO, &[]));
        assert!(!point_in_polygon(
            DVec2::ZERO,
            &[DVec2::new(-1.0, 0.0), DVec2::new(1.0, 0.0)]
        ));
    }

    #[test]
    fn concave_region_excludes_notch() {
        // U-Form: Kerbe zwischen x=3..7 oberhalb y=3
        let region = vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
            DVec2::new(7.0, 10.0),
            DVec2::new(7.0, 3.0),
            DVec2::new(3.0, 3.0),
            DVec2::new(3.0, 10.0),
            DVec2::new(0.0, 10.0),
        ];
        assert!(!point_in_polygon(DVec2::new(5.0, 6.0), &region));
        assert!(point_in_polygon(DVec2::new(1.5, 6.0), &region));
    }

    #[test]
    fn polyline_matches_when_any_vertex_is_inside() {
        let region = square(0.0, 10.0);
        let line = GeometryValue::LineString(vec![DVec2::new(-5.0, -5.0), DVec2::new(2.0, 2.0)]);
        assert!(geometry_in_region(&line, &region));
    }

    #[test]
    fn polygon_crossing_region_without_vertex_inside_is_not_matched() {
        let region = square(4.0, 6.0);
        let crossing = GeometryValue::Polygon(vec![
            DVec2::new(0.0, 5.0),
            DVec2::new(10.0, 5.0),
            DVec2::new(10.0, 5.5),
            DVec2::new(0.0, 5.5),
        ]);
        assert!(!geometry_in_region(&crossing, &region));
    }
}
