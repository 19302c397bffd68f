//! Geometrie-Werte der Datensätze: Punkt, Linienzug, Polygon, Kreis.
//!
//! Ein Geometriefeld kann als JSON-Array (`[x, y]`, `[[x, y], ...]`, `[x, y, r]`)
//! oder als Text (`POINT(x;y)`, `LINESTRING(x;y,x;y)`, `POLYGON(...)`, `CIRCLE(x;y;r)`)
//! vorliegen. Leere Werte gelten als "keine Geometrie".

use anyhow::{bail, Context, Result};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Feldtyp des geometrietragenden Feldes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GeometryKind {
    /// Einzelner Punkt (Marker)
    Point,
    /// Offener Linienzug
    LineString,
    /// Geschlossenes Polygon
    Polygon,
    /// Kreis mit Mittelpunkt und Radius
    Circle,
}

impl GeometryKind {
    /// Text-Tag der Geometrie (`POINT`, `LINESTRING`, …).
    pub fn tag(self) -> &'static str {
        match self {
            GeometryKind::Point => "POINT",
            GeometryKind::LineString => "LINESTRING",
            GeometryKind::Polygon => "POLYGON",
            GeometryKind::Circle => "CIRCLE",
        }
    }

    fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "POINT" => Some(GeometryKind::Point),
            "LINESTRING" | "POLYLINE" => Some(GeometryKind::LineString),
            "POLYGON" => Some(GeometryKind::Polygon),
            "CIRCLE" => Some(GeometryKind::Circle),
            _ => None,
        }
    }
}

/// Geometrie eines Datensatzes in Kartenkoordinaten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GeometryValue {
    /// Punkt
    Point(DVec2),
    /// Linienzug (Vertices in Reihenfolge)
    LineString(Vec<DVec2>),
    /// Polygon (Vertices, implizit geschlossen)
    Polygon(Vec<DVec2>),
    /// Kreis
    Circle {
        /// Mittelpunkt
        center: DVec2,
        /// Radius in Karteneinheiten
        radius: f64,
    },
}

impl GeometryValue {
    /// Typ der Geometrie.
    pub fn kind(&self) -> GeometryKind {
        match self {
            GeometryValue::Point(_) => GeometryKind::Point,
            GeometryValue::LineString(_) => GeometryKind::LineString,
            GeometryValue::Polygon(_) => GeometryKind::Polygon,
            GeometryValue::Circle { .. } => GeometryKind::Circle,
        }
    }

    /// Punkte, die für den Enthaltensein-Test herangezogen werden.
    ///
    /// Punkt und Kreis liefern genau einen Punkt (Position bzw. Mittelpunkt),
    /// Linienzug und Polygon alle Vertices.
    pub fn sample_points(&self) -> &[DVec2] {
        match self {
            GeometryValue::Point(p) => std::slice::from_ref(p),
            GeometryValue::Circle { center, .. } => std::slice::from_ref(center),
            GeometryValue::LineString(points) | GeometryValue::Polygon(points) => points,
        }
    }

    /// Liest ein Geometriefeld für den konfigurierten Feldtyp.
    ///
    /// `None` bei fehlendem oder leerem Wert (still übersprungen) sowie bei
    /// fehlerhaftem Wert (mit Warnung übersprungen).
    pub fn from_field(kind: GeometryKind, value: &Value) -> Option<Self> {
        if is_empty_value(value) {
            return None;
        }

        let parsed = match value {
            Value::String(text) => parse_geometry_text(text).and_then(|geometry| {
                if geometry.kind() != kind {
                    bail!(
                        "Geometrie-Tag {} passt nicht zum Feldtyp {}",
                        geometry.kind().tag(),
                        kind.tag()
                    );
                }
                Ok(geometry)
            }),
            other => parse_geometry_json(kind, other),
        };

        match parsed {
            Ok(geometry) => Some(geometry),
            Err(e) => {
                log::warn!("Ungültige Geometrie übersprungen: {e:#}");
                None
            }
        }
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Parst die Text-Form einer Geometrie, z.B. `POINT(10;10)` oder `CIRCLE(1;2;5)`.
pub fn parse_geometry_text(text: &str) -> Result<GeometryValue> {
    let text = text.trim();
    let open = text
        .find('(')
        .context("Geometrie-Text ohne öffnende Klammer")?;
    let body = text[open + 1..]
        .strip_suffix(')')
        .context("Geometrie-Text ohne schließende Klammer")?;
    let tag = text[..open].trim();
    let kind =
        GeometryKind::from_tag(tag).with_context(|| format!("Unbekannter Geometrie-Tag: {tag}"))?;

    match kind {
        GeometryKind::Point => {
            let [x, y] = parse_coords::<2>(body).context("Fehler beim Parsen des Punkts")?;
            Ok(GeometryValue::Point(DVec2::new(x, y)))
        }
        GeometryKind::Circle => {
            let [x, y, r] = parse_coords::<3>(body).context("Fehler beim Parsen des Kreises")?;
            Ok(GeometryValue::Circle {
                center: DVec2::new(x, y),
                radius: r,
            })
        }
        GeometryKind::LineString | GeometryKind::Polygon => {
            let points = body
                .split(',')
                .map(|pair| parse_coords::<2>(pair).map(|[x, y]| DVec2::new(x, y)))
                .collect::<Result<Vec<_>>>()
                .context("Fehler beim Parsen der Vertex-Liste")?;
            if points.is_empty() {
                bail!("Vertex-Liste ist leer");
            }
            Ok(if kind == GeometryKind::Polygon {
                GeometryValue::Polygon(points)
            } else {
                GeometryValue::LineString(points)
            })
        }
    }
}

fn parse_coords<const N: usize>(raw: &str) -> Result<[f64; N]> {
    let mut out = [0.0; N];
    let mut parts = raw.split(';');
    for slot in out.iter_mut() {
        let part = parts.next().context("Zu wenige Koordinaten")?;
        *slot = part
            .trim()
            .parse::<f64>()
            .with_context(|| format!("Ungültige Koordinate: {part:?}"))?;
    }
    if parts.next().is_some() {
        bail!("Zu viele Koordinaten in {raw:?}");
    }
    Ok(out)
}

fn parse_geometry_json(kind: GeometryKind, value: &Value) -> Result<GeometryValue> {
    match kind {
        GeometryKind::Point => Ok(GeometryValue::Point(json_point(value)?)),
        GeometryKind::Circle => {
            let items = json_numbers(value)?;
            let &[x, y, r] = items.as_slice() else {
                bail!("Kreis erwartet [x, y, r], erhalten: {value}");
            };
            Ok(GeometryValue::Circle {
                center: DVec2::new(x, y),
                radius: r,
            })
        }
        GeometryKind::LineString | GeometryKind::Polygon => {
            let Value::Array(items) = value else {
                bail!("Vertex-Liste erwartet, erhalten: {value}");
            };
            let points = items.iter().map(json_point).collect::<Result<Vec<_>>>()?;
            Ok(if kind == GeometryKind::Polygon {
                GeometryValue::Polygon(points)
            } else {
                GeometryValue::LineString(points)
            })
        }
    }
}

fn json_numbers(value: &Value) -> Result<Vec<f64>> {
    let Value::Array(items) = value else {
        bail!("Zahlen-Array erwartet, erhalten: {value}");
    };
    items
        .iter()
        .map(|item| {
            item.as_f64()
                .with_context(|| format!("Zahl erwartet, erhalten: {item}"))
        })
        .collect()
}

fn json_point(value: &Value) -> Result<DVec2> {
    let numbers = json_numbers(value)?;
    let &[x, y] = numbers.as_slice() else {
        bail!("Punkt erwartet [x, y], erhalten: {value}");
    };
    Ok(DVec2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn parses_point_text_with_semicolon_separator() {
        let geometry = parse_geometry_text("POINT(10;10)").expect("Punkt sollte parsen");
        assert_eq!(geometry, GeometryValue::Point(DVec2::new(10.0, 10.0)));
    }

    #[test]
    fn parses_circle_text_and_keeps_radius() {
        let geometry = parse_geometry_text("circle(1.5; -2; 0.25)").expect("Kreis sollte parsen");
        let GeometryValue::Circle { center, radius } = geometry else {
            panic!("Kreis erwartet, erhalten: {geometry:?}");
        };
        assert_relative_eq!(center.x, 1.5);
        assert_relative_eq!(center.y, -2.0);
        assert_relative_eq!(radius, 0.25);
    }

    #[test]
    fn parses_polygon_text_vertices_in_order() {
        let geometry = parse_geometry_text("POLYGON(0;0,4;0,4;4)").expect("Polygon sollte parsen");
        assert_eq!(geometry.sample_points().len(), 3);
        assert_eq!(geometry.sample_points()[1], DVec2::new(4.0, 0.0));
    }

    #[test]
    fn rejects_text_with_wrong_coordinate_count() {
        assert!(parse_geometry_text("POINT(1;2;3)").is_err());
        assert!(parse_geometry_text("POINT(1)").is_err());
        assert!(parse_geometry_text("HEXAGON(1;2)").is_err());
        assert!(parse_geometry_text("POINT 1;2").is_err());
    }

    #[test]
    fn empty_values_count_as_missing_geometry() {
        assert_eq!(GeometryValue::from_field(GeometryKind::Point, &Value::Null), None);
        assert_eq!(GeometryValue::from_field(GeometryKind::Point, &json!("  ")), None);
        assert_eq!(GeometryValue::from_field(GeometryKind::Polygon, &json!([])), None);
    }

    #[test]
    fn json_arrays_are_read_per_field_kind() {
        assert_eq!(
            GeometryValue::from_field(GeometryKind::Point, &json!([1.0, 2.0])),
            Some(GeometryValue::Point(DVec2::new(1.0, 2.0)))
        );
        assert_eq!(
            GeometryValue::from_field(GeometryKind::LineString, &json!([[0, 0], [3, 4]])),
            Some(GeometryValue::LineString(vec![
                DVec2::ZERO,
                DVec2::new(3.0, 4.0)
            ]))
        );
        assert_eq!(
            GeometryValue::from_field(GeometryKind::Circle, &json!([5, 6, 2])),
            Some(GeometryValue::Circle {
                center: DVec2::new(5.0, 6.0),
                radius: 2.0
            })
        );
    }

    #[test]
    fn text_tag_must_match_field_kind() {
        assert_eq!(
            GeometryValue::from_field(GeometryKind::Polygon, &json!("POINT(1;1)")),
            None
        );
    }

    #[test]
    fn circle_samples_its_center_only() {
        let circle = GeometryValue::Circle {
            center: DVec2::new(3.0, 3.0),
            radius: 100.0,
        };
        assert_eq!(circle.sample_points(), &[DVec2::new(3.0, 3.0)]);
    }
}
