#![no_main]

use libfuzzer_sys::fuzz_target;
use map_overlay_select::core::{parse_geometry_text, GeometryKind, GeometryValue};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_geometry_text(text);
        for kind in [
            GeometryKind::Point,
            GeometryKind::LineString,
            GeometryKind::Polygon,
            GeometryKind::Circle,
        ] {
            let _ = GeometryValue::from_field(kind, &serde_json::Value::String(text.to_owned()));
        }
    }
});
