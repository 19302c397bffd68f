//! Core-Domänentypen: Datensätze, Geometrien, Feld-Konfiguration, Enthaltensein-Tests.

pub mod containment;
pub mod field_names;
pub mod geometry;
pub mod record;

pub use containment::{geometry_in_region, point_in_polygon};
pub use field_names::{FieldNames, DEFAULT_FIELD_NAME};
pub use geometry::{parse_geometry_text, GeometryKind, GeometryValue};
pub use record::{Record, RecordId, RecordSet, DEFAULT_PRIMARY_KEY};
