//! Map Overlay Select Library.
//! Overlay-Registry, Klick- und Lasso-Selektion und Filter-Anbindung für Karten-Blöcke.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionMode};
pub use core::{FieldNames, GeometryKind, GeometryValue, Record, RecordId, RecordSet};
pub use shared::{OverlayOptions, OverlayStyle};
