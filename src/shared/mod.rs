//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und Darstellungs-Typen, die zwischen `app` und den
//! Karten-Ports geteilt werden.

pub mod options;
mod style;

pub use options::{DrawingOptions, OverlayOptions};
pub use style::{MarkerIcon, OverlayLabel, OverlayStyle};
