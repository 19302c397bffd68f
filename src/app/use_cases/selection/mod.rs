//! Use-Case-Funktionen für die Overlay-Selektion.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `click`: Einzelklick-Selektion (Filter oder Detail-Panel)
//! - `lasso`: Übergänge der Lasso-Zustandsmaschine
//! - `resolve`: Enthaltensein-Auflösung einer Region

pub mod click;
pub mod lasso;
pub mod resolve;
