//! Lebende Referenz auf die Karten-Instanz und ihr Zeichenwerkzeug.

use crate::app::ports::{DrawingTool, MapHandle};
use crate::shared::DrawingOptions;

/// Karten-Instanz plus lazily erzeugtes Zeichenwerkzeug.
///
/// Das Zeichenwerkzeug gehört zur Karte: wechselt die Karte, wird es neu erzeugt.
pub struct MapSession {
    /// Karten-Handle des Providers
    pub map: Box<dyn MapHandle>,
    drawing_tool: Option<Box<dyn DrawingTool>>,
}

impl MapSession {
    /// Erstellt eine Session ohne Zeichenwerkzeug.
    pub fn new(map: Box<dyn MapHandle>) -> Self {
        Self {
            map,
            drawing_tool: None,
        }
    }

    /// Liefert das Zeichenwerkzeug und erzeugt es beim ersten Zugriff.
    pub fn drawing_tool(&mut self, options: &DrawingOptions) -> &mut dyn DrawingTool {
        let map = &mut self.map;
        self.drawing_tool
            .get_or_insert_with(|| {
                log::debug!("Zeichenwerkzeug erzeugt ({:?})", options);
                map.create_drawing_tool(true, options)
            })
            .as_mut()
    }

    /// Zeichenwerkzeug, falls bereits erzeugt.
    pub fn existing_drawing_tool(&mut self) -> Option<&mut (dyn DrawingTool + 'static)> {
        self.drawing_tool.as_deref_mut()
    }
}

impl std::fmt::Debug for MapSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapSession")
            .field("has_drawing_tool", &self.drawing_tool.is_some())
            .finish()
    }
}
