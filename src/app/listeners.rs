//! Gebundene Event-Listener als explizite Registrierungsliste.
//!
//! Jede Interaktionsphase besitzt einen `ListenerScope`. Vor jeder Neu-Registrierung
//! und bei jedem Moduswechsel wird der Scope synchron geleert. Events für Bindungen,
//! die nicht (mehr) im Scope stehen, werden verworfen.

use indexmap::IndexMap;

use super::ports::{DrawEvent, DrawingTool, ListenerId, ListenerTarget, MapEvent, MapHandle};
use super::state::MapSession;

/// Wofür ein Listener registriert wurde
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Karten-Listener auf einem Ziel
    Map(ListenerTarget, MapEvent),
    /// Listener auf dem Zeichenwerkzeug
    Drawing(DrawEvent),
}

/// Menge aktuell gebundener Listener mit garantierter Freigabe.
#[derive(Debug, Default)]
pub struct ListenerScope {
    bound: IndexMap<Binding, ListenerId>,
}

impl ListenerScope {
    /// Erstellt einen leeren Scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert einen Karten-Listener und merkt ihn vor.
    pub fn bind_map(&mut self, map: &mut dyn MapHandle, target: ListenerTarget, event: MapEvent) {
        let binding = Binding::Map(target, event);
        if self.bound.contains_key(&binding) {
            return;
        }
        let id = map.add_listener(target, event);
        self.bound.insert(binding, id);
    }

    /// Registriert einen Listener auf dem Zeichenwerkzeug und merkt ihn vor.
    pub fn bind_drawing(&mut self, tool: &mut dyn DrawingTool, event: DrawEvent) {
        let binding = Binding::Drawing(event);
        if self.bound.contains_key(&binding) {
            return;
        }
        let id = tool.add_listener(event);
        self.bound.insert(binding, id);
    }

    /// `true`, wenn für diese Bindung ein Listener aktiv ist.
    pub fn is_bound(&self, binding: &Binding) -> bool {
        self.bound.contains_key(binding)
    }

    /// Anzahl aktiver Listener.
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// `true`, wenn keine Listener gebunden sind.
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }

    /// Entfernt alle Listener synchron.
    ///
    /// Ohne Karte (bereits abgebaut) wird nur die Liste geleert.
    pub fn release(&mut self, session: Option<&mut MapSession>) {
        if self.bound.is_empty() {
            return;
        }
        let Some(session) = session else {
            log::debug!(
                "Karte nicht mehr vorhanden, {} Listener verworfen",
                self.bound.len()
            );
            self.bound.clear();
            return;
        };

        for (binding, id) in self.bound.drain(..) {
            match binding {
                Binding::Map(..) => session.map.remove_listener(id),
                Binding::Drawing(_) => {
                    if let Some(tool) = session.existing_drawing_tool() {
                        tool.remove_listener(id);
                    }
                }
            }
        }
    }
}
