//! Registry aller Overlays der aktuellen Datensatz-Menge.
//!
//! Jedes Overlay ist genau einem Datensatz zugeordnet. Der Hervorhebungszustand
//! liegt hier, nicht am Provider-Objekt; das Karten-Handle ist nur Rückverweis.

use indexmap::IndexMap;

use super::ports::OverlayHandle;
use super::state::MapSession;
use crate::core::{GeometryValue, RecordId};
use crate::shared::{OverlayOptions, OverlayStyle};

/// Ein Overlay und sein Datensatz.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRecord {
    /// Primärschlüssel des Datensatzes
    pub record_id: RecordId,
    /// Geometrie (für Enthaltensein-Tests)
    pub geometry: GeometryValue,
    /// Handle auf der Karte
    pub handle: OverlayHandle,
    /// Label-Text
    pub label: Option<String>,
    /// Hervorgehoben
    pub selected: bool,
    /// Hervorhebung stammt aus einer bestätigten Lasso-Selektion
    pub confirmed: bool,
}

impl OverlayRecord {
    /// Aktueller Stil dieses Overlays.
    pub fn style(&self, options: &OverlayOptions) -> OverlayStyle {
        OverlayStyle::from_options(options, self.selected, self.label.as_deref())
    }
}

/// Overlay-Menge in Datensatz-Reihenfolge.
#[derive(Debug, Default)]
pub struct OverlayRegistry {
    overlays: IndexMap<OverlayHandle, OverlayRecord>,
}

impl OverlayRegistry {
    /// Erstellt eine leere Registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registriert ein neu erstelltes Overlay.
    pub fn insert(&mut self, record: OverlayRecord) {
        self.overlays.insert(record.handle, record);
    }

    /// Anzahl lebender Overlays.
    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    /// `true`, wenn keine Overlays existieren.
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    /// Overlay per Handle.
    pub fn get(&self, handle: OverlayHandle) -> Option<&OverlayRecord> {
        self.overlays.get(&handle)
    }

    /// Erstes Overlay zu einem Datensatz.
    pub fn find_by_record(&self, id: &RecordId) -> Option<&OverlayRecord> {
        self.overlays.values().find(|o| &o.record_id == id)
    }

    /// Alle Overlays in Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &OverlayRecord> {
        self.overlays.values()
    }

    /// Alle Handles in Reihenfolge.
    pub fn handles(&self) -> Vec<OverlayHandle> {
        self.overlays.keys().copied().collect()
    }

    /// IDs aller hervorgehobenen Overlays in Reihenfolge.
    pub fn selected_ids(&self) -> Vec<RecordId> {
        self.overlays
            .values()
            .filter(|o| o.selected)
            .map(|o| o.record_id.clone())
            .collect()
    }

    /// Setzt den Hervorhebungszustand und aktualisiert die Darstellung.
    ///
    /// Gibt `false` zurück, wenn das Overlay nicht (mehr) existiert.
    pub fn set_highlight(
        &mut self,
        handle: OverlayHandle,
        selected: bool,
        confirmed: bool,
        session: Option<&mut MapSession>,
        options: &OverlayOptions,
    ) -> bool {
        let Some(overlay) = self.overlays.get_mut(&handle) else {
            return false;
        };
        overlay.selected = selected;
        overlay.confirmed = selected && confirmed;
        if let Some(session) = session {
            session
                .map
                .set_overlay_style(handle, &overlay.style(options));
        }
        true
    }

    /// Nimmt jede nicht bestätigte Hervorhebung zurück.
    pub fn rollback_unconfirmed(
        &mut self,
        mut session: Option<&mut MapSession>,
        options: &OverlayOptions,
    ) -> usize {
        let mut restored = 0;
        for overlay in self.overlays.values_mut() {
            if overlay.selected && !overlay.confirmed {
                overlay.selected = false;
                restored += 1;
                if let Some(session) = session.as_deref_mut() {
                    session
                        .map
                        .set_overlay_style(overlay.handle, &overlay.style(options));
                }
            }
        }
        restored
    }

    /// Wendet geänderte Optionen auf alle Overlays an.
    pub fn restyle_all(&mut self, session: &mut MapSession, options: &OverlayOptions) {
        for overlay in self.overlays.values() {
            session
                .map
                .set_overlay_style(overlay.handle, &overlay.style(options));
        }
    }

    /// Entfernt alle Overlays von der Karte und leert die Registry.
    ///
    /// Ohne Karte (bereits abgebaut) wird nur die Registry geleert.
    pub fn clear(&mut self, session: Option<&mut MapSession>) {
        match session {
            Some(session) => {
                for handle in self.overlays.keys() {
                    session.map.remove_overlay(*handle);
                    session.map.unbind_all(*handle);
                }
            }
            None if !self.overlays.is_empty() => {
                log::debug!(
                    "Karte nicht mehr vorhanden, {} Overlays verworfen",
                    self.overlays.len()
                );
            }
            None => {}
        }
        self.overlays.clear();
    }
}
