//! Begrenztes Command-Log zur Nachvollziehbarkeit ausgeführter Schritte.

use super::AppCommand;

/// Speichert ausgeführte Commands (Debug-Darstellung) in Reihenfolge.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<String>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, ältere Einträge werden verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(format!("{command:?}"));
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Anzahl der Einträge, die mit dem Command-Namen beginnen.
    pub fn count_of(&self, name: &str) -> usize {
        self.entries.iter().filter(|e| e.starts_with(name)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_bounded_and_keeps_newest_entries() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::RebuildOverlays);
        }
        log.record(&AppCommand::Teardown);

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert_eq!(log.entries().last().map(String::as_str), Some("Teardown"));
        assert_eq!(log.count_of("Teardown"), 1);
    }
}
