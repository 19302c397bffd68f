//! Verzögerte Aufgaben, die erst nach Abschluss des aktuellen Updates laufen.
//!
//! Der Host meldet mit `AppIntent::UpdateSettled`, dass das synchrone Update
//! abgeschlossen ist. Eine neu geplante Aufgabe gleicher Art ersetzt (storniert)
//! die ältere.

use indexmap::IndexMap;

/// Art einer verzögerten Aufgabe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredTask {
    /// Selektionsergebnis leeren (nach Datensatz-Wechsel)
    ClearSelectionResult,
}

/// Warteschlange geplanter Aufgaben mit Generations-Token.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    pending: IndexMap<DeferredTask, u64>,
    next_token: u64,
}

impl DeferredQueue {
    /// Erstellt eine leere Warteschlange.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant eine Aufgabe und gibt ihr Token zurück.
    pub fn schedule(&mut self, task: DeferredTask) -> u64 {
        self.next_token += 1;
        let token = self.next_token;
        if let Some(old) = self.pending.insert(task, token) {
            log::debug!("Verzögerte Aufgabe {task:?} (#{old}) durch #{token} ersetzt");
        }
        token
    }

    /// Storniert eine geplante Aufgabe.
    pub fn cancel(&mut self, task: DeferredTask) -> bool {
        self.pending.shift_remove(&task).is_some()
    }

    /// Storniert alle Aufgaben.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Ob eine Aufgabe geplant ist.
    pub fn is_pending(&self, task: DeferredTask) -> bool {
        self.pending.contains_key(&task)
    }

    /// Entnimmt alle fälligen Aufgaben in Planungsreihenfolge.
    pub fn take_due(&mut self) -> Vec<DeferredTask> {
        self.pending.drain(..).map(|(task, _)| task).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_schedule_replaces_pending_task() {
        let mut queue = DeferredQueue::new();
        let first = queue.schedule(DeferredTask::ClearSelectionResult);
        let second = queue.schedule(DeferredTask::ClearSelectionResult);

        assert!(second > first);
        assert_eq!(queue.take_due(), vec![DeferredTask::ClearSelectionResult]);
        assert!(queue.take_due().is_empty());
    }

    #[test]
    fn cancelled_task_does_not_run() {
        let mut queue = DeferredQueue::new();
        queue.schedule(DeferredTask::ClearSelectionResult);
        assert!(queue.cancel(DeferredTask::ClearSelectionResult));
        assert!(!queue.is_pending(DeferredTask::ClearSelectionResult));
        assert!(queue.take_due().is_empty());
    }
}
