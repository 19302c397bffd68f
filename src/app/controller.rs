//! Application Controller für zentrale Event-Verarbeitung.

use super::ports::MapHandle;
use super::state::MapSession;
use super::{AppCommand, AppIntent, AppState};

/// Orchestriert Karten-/Host-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Setzt eine (neue) Karten-Instanz.
    ///
    /// Ressourcen der alten Karte werden vorher freigegeben, danach wird
    /// `AppIntent::MapInstanceChanged` verarbeitet.
    pub fn attach_map(
        &mut self,
        state: &mut AppState,
        map: Box<dyn MapHandle>,
    ) -> anyhow::Result<()> {
        self.handle_command(state, AppCommand::ReleaseMapResources)?;
        state.map = Some(MapSession::new(map));
        self.handle_intent(state, AppIntent::MapInstanceChanged)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datensätze & Konfiguration ===
            AppCommand::SetRecords { records } => handlers::overlays::set_records(state, records),
            AppCommand::SetFieldConfig {
                fields,
                geometry_kind,
            } => handlers::overlays::set_field_config(state, fields, geometry_kind),
            AppCommand::ApplyOptions { options } => {
                handlers::overlays::apply_options(state, options)
            }

            // === Overlays ===
            AppCommand::RebuildOverlays => handlers::overlays::rebuild(state),
            AppCommand::BindOverlayClicks => handlers::overlays::bind_clicks(state),

            // === Verzögerte Aufgaben ===
            AppCommand::ScheduleSelectionClear => {
                handlers::lifecycle::schedule_selection_clear(state)
            }
            AppCommand::RunDeferredTasks => handlers::lifecycle::run_deferred(state),

            // === Klick-Modus ===
            AppCommand::ToggleClickSelection { overlay } => {
                handlers::selection::toggle_click(state, overlay)
            }
            AppCommand::ShowRecordDetail { overlay } => {
                handlers::selection::show_detail(state, overlay)
            }
            AppCommand::CloseRecordDetail => handlers::selection::close_detail(state),

            // === Lasso-Modus ===
            AppCommand::EnterLasso => handlers::selection::enter_lasso(state),
            AppCommand::ExitLasso => handlers::selection::exit_lasso(state),
            AppCommand::RearmLasso => handlers::selection::rearm_lasso(state),
            AppCommand::AcceptRegion { region, boundary } => {
                handlers::selection::accept_region(state, region, boundary)
            }
            AppCommand::ApplyBoundaryEdit { region, edit } => {
                handlers::selection::apply_boundary_edit(state, region, edit)
            }
            AppCommand::ConfirmRegion => handlers::selection::confirm_region(state),

            // === Lebenszyklus ===
            AppCommand::ReleaseMapResources => handlers::lifecycle::release_map_resources(state),
            AppCommand::ReleaseMap => handlers::lifecycle::release_map(state),
            AppCommand::Teardown => handlers::lifecycle::teardown(state),
        }

        Ok(())
    }
}
