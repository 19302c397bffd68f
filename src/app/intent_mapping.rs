//! Mapping von Karten- und Host-Intents auf mutierende App-Commands.
//!
//! Events für Listener, die nicht (mehr) gebunden sind, ergeben keine Commands.

use super::listeners::Binding;
use super::ports::{DrawEvent, ListenerTarget, MapEvent};
use super::state::InteractionMode;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapInstanceChanged => vec![
            AppCommand::RebuildOverlays,
            AppCommand::BindOverlayClicks,
            AppCommand::RearmLasso,
        ],
        AppIntent::MapDetached => vec![AppCommand::ReleaseMap],
        AppIntent::RecordsChanged { records } => vec![
            AppCommand::SetRecords { records },
            AppCommand::RebuildOverlays,
            AppCommand::BindOverlayClicks,
            AppCommand::ScheduleSelectionClear,
        ],
        AppIntent::FieldConfigChanged {
            fields,
            geometry_kind,
        } => vec![
            AppCommand::SetFieldConfig {
                fields,
                geometry_kind,
            },
            AppCommand::RebuildOverlays,
            AppCommand::BindOverlayClicks,
        ],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],

        AppIntent::OverlayClicked { overlay } => {
            let binding = Binding::Map(ListenerTarget::Overlay(overlay), MapEvent::Click);
            if !state.listeners.overlay_clicks.is_bound(&binding) {
                log::debug!("Klick auf ungebundenes Overlay {overlay:?} verworfen");
                return vec![];
            }
            if state.interaction_mode() == InteractionMode::Lasso {
                log::debug!("Klick auf {overlay:?} im Lasso-Modus verworfen");
                return vec![];
            }
            if state.collaborators.is_filter_connected() {
                vec![AppCommand::ToggleClickSelection { overlay }]
            } else {
                vec![AppCommand::ShowRecordDetail { overlay }]
            }
        }
        AppIntent::InteractionModeRequested { mode } => {
            match (state.interaction_mode(), mode) {
                (current, requested) if current == requested => vec![],
                (_, InteractionMode::Lasso) => vec![AppCommand::EnterLasso],
                (_, InteractionMode::Idle) => vec![AppCommand::ExitLasso],
            }
        }
        AppIntent::RegionCompleted { region, boundary } => {
            let binding = Binding::Drawing(DrawEvent::OverlayComplete);
            if state.listeners.draw_complete.is_bound(&binding) {
                vec![AppCommand::AcceptRegion { region, boundary }]
            } else {
                log::debug!("Region {region:?} ohne aktives Zeichenwerkzeug verworfen");
                vec![]
            }
        }
        AppIntent::RegionBoundaryEdited { region, edit } => {
            let binding = Binding::Map(ListenerTarget::RegionBoundary(region), edit.event());
            let bound = state
                .selection
                .region()
                .is_some_and(|r| r.handle == region && r.listeners.is_bound(&binding));
            if bound {
                vec![AppCommand::ApplyBoundaryEdit { region, edit }]
            } else {
                log::debug!("Randänderung {edit:?} an ungebundener Region {region:?} verworfen");
                vec![]
            }
        }
        AppIntent::ConfirmSelectionRequested => {
            if state.can_confirm_selection() {
                vec![AppCommand::ConfirmRegion]
            } else {
                vec![]
            }
        }
        AppIntent::DetailViewClosed => vec![AppCommand::CloseRecordDetail],
        AppIntent::UpdateSettled => vec![AppCommand::RunDeferredTasks],
        AppIntent::TeardownRequested => vec![AppCommand::Teardown],
    }
}
