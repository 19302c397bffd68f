//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod deferred;
pub mod events;
pub mod handlers;
pub mod headless;
mod intent_mapping;
pub mod listeners;
pub mod ports;
pub mod registry;
/// Application State
///
/// Dieses Modul verwaltet den Zustand des Karten-Blocks (Datensätze, Overlays, Selektion).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use ports::{
    DetailView, DrawEvent, DrawShape, DrawingTool, FilterConnection, FilterOperator,
    FilterPredicate, ListenerId, ListenerTarget, MapEvent, MapHandle, OverlayHandle,
    SelectionSink,
};
pub use registry::{OverlayRecord, OverlayRegistry};
pub use state::{
    AppState, BoundaryEdit, Collaborators, InteractionMode, MapSession, SelectionPhase,
    SelectionState,
};
