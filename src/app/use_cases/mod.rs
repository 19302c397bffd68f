//! Use-Cases der Application-Layer-Orchestrierung.

pub mod filter_bridge;
pub mod lifecycle;
pub mod overlays;
pub mod selection;
