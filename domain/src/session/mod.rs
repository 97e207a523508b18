//! Turn processing domain.
//!
//! - [`event::PhaseEvent`]: ordered phase transitions of one turn
//! - [`event::TurnPhase`]: the engine's state machine position
//! - [`processing::ProcessingState`]: what the UI shows while a turn runs

pub mod event;
pub mod processing;
