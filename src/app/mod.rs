// ArgMark - app/mod.rs
//
// Application layer: orchestration, state management, sample loading,
// session persistence.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod sample_mgr;
pub mod session;
pub mod state;
