//! Controller layer: UI actions, reducer-like state transitions, and action dispatch.

pub mod events;
pub mod orchestration;
pub mod reducer;
