//! Headless runtime for the ANTIBODY simulation.
//!
//! Runs the engine on a dedicated thread at the target cadence and
//! exposes a command channel plus a shared latest-snapshot slot for a
//! presentation layer to poll.

pub mod game_loop;
pub mod state;
