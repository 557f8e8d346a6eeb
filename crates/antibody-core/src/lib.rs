//! Core types and definitions for the ANTIBODY simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, the map model, and
//! constants. It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod map;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
