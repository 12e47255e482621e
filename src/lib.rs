//! Pipe Dash - a gravity-and-gaps reflex arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `highscore`: Best-effort highscore persistence
//! - `tuning`: Data-driven game balance

pub mod highscore;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Loop and surface constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_HZ as f32;

    /// Logical playfield size. The window is created at this size and the
    /// renderer maps logical coordinates to the surface regardless of DPI.
    pub const LOGICAL_WIDTH: f32 = 432.0;
    pub const LOGICAL_HEIGHT: f32 = 768.0;
}
