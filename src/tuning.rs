//! Data-driven game balance
//!
//! Every gameplay constant lives in an immutable [`Tuning`] value that is
//! passed into session construction. The shipped game uses `Tuning::default()`;
//! tests construct alternates (zero gravity, huge spawn intervals) to pin down
//! behavior deterministically.

use serde::{Deserialize, Serialize};

/// Immutable gameplay parameters. All distances are logical units (pixels at
/// 1x scale), all rates are per simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield width
    pub width: f32,
    /// Playfield height
    pub height: f32,

    /// Downward acceleration added to bird velocity each tick
    pub gravity: f32,
    /// Velocity a flap overwrites the bird with (negative = up)
    pub flap_impulse: f32,
    /// Bird bounding box edge length (square)
    pub bird_size: f32,
    /// Bird start position as fractions of the playfield
    pub bird_start_x_frac: f32,
    pub bird_start_y_frac: f32,

    /// Horizontal pipe movement per tick
    pub pipe_speed: f32,
    /// Vertical extent of the passable gap
    pub pipe_gap: f32,
    /// Horizontal distance between consecutive pipes
    pub pipe_distance: f32,
    /// Pipe body width
    pub pipe_width: f32,
    /// Number of pipes seeded at session start
    pub initial_pipes: u32,
    /// X offset past the right edge for the first seeded pipe
    pub first_pipe_offset: f32,
    /// X offset past the right edge for dynamically spawned pipes
    pub spawn_offset: f32,
    /// Smallest allowed gap top offset
    pub gap_margin_top: f32,
    /// Gap top offset never exceeds `height - gap_margin_bottom`
    pub gap_margin_bottom: f32,

    /// Height of the ground band at the bottom of the playfield
    pub ground_height: f32,
    /// Soft upper boundary; the bird is clamped here instead of dying
    pub ceiling_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: crate::consts::LOGICAL_WIDTH,
            height: crate::consts::LOGICAL_HEIGHT,
            gravity: 0.45,
            flap_impulse: -9.5,
            bird_size: 34.0,
            bird_start_x_frac: 0.2,
            bird_start_y_frac: 0.45,
            pipe_speed: 3.0,
            pipe_gap: 180.0,
            pipe_distance: 300.0,
            pipe_width: 80.0,
            initial_pipes: 3,
            first_pipe_offset: 100.0,
            spawn_offset: 40.0,
            gap_margin_top: 120.0,
            gap_margin_bottom: 300.0,
            ground_height: 80.0,
            ceiling_y: -50.0,
        }
    }
}

impl Tuning {
    /// Y coordinate of the ground line the bird rests on
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Smallest gap top offset the RNG may roll
    pub fn gap_y_min(&self) -> f32 {
        self.gap_margin_top
    }

    /// Largest gap top offset the RNG may roll
    pub fn gap_y_max(&self) -> f32 {
        self.height - self.gap_margin_bottom
    }

    /// Ticks between dynamic pipe spawns; a new pipe appears the tick the
    /// spawn timer first exceeds this.
    pub fn spawn_interval_ticks(&self) -> u32 {
        (self.pipe_distance / self.pipe_speed) as u32
    }
}
