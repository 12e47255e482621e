//! Game state and core simulation types
//!
//! One session of play is a [`GameState`] value. Restarting never patches a
//! session in place; the caller constructs a brand-new `GameState`, which
//! rules out stale score/flag bugs by construction.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Bird is live and the simulation advances each tick
    Active,
    /// Run ended; the session is frozen until replaced
    GameOver,
}

/// The player's bird. Position is the top-left corner of its bounding box;
/// only y ever changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    /// Vertical velocity, units per tick (positive = down)
    pub vel: f32,
    /// Visual tilt in degrees, derived from velocity. Rendering only.
    pub rot: f32,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.width * tuning.bird_start_x_frac,
                tuning.height * tuning.bird_start_y_frac,
            ),
            vel: 0.0,
            rot: 0.0,
        }
    }

    /// Advance one tick of free fall. Velocity is never clamped.
    pub fn update(&mut self, tuning: &Tuning) {
        self.vel += tuning.gravity;
        self.pos.y += self.vel;
        self.rot = (-self.vel * 3.0).clamp(-90.0, 25.0);
    }

    /// Overwrite velocity with the flap impulse. Repeated flaps never stack;
    /// each one resets to the same impulse.
    pub fn flap(&mut self, tuning: &Tuning) {
        self.vel = tuning.flap_impulse;
    }

    /// Bounding box derived from position and the fixed bird size
    pub fn aabb(&self, tuning: &Tuning) -> Rect {
        Rect::new(self.pos.x, self.pos.y, tuning.bird_size, tuning.bird_size)
    }
}

/// One obstacle: a solid column with a passable gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// X of the leading (left) edge; decreases every tick
    pub x: f32,
    /// Y of the top of the passable gap
    pub gap_y: f32,
    /// One-way flag: set the tick the trailing edge moves behind the bird,
    /// consumed exactly once for scoring
    pub passed: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_y: f32) -> Self {
        Self {
            x,
            gap_y,
            passed: false,
        }
    }

    /// Advance one tick leftward
    pub fn update(&mut self, tuning: &Tuning) {
        self.x -= tuning.pipe_speed;
    }

    /// True once the trailing edge has left the visible area
    pub fn offscreen(&self, tuning: &Tuning) -> bool {
        self.x + tuning.pipe_width < 0.0
    }

    /// The two solid segments: above the gap down from the top of the field,
    /// and below the gap down to `floor_y` (the ground line).
    pub fn body_rects(&self, tuning: &Tuning, floor_y: f32) -> (Rect, Rect) {
        let upper = Rect::new(self.x, 0.0, tuning.pipe_width, self.gap_y);
        let lower_top = self.gap_y + tuning.pipe_gap;
        let lower = Rect::new(self.x, lower_top, tuning.pipe_width, floor_y - lower_top);
        (upper, lower)
    }

    /// Does `bird_box` overlap either solid segment? Overlap with the gap
    /// itself never collides.
    pub fn collides_with(&self, bird_box: &Rect, tuning: &Tuning, floor_y: f32) -> bool {
        let (upper, lower) = self.body_rects(tuning, floor_y);
        upper.intersects(bird_box) || lower.intersects(bird_box)
    }
}

/// Complete session state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Immutable balance parameters for this session
    pub tuning: Tuning,
    /// Session seed for reproducibility
    pub seed: u64,
    /// Gap placement RNG
    rng: Pcg32,
    pub bird: Bird,
    /// Obstacles, oldest (leftmost) first
    pub pipes: Vec<Pipe>,
    /// Monotonic within the session, reset only by constructing a new one
    pub score: u32,
    /// Y of the line the bird dies on
    pub ground_y: f32,
    pub phase: GamePhase,
    /// Ticks since the last dynamic spawn
    pub spawn_ticks: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// False until the first flap of this session; drives the intro overlay
    pub has_flapped: bool,
}

impl GameState {
    /// The `new_game` factory: bird at the fixed start with zero velocity,
    /// the initial pipe fence spaced at `pipe_distance` with independently
    /// rolled gaps, score zero, phase Active.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let start_x = tuning.width + tuning.first_pipe_offset;
        let pipes = (0..tuning.initial_pipes)
            .map(|i| {
                let gap_y = roll_gap_y(&mut rng, &tuning);
                Pipe::new(start_x + i as f32 * tuning.pipe_distance, gap_y)
            })
            .collect();

        Self {
            bird: Bird::new(&tuning),
            pipes,
            score: 0,
            ground_y: tuning.ground_y(),
            phase: GamePhase::Active,
            spawn_ticks: 0,
            time_ticks: 0,
            has_flapped: false,
            tuning,
            seed,
            rng,
        }
    }

    /// Roll a fresh gap offset for a dynamically spawned pipe
    pub fn roll_gap(&mut self) -> f32 {
        roll_gap_y(&mut self.rng, &self.tuning)
    }
}

/// Gap top offset, uniform over the legal band
fn roll_gap_y(rng: &mut Pcg32, tuning: &Tuning) -> f32 {
    rng.random_range(tuning.gap_y_min()..=tuning.gap_y_max())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_matches_factory_contract() {
        let t = Tuning::default();
        let state = GameState::new(t, 7);

        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);
        assert!(!state.has_flapped);
        assert_eq!(state.ground_y, 688.0);

        assert_eq!(state.bird.pos, Vec2::new(432.0 * 0.2, 768.0 * 0.45));
        assert_eq!(state.bird.vel, 0.0);

        assert_eq!(state.pipes.len(), 3);
        for (i, pipe) in state.pipes.iter().enumerate() {
            assert_eq!(pipe.x, 532.0 + i as f32 * 300.0);
            assert!(pipe.gap_y >= t.gap_y_min() && pipe.gap_y <= t.gap_y_max());
            assert!(!pipe.passed);
        }
    }

    #[test]
    fn same_seed_same_fence() {
        let a = GameState::new(Tuning::default(), 99);
        let b = GameState::new(Tuning::default(), 99);
        assert_eq!(a.pipes, b.pipes);
    }

    #[test]
    fn flap_overwrites_velocity_exactly() {
        let t = Tuning::default();
        let mut bird = Bird::new(&t);
        bird.vel = 5.0;
        bird.flap(&t);
        // exact overwrite, never 5.0 - 9.5
        assert_eq!(bird.vel, -9.5);
        bird.flap(&t);
        assert_eq!(bird.vel, -9.5);
    }

    #[test]
    fn one_tick_of_gravity() {
        let t = Tuning::default();
        let mut bird = Bird::new(&t);
        let y0 = bird.pos.y;
        bird.update(&t);
        assert_eq!(bird.vel, 0.45);
        assert_eq!(bird.pos.y, y0 + 0.45);
    }

    #[test]
    fn rotation_tracks_velocity_within_limits() {
        let t = Tuning::default();
        let mut bird = Bird::new(&t);

        bird.vel = -9.5 - t.gravity;
        bird.update(&t);
        assert_eq!(bird.rot, 25.0); // rising caps at 25 degrees

        bird.vel = 40.0;
        bird.update(&t);
        assert_eq!(bird.rot, -90.0); // steep dive caps at -90
    }

    #[test]
    fn offscreen_uses_trailing_edge() {
        let t = Tuning::default();
        assert!(Pipe::new(-85.0, 200.0).offscreen(&t)); // -85 + 80 = -5
        assert!(!Pipe::new(-79.0, 200.0).offscreen(&t)); // -79 + 80 = 1
        assert!(!Pipe::new(-80.0, 200.0).offscreen(&t)); // exactly 0 is visible
    }

    #[test]
    fn body_rects_bracket_the_gap() {
        let t = Tuning::default();
        let pipe = Pipe::new(100.0, 250.0);
        let (upper, lower) = pipe.body_rects(&t, t.ground_y());

        assert_eq!(upper, Rect::new(100.0, 0.0, 80.0, 250.0));
        assert_eq!(lower.y, 250.0 + 180.0);
        assert_eq!(lower.bottom(), t.ground_y());
    }

    #[test]
    fn gap_region_never_collides() {
        let t = Tuning::default();
        let pipe = Pipe::new(80.0, 300.0);
        // bird box fully inside the gap, horizontally overlapping the pipe
        let in_gap = Rect::new(90.0, 350.0, t.bird_size, t.bird_size);
        assert!(!pipe.collides_with(&in_gap, &t, t.ground_y()));

        let in_upper = Rect::new(90.0, 100.0, t.bird_size, t.bird_size);
        assert!(pipe.collides_with(&in_upper, &t, t.ground_y()));

        let in_lower = Rect::new(90.0, 500.0, t.bird_size, t.bird_size);
        assert!(pipe.collides_with(&in_lower, &t, t.ground_y()));
    }
}
