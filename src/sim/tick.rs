//! Fixed timestep simulation tick
//!
//! Advances one session by exactly one tick. All per-tick ordering lives
//! here: bird physics, spawn timer, pipe movement, scoring, collision,
//! recycling, and the ground/ceiling boundary checks.

use super::state::{GamePhase, GameState, Pipe};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump trigger (key press or pointer button)
    pub flap: bool,
}

/// Advance the session by one tick. A `GameOver` session is frozen; restart
/// is the caller replacing the whole `GameState`.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    let t = state.tuning;
    state.time_ticks += 1;

    // 1. bird physics
    if input.flap {
        state.bird.flap(&t);
        state.has_flapped = true;
    }
    state.bird.update(&t);

    // 2. spawn timer
    state.spawn_ticks += 1;
    if state.spawn_ticks > t.spawn_interval_ticks() {
        state.spawn_ticks = 0;
        let gap_y = state.roll_gap();
        state.pipes.push(Pipe::new(t.width + t.spawn_offset, gap_y));
    }

    // 3. pipes: move, score, collide
    let bird_box = state.bird.aabb(&t);
    let bird_x = state.bird.pos.x;
    let ground_y = state.ground_y;
    for pipe in &mut state.pipes {
        pipe.update(&t);
        if !pipe.passed && pipe.x + t.pipe_width < bird_x {
            pipe.passed = true;
            state.score += 1;
        }
        if pipe.collides_with(&bird_box, &t, ground_y) {
            state.phase = GamePhase::GameOver;
        }
    }

    // 4. recycle, keeping survivor order
    state.pipes.retain(|p| !p.offscreen(&t));

    // 5. boundaries: the ground kills, the ceiling forgives
    if state.bird.pos.y + t.bird_size >= state.ground_y {
        state.bird.pos.y = state.ground_y - t.bird_size;
        state.phase = GamePhase::GameOver;
    }
    if state.bird.pos.y < t.ceiling_y {
        state.bird.pos.y = t.ceiling_y;
        state.bird.vel = 0.0;
    }
}
