//! Frame assembly
//!
//! Turns a [`GameState`] into the flat triangle list the pipeline draws.
//! Painter's order: pipes, ground band, bird, HUD text, overlays.

use glam::Vec2;

use super::font::{push_text, push_text_centered};
use super::shapes::{push_circle, push_rect, push_rotated_rect};
use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, GameState, Rect};

/// Extra width of a pipe lip cap on each side
const LIP_OVERHANG: f32 = 4.0;
/// Lip cap height
const LIP_HEIGHT: f32 = 14.0;

const EYE_SEGMENTS: u32 = 12;

/// Build the complete vertex list for one frame
pub fn frame_vertices(state: &GameState, highscore: u32) -> Vec<Vertex> {
    let t = &state.tuning;
    let mut out = Vec::with_capacity(1024);

    // Pipes run to the bottom of the field; the ground band paints over the
    // stretch below the collision line.
    for pipe in &state.pipes {
        let (upper, lower) = pipe.body_rects(t, t.height);
        push_rect(&mut out, &upper, colors::PIPE);
        push_rect(&mut out, &lower, colors::PIPE);

        let lip_w = t.pipe_width + 2.0 * LIP_OVERHANG;
        let lip_x = pipe.x - LIP_OVERHANG;
        push_rect(
            &mut out,
            &Rect::new(lip_x, pipe.gap_y - LIP_HEIGHT, lip_w, LIP_HEIGHT),
            colors::PIPE,
        );
        push_rect(
            &mut out,
            &Rect::new(lip_x, pipe.gap_y + t.pipe_gap, lip_w, LIP_HEIGHT),
            colors::PIPE,
        );
    }

    push_rect(
        &mut out,
        &Rect::new(0.0, state.ground_y, t.width, t.height - state.ground_y),
        colors::GROUND,
    );

    // Bird: tilted body square plus an eye offset toward the upper-right,
    // rotated with the body so the tilt reads at a glance.
    let body = state.bird.aabb(t);
    push_rotated_rect(&mut out, &body, state.bird.rot, colors::BIRD);

    let center = Vec2::new(body.x + body.w / 2.0, body.y + body.h / 2.0);
    let eye_offset = Vec2::new(body.w / 4.0, -body.h / 4.0);
    let angle = -state.bird.rot.to_radians();
    let (sin, cos) = angle.sin_cos();
    let eye = center
        + Vec2::new(
            eye_offset.x * cos - eye_offset.y * sin,
            eye_offset.x * sin + eye_offset.y * cos,
        );
    push_circle(&mut out, eye, body.w / 8.0, colors::EYE, EYE_SEGMENTS);

    // HUD
    push_text_centered(
        &mut out,
        &state.score.to_string(),
        t.width / 2.0,
        90.0,
        8.0,
        colors::TEXT,
    );
    push_text(
        &mut out,
        &format!("HIGH: {highscore}"),
        10.0,
        10.0,
        3.0,
        colors::TEXT,
    );

    match state.phase {
        GamePhase::Active => {
            if !state.has_flapped {
                push_text_centered(
                    &mut out,
                    "PRESS SPACE OR CLICK TO FLAP",
                    t.width / 2.0,
                    t.height / 2.0,
                    2.0,
                    colors::TEXT,
                );
            }
        }
        GamePhase::GameOver => {
            push_text_centered(
                &mut out,
                "GAME OVER",
                t.width / 2.0,
                t.height / 2.0 - 40.0,
                5.0,
                colors::GAME_OVER,
            );
            push_text_centered(
                &mut out,
                "PRESS SPACE TO RESTART",
                t.width / 2.0,
                t.height / 2.0 + 30.0,
                2.0,
                colors::TEXT,
            );
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::{TickInput, tick};

    fn count_color(v: &[Vertex], color: [f32; 4]) -> usize {
        v.iter().filter(|p| p.color == color).count()
    }

    #[test]
    fn triangle_list_is_well_formed() {
        let state = GameState::new(Tuning::default(), 1);
        let v = frame_vertices(&state, 0);
        assert!(!v.is_empty());
        assert_eq!(v.len() % 3, 0);
    }

    #[test]
    fn ground_band_spans_the_field() {
        let state = GameState::new(Tuning::default(), 1);
        let v = frame_vertices(&state, 0);
        let ground: Vec<&Vertex> = v.iter().filter(|p| p.color == colors::GROUND).collect();
        assert_eq!(ground.len(), 6);
        assert!(ground.iter().any(|p| p.position[0] == 0.0));
        assert!(ground.iter().any(|p| p.position[0] == 432.0));
        assert!(ground.iter().all(|p| p.position[1] >= 688.0));
    }

    #[test]
    fn each_pipe_emits_body_and_lips() {
        let state = GameState::new(Tuning::default(), 1);
        let v = frame_vertices(&state, 0);
        // 4 rects of 6 vertices per pipe
        assert_eq!(count_color(&v, colors::PIPE), state.pipes.len() * 4 * 6);
    }

    #[test]
    fn intro_overlay_clears_after_first_flap() {
        let mut state = GameState::new(Tuning::default(), 1);
        let before = frame_vertices(&state, 0).len();

        tick(&mut state, &TickInput { flap: true });
        let after = frame_vertices(&state, 0).len();
        assert!(after < before, "intro text should disappear after a flap");
    }

    #[test]
    fn game_over_adds_crimson_banner() {
        let mut state = GameState::new(Tuning::default(), 1);
        let active = frame_vertices(&state, 0);
        assert_eq!(count_color(&active, colors::GAME_OVER), 0);

        state.phase = GamePhase::GameOver;
        let over = frame_vertices(&state, 0);
        assert!(count_color(&over, colors::GAME_OVER) > 0);
    }

    #[test]
    fn highscore_readout_grows_with_digits() {
        let state = GameState::new(Tuning::default(), 1);
        let small = frame_vertices(&state, 5);
        let large = frame_vertices(&state, 12345);
        assert!(large.len() > small.len());
    }
}
