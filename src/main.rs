//! Native entry point: window, event loop, and the fixed 60 Hz tick.

use std::mem;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use pipedash::Tuning;
use pipedash::consts::{LOGICAL_HEIGHT, LOGICAL_WIDTH, TICK_HZ};
use pipedash::highscore::{HIGHSCORE_FILE, Highscore};
use pipedash::renderer::{RenderState, frame_vertices};
use pipedash::sim::{GamePhase, GameState, TickInput, tick};

const WINDOW_TITLE: &str = "Pipe Dash";

fn tick_period() -> Duration {
    Duration::from_nanos(1_000_000_000 / TICK_HZ as u64)
}

/// Wall-clock seed so every launch deals a different pipe sequence
fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

struct App {
    window: Option<Arc<Window>>,
    gfx: Option<RenderState>,
    state: GameState,
    input: TickInput,
    highscore: Highscore,
    next_tick: Instant,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            gfx: None,
            state: GameState::new(Tuning::default(), time_seed()),
            input: TickInput::default(),
            highscore: Highscore::load(HIGHSCORE_FILE),
            next_tick: Instant::now(),
        }
    }

    /// A flap press either feeds the current session or, after a crash,
    /// replaces it wholesale with a freshly seeded one.
    fn trigger_flap(&mut self) {
        match self.state.phase {
            GamePhase::Active => self.input.flap = true,
            GamePhase::GameOver => {
                log::info!("restarting after a run of {}", self.state.score);
                self.state = GameState::new(self.state.tuning, time_seed());
                self.input = TickInput::default();
            }
        }
    }

    /// Advance exactly one simulation tick, consuming the buffered input
    fn step(&mut self) {
        let input = mem::take(&mut self.input);
        tick(&mut self.state, &input);
        if self.highscore.submit(self.state.score) {
            log::info!("new highscore: {}", self.state.score);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = Arc::new(
            event_loop
                .create_window(
                    Window::default_attributes()
                        .with_title(WINDOW_TITLE)
                        .with_inner_size(LogicalSize::new(
                            LOGICAL_WIDTH as f64,
                            LOGICAL_HEIGHT as f64,
                        ))
                        .with_resizable(false),
                )
                .expect("Failed to create window"),
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("No suitable GPU adapter");

        let size = window.inner_size();
        let gfx = pollster::block_on(RenderState::new(surface, &adapter, size.width, size.height));

        log::info!("window up at {}x{} physical", size.width, size.height);
        self.next_tick = Instant::now();
        self.window = Some(window);
        self.gfx = Some(gfx);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Space) => self.trigger_flap(),
                        PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                        _ => {}
                    }
                }
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.trigger_flap(),

            WindowEvent::Resized(size) => {
                if let Some(gfx) = self.gfx.as_mut() {
                    gfx.resize(size.width, size.height);
                }
            }

            WindowEvent::RedrawRequested => {
                let Some(gfx) = self.gfx.as_mut() else {
                    return;
                };
                let vertices = frame_vertices(&self.state, self.highscore.value());
                match gfx.render(&vertices) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let (w, h) = gfx.size;
                        gfx.resize(w, h);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("out of GPU memory, exiting");
                        event_loop.exit();
                    }
                    Err(err) => log::warn!("surface error: {err:?}"),
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now >= self.next_tick {
            self.step();
            // No catch-up: after a stall, resync instead of bursting ticks
            self.next_tick += tick_period();
            if self.next_tick < now {
                self.next_tick = now + tick_period();
            }
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_tick));
    }
}

fn main() -> Result<(), winit::error::EventLoopError> {
    env_logger::init();

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)
}
