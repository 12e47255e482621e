//! WebGPU rendering module
//!
//! A single vertex-colored pipeline; every frame is rebuilt as a flat
//! triangle list projected from the simulation state.

pub mod font;
pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::frame_vertices;
pub use pipeline::RenderState;
pub use vertex::Vertex;
