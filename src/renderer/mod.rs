//! WebGPU rendering module
//!
//! The scene is tessellated on the CPU into colored triangles in game units
//! and uploaded each frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
