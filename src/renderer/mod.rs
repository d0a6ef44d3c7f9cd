//! WebGPU rendering module
//!
//! The scene is rebuilt as a flat-colored triangle list every frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{build_scene, draw_balloon, draw_catcher};
pub use vertex::Vertex;
