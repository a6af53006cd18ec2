//! glow-backed rendering of the gradient quad.
//!
//! This module is only available when the `render` feature is enabled.
//!
//! # Module overview
//!
//! - [`backend`] -- The `GlBackend` seam and its `glow::Context` implementation.
//! - [`context`] -- GPU context wrapper that tracks bound buffer and active program.
//! - [`surface`] -- Surface/host traits and context acquisition.
//! - [`shader`] -- Best-effort shader compilation, linking, and location lookup.
//! - [`buffer`] -- Upload of the quad's position buffer.
//! - [`draw`] -- The single-frame draw and its lifecycle.
//! - [`canvas`] -- `QuadCanvas`, which runs all of the above at construction.

pub mod backend;
pub mod buffer;
pub mod canvas;
pub mod context;
pub mod draw;
pub mod shader;
pub mod surface;

#[cfg(test)]
pub(crate) mod mock;

// Re-export key types at the render module level for convenience.
pub use backend::{GlBackend, ShaderStage};
pub use buffer::{upload_quad, QuadBuffers};
pub use canvas::QuadCanvas;
pub use context::GpuContext;
pub use draw::FrameDrawer;
pub use shader::{
    build_program, compile_shader, format_shader_error, link_program, ProgramBuild, ProgramInfo,
};
pub use surface::{bind_surface, Surface, SurfaceBinding, SurfaceHost};
