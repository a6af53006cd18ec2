//! The single-frame draw.

use super::backend::GlBackend;
use super::buffer::QuadBuffers;
use super::context::GpuContext;
use super::shader::ProgramInfo;
use crate::config::CanvasConfig;
use crate::error::CanvasError;
use crate::frame::{FrameStage, FrameState};
use crate::geometry::{COMPONENTS_PER_VERTEX, VERTEX_COUNT};

/// Points the position attribute at the quad buffer.
///
/// Binds the buffer first: `vertexAttribPointer` captures whatever is bound
/// to `ARRAY_BUFFER` at the time of the call.
fn set_position_attribute<G: GlBackend>(
    ctx: &mut GpuContext<G>,
    buffers: &QuadBuffers<G>,
    location: u32,
) {
    ctx.bind_array_buffer(Some(buffers.position));
    ctx.gl().vertex_attrib_pointer_f32(
        location,
        COMPONENTS_PER_VERTEX as i32,
        glow::FLOAT,
        false,
        0,
        0,
    );
    ctx.gl().enable_vertex_attrib_array(location);
}

/// Issues the one draw of the canvas and tracks where it is in
/// `Uninitialized → Configured → Drawn`.
#[derive(Debug, Default)]
pub struct FrameDrawer {
    stage: FrameStage,
}

impl FrameDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> FrameStage {
        self.stage
    }

    /// Draws the quad.
    ///
    /// Missing pieces are skipped rather than fatal: without a linked
    /// program the attribute and uniforms are not set, and without a buffer
    /// the attribute is not pointed anywhere, but state is still configured
    /// and the draw call still issued.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::AlreadyDrawn`, logged at warn level and issuing
    /// no GPU calls, once the frame has been drawn.
    pub fn draw<G: GlBackend>(
        &mut self,
        ctx: &mut GpuContext<G>,
        program: &ProgramInfo<G>,
        buffers: Option<&QuadBuffers<G>>,
        frame: &FrameState,
        config: &CanvasConfig,
    ) -> Result<(), CanvasError> {
        if self.stage == FrameStage::Drawn {
            log::warn!("{}", CanvasError::AlreadyDrawn);
            return Err(CanvasError::AlreadyDrawn);
        }

        let gl = ctx.gl();
        let [r, g, b, a] = config.clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear_depth(config.clear_depth);
        gl.enable(glow::DEPTH_TEST);
        gl.depth_func(glow::LEQUAL);
        self.stage = FrameStage::Configured;

        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);

        if let (Some(buffers), Some(location)) = (buffers, program.vertex_position) {
            set_position_attribute(ctx, buffers, location);
        }

        // Uniform locations only mean something for the program in use.
        ctx.use_program(program.program);
        let gl = ctx.gl();
        gl.uniform_matrix_4_f32(
            program.projection_matrix.as_ref(),
            false,
            &frame.projection_cols(),
        );
        gl.uniform_matrix_4_f32(program.model_view_matrix.as_ref(), false, &frame.view_cols());

        gl.draw_arrays(glow::TRIANGLE_STRIP, 0, VERTEX_COUNT as i32);
        self.stage = FrameStage::Drawn;

        Ok(())
    }
}
