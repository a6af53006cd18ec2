//! GPU upload of the quad's position data.

use super::backend::GlBackend;
use super::context::GpuContext;
use crate::error::CanvasError;
use crate::geometry::QuadGeometry;

/// GPU buffers backing the quad. Created once and never freed.
pub struct QuadBuffers<G: GlBackend> {
    pub position: G::Buffer,
}

/// Creates the position buffer and fills it with `geometry` as static data.
///
/// The buffer is left bound to `ARRAY_BUFFER`; the context records that.
///
/// # Errors
///
/// Returns `CanvasError::Buffer` if the backend cannot create a buffer.
pub fn upload_quad<G: GlBackend>(
    ctx: &mut GpuContext<G>,
    geometry: &QuadGeometry,
) -> Result<QuadBuffers<G>, CanvasError> {
    let position = ctx.gl().create_buffer().map_err(CanvasError::Buffer)?;

    ctx.bind_array_buffer(Some(position));
    ctx.gl()
        .buffer_data_f32(glow::ARRAY_BUFFER, geometry.positions(), glow::STATIC_DRAW);

    log::debug!("uploaded {} bytes of quad positions", geometry.byte_len());
    Ok(QuadBuffers { position })
}
