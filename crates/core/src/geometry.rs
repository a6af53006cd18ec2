//! View-aligned quad geometry.
//!
//! The quad is drawn as a four-vertex triangle strip in the z = 0 plane of
//! model space. Its corners sit at `±quad_scale * y_fov * aspect` and
//! `±quad_scale * y_fov`, where `y_fov = 2 * tan(fov / 2)` is the full height
//! of the view frustum one unit in front of the camera.
//!
//! With the default camera (4 units back, `quad_scale` 2) the half-height of
//! the quad is `4 * tan(fov / 2)`, which is exactly the half-height of the
//! frustum at the quad's depth: the quad covers the whole view and nothing
//! more.

use serde::Serialize;

use crate::config::CanvasConfig;

/// Vertices in the strip.
pub const VERTEX_COUNT: usize = 4;

/// Components per vertex position (x, y).
pub const COMPONENTS_PER_VERTEX: usize = 2;

/// Width over height, computed the way the browser does for client sizes.
///
/// A zero height gives a non-finite result; callers decide whether that is
/// worth reporting.
pub fn aspect_ratio(width: u32, height: u32) -> f64 {
    f64::from(width) / f64::from(height)
}

/// Full height of the view frustum at unit distance: `2 * tan(fov / 2)`.
pub fn frustum_height(fov_radians: f64) -> f64 {
    (fov_radians / 2.0).tan() * 2.0
}

/// CPU-side copy of the quad's vertex positions, in strip order:
/// top-right, top-left, bottom-right, bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuadGeometry {
    positions: [f32; VERTEX_COUNT * COMPONENTS_PER_VERTEX],
}

impl QuadGeometry {
    /// Builds the quad for a surface of the given client size.
    ///
    /// Math runs in f64 and is narrowed to f32 per component, so the values
    /// match what a double-precision host would upload into a float buffer.
    pub fn for_surface(config: &CanvasConfig, width: u32, height: u32) -> Self {
        let aspect = aspect_ratio(width, height);
        let y = frustum_height(config.fov_radians());
        let s = config.quad_scale;

        let positions = [
            s * y * aspect,
            s * y,
            s * -y * aspect,
            s * y,
            s * y * aspect,
            s * -y,
            s * -y * aspect,
            s * -y,
        ]
        .map(|v| v as f32);

        Self { positions }
    }

    /// The flat position array as uploaded to the GPU.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// The `i`-th vertex as `[x, y]`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= VERTEX_COUNT`.
    pub fn vertex(&self, i: usize) -> [f32; 2] {
        let base = i * COMPONENTS_PER_VERTEX;
        [self.positions[base], self.positions[base + 1]]
    }

    /// Size of the position data in bytes.
    pub fn byte_len(&self) -> usize {
        std::mem::size_of_val(&self.positions)
    }
}
