//! Per-draw camera state and the single-frame lifecycle.

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::config::CanvasConfig;
use crate::geometry::{aspect_ratio, QuadGeometry};

/// Where the frame drawer is in its one-shot lifecycle.
///
/// `Uninitialized → Configured → Drawn`. `Drawn` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameStage {
    #[default]
    Uninitialized,
    /// Fixed-function state has been set; the draw call has not been issued.
    Configured,
    Drawn,
}

/// Projection and view matrices for one draw.
///
/// Recomputed from the config and the surface's client size every time;
/// nothing is carried between draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameState {
    pub projection: Mat4,
    pub view: Mat4,
}

impl FrameState {
    /// Computes the matrices for a surface of the given client size.
    ///
    /// The projection uses OpenGL clip conventions (depth in [-1, 1]), the
    /// same matrix gl-matrix's `mat4.perspective` produces. The view is the
    /// identity translated back along -Z by `camera_distance`.
    pub fn compute(config: &CanvasConfig, width: u32, height: u32) -> Self {
        let projection = Mat4::perspective_rh_gl(
            config.fov_radians() as f32,
            aspect_ratio(width, height) as f32,
            config.z_near as f32,
            config.z_far as f32,
        );
        let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -config.camera_distance as f32));

        Self { projection, view }
    }

    /// Column-major projection matrix, ready for a uniform upload.
    pub fn projection_cols(&self) -> [f32; 16] {
        self.projection.to_cols_array()
    }

    /// Column-major view matrix, ready for a uniform upload.
    pub fn view_cols(&self) -> [f32; 16] {
        self.view.to_cols_array()
    }

    /// Projects a model-space point in the quad plane to normalized device
    /// coordinates.
    pub fn to_ndc(&self, x: f32, y: f32) -> [f32; 3] {
        let clip = self.projection * self.view * glam::Vec4::new(x, y, 0.0, 1.0);
        [clip.x / clip.w, clip.y / clip.w, clip.z / clip.w]
    }
}

/// Everything the single draw will upload, computed without a GPU.
///
/// Used by the CLI to print what a canvas of a given size would draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FramePlan {
    pub width: u32,
    pub height: u32,
    pub aspect: f64,
    pub geometry: QuadGeometry,
    pub frame: FrameState,
}

impl FramePlan {
    pub fn new(config: &CanvasConfig, width: u32, height: u32) -> Self {
        if height == 0 || width == 0 {
            log::warn!("planning a frame for a degenerate {width}x{height} surface");
        }
        Self {
            width,
            height,
            aspect: aspect_ratio(width, height),
            geometry: QuadGeometry::for_surface(config, width, height),
            frame: FrameState::compute(config, width, height),
        }
    }
}
