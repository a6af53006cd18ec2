//! Camera, clear-state, and failure-policy settings for a [`QuadCanvas`].
//!
//! The defaults reproduce the fixed constants of the gradient canvas:
//! a 45° vertical field of view, near/far planes at 0.1/100.0, a camera
//! pulled back 4 units, and an opaque black clear.
//!
//! [`QuadCanvas`]: crate::render::QuadCanvas

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CanvasError;
use crate::params::{param_f64, param_rgba, param_string};

/// What the initializer does when a step fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Log the failure, record it, and keep going. Construction never fails.
    #[default]
    BestEffort,
    /// Run best-effort, then hand the first error-level failure back to the caller.
    Strict,
}

impl FailurePolicy {
    /// Parses `"best_effort"` or `"strict"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "best_effort" => Some(FailurePolicy::BestEffort),
            "strict" => Some(FailurePolicy::Strict),
            _ => None,
        }
    }
}

/// Settings for one canvas initialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Vertical field of view in degrees.
    pub fov_degrees: f64,
    pub z_near: f64,
    pub z_far: f64,
    /// Distance from the camera to the quad along -Z.
    pub camera_distance: f64,
    /// Multiplier applied to the unit-distance frustum extent when building
    /// the quad. At the default camera distance of 4 the default of 2 makes
    /// the quad exactly fill the view.
    pub quad_scale: f64,
    pub clear_color: [f32; 4],
    pub clear_depth: f32,
    pub failure_policy: FailurePolicy,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            z_near: 0.1,
            z_far: 100.0,
            camera_distance: 4.0,
            quad_scale: 2.0,
            clear_color: [0.0, 0.0, 0.0, 1.0],
            clear_depth: 1.0,
            failure_policy: FailurePolicy::BestEffort,
        }
    }
}

impl CanvasConfig {
    /// Builds a config from a JSON object of overrides.
    ///
    /// Missing or mistyped keys keep their defaults, as does an unknown
    /// `failure_policy` name. Call [`validate`](Self::validate) on the
    /// result before use.
    pub fn from_json(params: &Value) -> Self {
        let d = Self::default();
        let policy_name = param_string(params, "failure_policy", "best_effort");

        Self {
            fov_degrees: param_f64(params, "fov_degrees", d.fov_degrees),
            z_near: param_f64(params, "z_near", d.z_near),
            z_far: param_f64(params, "z_far", d.z_far),
            camera_distance: param_f64(params, "camera_distance", d.camera_distance),
            quad_scale: param_f64(params, "quad_scale", d.quad_scale),
            clear_color: param_rgba(params, "clear_color", d.clear_color),
            clear_depth: param_f64(params, "clear_depth", f64::from(d.clear_depth)) as f32,
            failure_policy: FailurePolicy::from_name(&policy_name).unwrap_or(d.failure_policy),
        }
    }

    /// Vertical field of view in radians.
    pub fn fov_radians(&self) -> f64 {
        self.fov_degrees.to_radians()
    }

    /// Checks that every value describes a usable camera.
    pub fn validate(&self) -> Result<(), CanvasError> {
        let finite = [
            self.fov_degrees,
            self.z_near,
            self.z_far,
            self.camera_distance,
            self.quad_scale,
            f64::from(self.clear_depth),
        ]
        .iter()
        .chain(self.clear_color.map(f64::from).iter())
        .all(|v| v.is_finite());

        if !finite {
            return Err(CanvasError::InvalidConfig(
                "all values must be finite".into(),
            ));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(CanvasError::InvalidConfig(format!(
                "fov_degrees must be in (0, 180), got {}",
                self.fov_degrees
            )));
        }
        if self.z_near <= 0.0 {
            return Err(CanvasError::InvalidConfig(format!(
                "z_near must be positive, got {}",
                self.z_near
            )));
        }
        if self.z_far <= self.z_near {
            return Err(CanvasError::InvalidConfig(format!(
                "z_far ({}) must be greater than z_near ({})",
                self.z_far, self.z_near
            )));
        }
        if self.camera_distance <= 0.0 || self.quad_scale <= 0.0 {
            return Err(CanvasError::InvalidConfig(
                "camera_distance and quad_scale must be positive".into(),
            ));
        }
        Ok(())
    }
}
