//! Drawable surfaces and context acquisition.
//!
//! A [`Surface`] is whatever the host draws into (a `<canvas>` in the
//! browser); a [`SurfaceHost`] can make a new one and attach it to the
//! visible tree when the caller did not supply one.

use super::backend::GlBackend;
use super::context::GpuContext;
use crate::error::CanvasError;

/// Something that can be drawn into and can hand out a GPU context.
pub trait Surface {
    type Gl: GlBackend;

    /// Client (CSS layout) width and height in pixels.
    fn client_size(&self) -> (u32, u32);

    /// Requests a GPU context. `None` means the capability is unsupported.
    fn acquire_context(&self) -> Option<Self::Gl>;
}

/// The environment that owns the visible tree surfaces live in.
pub trait SurfaceHost {
    type Surface: Surface;

    /// Creates a new surface and attaches it to the document root.
    fn create_surface(&mut self) -> Result<Self::Surface, String>;
}

/// Result of binding: the surface in use, its context, and what went wrong.
pub struct SurfaceBinding<S: Surface> {
    pub surface: Option<S>,
    pub context: Option<GpuContext<S::Gl>>,
    pub issues: Vec<CanvasError>,
}

/// Uses `surface`, or creates one through `host`, and acquires its context.
///
/// Issues are returned in the order they happened; the caller logs them.
/// If the host cannot create a surface, or the surface cannot produce a
/// context, the binding has no context and nothing downstream can run.
pub fn bind_surface<H: SurfaceHost>(
    surface: Option<H::Surface>,
    host: &mut H,
) -> SurfaceBinding<H::Surface> {
    let mut issues = Vec::new();

    let surface = match surface {
        Some(s) => Some(s),
        None => {
            issues.push(CanvasError::MissingSurface);
            match host.create_surface() {
                Ok(s) => Some(s),
                Err(e) => {
                    issues.push(CanvasError::SurfaceCreation(e));
                    None
                }
            }
        }
    };

    let context = surface
        .as_ref()
        .and_then(Surface::acquire_context)
        .map(GpuContext::new);
    if surface.is_some() && context.is_none() {
        issues.push(CanvasError::ContextUnavailable);
    }

    SurfaceBinding {
        surface,
        context,
        issues,
    }
}
