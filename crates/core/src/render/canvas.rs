//! `QuadCanvas`: binds a surface, builds the program, uploads the quad, and
//! draws it once, all at construction.

use super::buffer::{upload_quad, QuadBuffers};
use super::context::GpuContext;
use super::draw::FrameDrawer;
use super::shader::{build_program, ProgramInfo};
use super::surface::{bind_surface, Surface, SurfaceHost};
use crate::config::{CanvasConfig, FailurePolicy};
use crate::error::CanvasError;
use crate::frame::{FrameStage, FrameState};
use crate::geometry::QuadGeometry;

/// A surface with a gradient quad drawn on it.
///
/// Construction runs the whole pipeline. Under the default
/// [`FailurePolicy::BestEffort`] it never fails: each problem is logged at
/// its [level](CanvasError::level), recorded in [`issues`](Self::issues),
/// and the remaining steps run with whatever is available. Nothing is ever
/// released; the canvas owns its surface, context, program, and buffer for
/// its whole life.
pub struct QuadCanvas<S: Surface> {
    surface: Option<S>,
    context: Option<GpuContext<S::Gl>>,
    program: Option<ProgramInfo<S::Gl>>,
    buffers: Option<QuadBuffers<S::Gl>>,
    drawer: FrameDrawer,
    config: CanvasConfig,
    issues: Vec<CanvasError>,
}

impl<S: Surface> QuadCanvas<S> {
    /// Builds and draws a canvas with the default config.
    ///
    /// When `surface` is `None`, `host` creates one and attaches it to the
    /// document.
    pub fn new<H>(surface: Option<S>, host: &mut H, vertex_src: &str, fragment_src: &str) -> Self
    where
        H: SurfaceHost<Surface = S>,
    {
        Self::initialize(surface, host, vertex_src, fragment_src, CanvasConfig::default())
    }

    /// Builds and draws a canvas with `config`.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::InvalidConfig` if `config` does not validate.
    /// With [`FailurePolicy::Strict`], also returns the first error-level
    /// issue met during the (still complete) best-effort run.
    pub fn with_config<H>(
        surface: Option<S>,
        host: &mut H,
        vertex_src: &str,
        fragment_src: &str,
        config: CanvasConfig,
    ) -> Result<Self, CanvasError>
    where
        H: SurfaceHost<Surface = S>,
    {
        config.validate()?;
        let policy = config.failure_policy;
        let canvas = Self::initialize(surface, host, vertex_src, fragment_src, config);

        if policy == FailurePolicy::Strict {
            if let Some(err) = canvas
                .issues
                .iter()
                .find(|e| e.level() == log::Level::Error)
            {
                return Err(err.clone());
            }
        }
        Ok(canvas)
    }

    fn initialize<H>(
        surface: Option<S>,
        host: &mut H,
        vertex_src: &str,
        fragment_src: &str,
        config: CanvasConfig,
    ) -> Self
    where
        H: SurfaceHost<Surface = S>,
    {
        let binding = bind_surface(surface, host);
        let mut canvas = Self {
            surface: binding.surface,
            context: binding.context,
            program: None,
            buffers: None,
            drawer: FrameDrawer::new(),
            config,
            issues: Vec::new(),
        };
        for issue in binding.issues {
            canvas.report(issue);
        }

        let Some(ctx) = canvas.context.as_mut() else {
            return canvas;
        };

        let build = build_program(ctx, vertex_src, fragment_src);
        // build_program logs its own failures as they happen.
        canvas.issues.extend(build.errors.into_iter().map(CanvasError::from));
        canvas.program = Some(build.info);

        let (width, height) = canvas.client_size();
        if width == 0 || height == 0 {
            canvas.report(CanvasError::DegenerateSurface { width, height });
        }

        let geometry = QuadGeometry::for_surface(&canvas.config, width, height);
        if let Some(ctx) = canvas.context.as_mut() {
            match upload_quad(ctx, &geometry) {
                Ok(buffers) => canvas.buffers = Some(buffers),
                Err(e) => canvas.report(e),
            }
        }

        if let Err(e) = canvas.draw_scene() {
            canvas.report(e);
        }
        canvas
    }

    /// Draws the frame: fixed state, clear, matrices, attribute, uniforms,
    /// one triangle-strip draw.
    ///
    /// Runs once during construction. Matrices are recomputed from the
    /// surface's current client size.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::ContextUnavailable` without a context, and
    /// `CanvasError::AlreadyDrawn` once the frame has been drawn.
    pub fn draw_scene(&mut self) -> Result<(), CanvasError> {
        let (width, height) = self.client_size();
        let frame = FrameState::compute(&self.config, width, height);

        let (Some(ctx), Some(program)) = (self.context.as_mut(), self.program.as_ref()) else {
            return Err(CanvasError::ContextUnavailable);
        };
        self.drawer
            .draw(ctx, program, self.buffers.as_ref(), &frame, &self.config)
    }

    fn report(&mut self, issue: CanvasError) {
        log::log!(issue.level(), "{issue}");
        self.issues.push(issue);
    }

    /// Client size of the bound surface, or `(0, 0)` without one.
    pub fn client_size(&self) -> (u32, u32) {
        self.surface.as_ref().map_or((0, 0), Surface::client_size)
    }

    /// Everything that went wrong during construction, in order.
    pub fn issues(&self) -> &[CanvasError] {
        &self.issues
    }

    pub fn stage(&self) -> FrameStage {
        self.drawer.stage()
    }

    pub fn is_drawn(&self) -> bool {
        self.stage() == FrameStage::Drawn
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn context(&self) -> Option<&GpuContext<S::Gl>> {
        self.context.as_ref()
    }

    pub fn program(&self) -> Option<&ProgramInfo<S::Gl>> {
        self.program.as_ref()
    }

    pub fn buffers(&self) -> Option<&QuadBuffers<S::Gl>> {
        self.buffers.as_ref()
    }
}
