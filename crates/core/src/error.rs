//! Error types for quad-canvas.
//!
//! Every failure the initializer can hit is a [`CanvasError`] variant. Under
//! the default best-effort policy these are logged and recorded on the canvas
//! rather than returned; see [`CanvasError::level`] for how each one is logged.

use thiserror::Error;

/// Errors that can occur during shader compilation or program linking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShaderError {
    /// A shader stage failed to compile.
    #[error("An error occurred compiling the shaders ({stage}):\n{log}")]
    CompileError {
        /// The shader stage that failed ("vertex" or "fragment").
        stage: String,
        /// The driver's info log, prefixed with the numbered source.
        log: String,
    },
    /// A program failed to link.
    #[error("Unable to initialize the shader program:\n{0}")]
    LinkError(String),
}

/// Errors produced while binding a surface, building the program,
/// uploading geometry, or drawing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    /// No surface was supplied, so a fallback one was created.
    #[error("A canvas element was not specified. Creating a new canvas element.")]
    MissingSurface,

    /// The host could not create the fallback surface.
    #[error("unable to create a canvas element: {0}")]
    SurfaceCreation(String),

    /// The surface could not hand out a GPU context.
    #[error("WebGL is not supported by your browser.")]
    ContextUnavailable,

    /// A shader stage failed to compile or the program failed to link.
    #[error(transparent)]
    Shader(#[from] ShaderError),

    /// The position buffer could not be created.
    #[error("unable to create the position buffer: {0}")]
    Buffer(String),

    /// The surface reported a zero width or height, so the aspect ratio
    /// is not finite.
    #[error("surface has degenerate size {width}x{height}; aspect ratio is not finite")]
    DegenerateSurface { width: u32, height: u32 },

    /// `draw_scene` was called after the single frame was already drawn.
    #[error("the frame has already been drawn")]
    AlreadyDrawn,

    /// A configuration value was out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl CanvasError {
    /// The log level this failure is reported at.
    ///
    /// Recoverable conditions (fallback surface, degenerate size, a refused
    /// redraw) are warnings; everything that leaves the pipeline without a
    /// working piece is an error.
    pub fn level(&self) -> log::Level {
        match self {
            CanvasError::MissingSurface
            | CanvasError::DegenerateSurface { .. }
            | CanvasError::AlreadyDrawn => log::Level::Warn,
            _ => log::Level::Error,
        }
    }
}
