//! Shader compilation, linking, and location lookup.
//!
//! [`build_program`] is best-effort: a stage that fails to compile is
//! reported and skipped, linking is still attempted with whatever compiled,
//! and the attribute/uniform locations are resolved against whatever
//! program came out (all `None` when linking failed). Draw code then runs
//! against those `None`s without touching an invalid handle.

use super::backend::{GlBackend, ShaderStage};
use super::context::GpuContext;
use crate::error::ShaderError;
use crate::shaders::{
    MODEL_VIEW_MATRIX_UNIFORM, PROJECTION_MATRIX_UNIFORM, VERTEX_POSITION_ATTRIBUTE,
};

/// Formats a shader compilation error for human-readable debugging.
///
/// Prepends right-aligned line numbers to each line of `source`, then
/// appends the driver's error `log`, so `0:12:` in the log can be read off
/// the listing directly. Either input may be empty.
pub fn format_shader_error(source: &str, log: &str) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let width = lines.len().max(1).to_string().len();

    let numbered = lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}: {line}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    match (numbered.is_empty(), log.is_empty()) {
        (true, _) => log.to_string(),
        (false, true) => numbered,
        (false, false) => format!("{numbered}\n\n{log}"),
    }
}

/// Compiles a single shader stage.
///
/// A failed stage is deleted before returning so no handle leaks.
///
/// # Errors
///
/// Returns `ShaderError::CompileError` if the shader object cannot be
/// created or the source fails to compile.
pub fn compile_shader<G: GlBackend>(
    gl: &G,
    stage: ShaderStage,
    source: &str,
) -> Result<G::Shader, ShaderError> {
    let shader = gl
        .create_shader(stage)
        .map_err(|log| ShaderError::CompileError {
            stage: stage.name().to_string(),
            log,
        })?;

    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if gl.shader_compile_status(shader) {
        Ok(shader)
    } else {
        let info_log = gl.shader_info_log(shader);
        gl.delete_shader(shader);
        Err(ShaderError::CompileError {
            stage: stage.name().to_string(),
            log: format_shader_error(source, &info_log),
        })
    }
}

/// Creates a program, attaches whichever stages are present, and links it.
///
/// A missing stage is not an error here; the link step reports it, the
/// same way a driver would for a program with no vertex or fragment shader.
///
/// # Errors
///
/// Returns `ShaderError::LinkError` if the program cannot be created or
/// fails to link.
pub fn link_program<G: GlBackend>(
    gl: &G,
    vertex: Option<G::Shader>,
    fragment: Option<G::Shader>,
) -> Result<G::Program, ShaderError> {
    let program = gl.create_program().map_err(ShaderError::LinkError)?;

    for shader in [vertex, fragment].into_iter().flatten() {
        gl.attach_shader(program, shader);
    }
    gl.link_program(program);

    if gl.program_link_status(program) {
        Ok(program)
    } else {
        Err(ShaderError::LinkError(gl.program_info_log(program)))
    }
}

/// A linked program and the locations the quad pipeline binds.
///
/// Every field is `None` when linking failed.
pub struct ProgramInfo<G: GlBackend> {
    pub program: Option<G::Program>,
    pub vertex_position: Option<u32>,
    pub projection_matrix: Option<G::UniformLocation>,
    pub model_view_matrix: Option<G::UniformLocation>,
}

impl<G: GlBackend> ProgramInfo<G> {
    /// Resolves `aVertexPosition`, `uProjectionMatrix`, and
    /// `uModelViewMatrix` on `program`.
    pub fn resolve(gl: &G, program: Option<G::Program>) -> Self {
        let Some(p) = program else {
            return Self {
                program: None,
                vertex_position: None,
                projection_matrix: None,
                model_view_matrix: None,
            };
        };

        Self {
            program: Some(p),
            vertex_position: gl.attrib_location(p, VERTEX_POSITION_ATTRIBUTE),
            projection_matrix: gl.uniform_location(p, PROJECTION_MATRIX_UNIFORM),
            model_view_matrix: gl.uniform_location(p, MODEL_VIEW_MATRIX_UNIFORM),
        }
    }

    /// Whether a program linked successfully.
    pub fn is_linked(&self) -> bool {
        self.program.is_some()
    }
}

/// Outcome of [`build_program`]: the program info (possibly empty) and every
/// failure met along the way, in order.
pub struct ProgramBuild<G: GlBackend> {
    pub info: ProgramInfo<G>,
    pub errors: Vec<ShaderError>,
}

/// Compiles both stages, links them, and resolves locations, continuing
/// past failures.
///
/// Each failure is logged at error level as it happens and returned in
/// [`ProgramBuild::errors`]. The stages are deleted after linking; the
/// program keeps what it needs.
pub fn build_program<G: GlBackend>(
    ctx: &GpuContext<G>,
    vertex_src: &str,
    fragment_src: &str,
) -> ProgramBuild<G> {
    let gl = ctx.gl();
    let mut errors = Vec::new();

    let mut compile = |stage: ShaderStage, source: &str| match compile_shader(gl, stage, source) {
        Ok(shader) => Some(shader),
        Err(e) => {
            log::error!("{e}");
            errors.push(e);
            None
        }
    };
    let vert = compile(ShaderStage::Vertex, vertex_src);
    let frag = compile(ShaderStage::Fragment, fragment_src);

    let program = match link_program(gl, vert, frag) {
        Ok(p) => Some(p),
        Err(e) => {
            log::error!("{e}");
            errors.push(e);
            None
        }
    };

    for shader in [vert, frag].into_iter().flatten() {
        gl.delete_shader(shader);
    }

    let info = ProgramInfo::resolve(gl, program);
    log::debug!(
        "program build finished: linked={}, attribute={:?}",
        info.is_linked(),
        info.vertex_position
    );

    ProgramBuild { info, errors }
}
