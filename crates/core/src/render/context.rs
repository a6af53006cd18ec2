//! GPU context wrapper with explicit binding state.
//!
//! GL keeps the bound array buffer and the active program as hidden global
//! state, and later calls silently depend on it: `vertexAttribPointer` reads
//! whatever buffer is bound, and uniform uploads go to whatever program is
//! in use. `GpuContext` routes those two binds through itself and records
//! the result, so the pipeline (and its tests) can see the state every call
//! depends on.

use super::backend::GlBackend;

/// A GL backend plus the binding state the pipeline relies on.
///
/// Exactly one exists per surface. Every GPU call of the pipeline goes
/// through the same instance.
pub struct GpuContext<G: GlBackend> {
    gl: G,
    array_buffer: Option<G::Buffer>,
    program: Option<G::Program>,
}

impl<G: GlBackend> GpuContext<G> {
    /// Wraps a freshly acquired backend. Nothing is bound yet.
    pub fn new(gl: G) -> Self {
        Self {
            gl,
            array_buffer: None,
            program: None,
        }
    }

    /// Returns a reference to the underlying backend.
    pub fn gl(&self) -> &G {
        &self.gl
    }

    /// Consumes this wrapper and returns the underlying backend.
    pub fn into_gl(self) -> G {
        self.gl
    }

    /// Binds `buffer` to `ARRAY_BUFFER` and records it.
    pub fn bind_array_buffer(&mut self, buffer: Option<G::Buffer>) {
        self.gl.bind_buffer(glow::ARRAY_BUFFER, buffer);
        self.array_buffer = buffer;
    }

    /// Makes `program` current and records it.
    pub fn use_program(&mut self, program: Option<G::Program>) {
        self.gl.use_program(program);
        self.program = program;
    }

    /// The buffer currently bound to `ARRAY_BUFFER`.
    pub fn bound_array_buffer(&self) -> Option<G::Buffer> {
        self.array_buffer
    }

    /// The program currently in use.
    pub fn active_program(&self) -> Option<G::Program> {
        self.program
    }
}
