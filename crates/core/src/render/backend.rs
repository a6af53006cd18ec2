//! The slice of the GL API the quad pipeline calls into.
//!
//! `GlBackend` mirrors the handful of `glow::HasContext` entry points the
//! pipeline needs, with the same argument order and the same GL enum
//! constants, so the implementation for `glow::Context` is a thin
//! pass-through. Keeping the seam this narrow is what lets the pipeline run
//! against a recording backend in tests.

use std::fmt::Debug;

/// One of the two programmable stages of a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// The GL shader type constant for this stage.
    pub fn gl_type(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    /// Lowercase stage name used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// GPU calls issued by the quad pipeline.
///
/// Binding calls here are raw; go through [`GpuContext`] so the bound
/// buffer and active program stay tracked.
///
/// [`GpuContext`]: super::GpuContext
pub trait GlBackend {
    type Shader: Copy + Debug + PartialEq;
    type Program: Copy + Debug + PartialEq;
    type Buffer: Copy + Debug + PartialEq;
    type UniformLocation: Clone + Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32>;
    fn uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    fn use_program(&self, program: Option<Self::Program>);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32);
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );
    fn enable_vertex_attrib_array(&self, index: u32);
    fn uniform_matrix_4_f32(
        &self,
        location: Option<&Self::UniformLocation>,
        transpose: bool,
        value: &[f32; 16],
    );

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear_depth(&self, depth: f32);
    fn enable(&self, capability: u32);
    fn depth_func(&self, func: u32);
    fn clear(&self, mask: u32);
    fn draw_arrays(&self, mode: u32, first: i32, count: i32);
}

// SAFETY (for every block below): glow marks raw GL calls unsafe. Each call
// forwards handles that were produced by this same context and GL enum
// constants supplied by the pipeline; the pipeline never deletes a handle it
// later passes back in.
#[allow(unsafe_code)]
impl GlBackend for glow::Context {
    type Shader = glow::Shader;
    type Program = glow::Program;
    type Buffer = glow::Buffer;
    type UniformLocation = glow::UniformLocation;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        use glow::HasContext;
        unsafe { HasContext::create_shader(self, stage.gl_type()) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        use glow::HasContext;
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        use glow::HasContext;
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        use glow::HasContext;
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        use glow::HasContext;
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        use glow::HasContext;
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        use glow::HasContext;
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        use glow::HasContext;
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        use glow::HasContext;
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        use glow::HasContext;
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        use glow::HasContext;
        unsafe { self.get_program_info_log(program) }
    }

    fn attrib_location(&self, program: Self::Program, name: &str) -> Option<u32> {
        use glow::HasContext;
        unsafe { self.get_attrib_location(program, name) }
    }

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        use glow::HasContext;
        unsafe { self.get_uniform_location(program, name) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        use glow::HasContext;
        unsafe { HasContext::use_program(self, program) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        use glow::HasContext;
        unsafe { HasContext::create_buffer(self) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>) {
        use glow::HasContext;
        unsafe { HasContext::bind_buffer(self, target, buffer) }
    }

    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32) {
        use glow::HasContext;
        unsafe { self.buffer_data_u8_slice(target, bytemuck::cast_slice(data), usage) }
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        use glow::HasContext;
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self, index, size, data_type, normalized, stride, offset,
            )
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        use glow::HasContext;
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn uniform_matrix_4_f32(
        &self,
        location: Option<&Self::UniformLocation>,
        transpose: bool,
        value: &[f32; 16],
    ) {
        use glow::HasContext;
        unsafe { self.uniform_matrix_4_f32_slice(location, transpose, value) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        use glow::HasContext;
        unsafe { HasContext::clear_color(self, r, g, b, a) }
    }

    fn clear_depth(&self, depth: f32) {
        use glow::HasContext;
        unsafe { self.clear_depth_f32(depth) }
    }

    fn enable(&self, capability: u32) {
        use glow::HasContext;
        unsafe { HasContext::enable(self, capability) }
    }

    fn depth_func(&self, func: u32) {
        use glow::HasContext;
        unsafe { HasContext::depth_func(self, func) }
    }

    fn clear(&self, mask: u32) {
        use glow::HasContext;
        unsafe { HasContext::clear(self, mask) }
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        use glow::HasContext;
        unsafe { HasContext::draw_arrays(self, mode, first, count) }
    }
}
