//! Recording `GlBackend` and surfaces for pipeline tests.
//!
//! `RecordingGl` hands out integer handles, keeps a log of every call, and
//! mimics the driver's pass/fail behavior: a stage fails to compile when its
//! source has no `void main()`, and a program fails to link unless exactly
//! one compiled vertex stage and one compiled fragment stage are attached.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use log::{Level, Log, Metadata, Record};

use super::backend::{GlBackend, ShaderStage};
use super::surface::{Surface, SurfaceHost};

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum GlCall {
    CreateShader(ShaderStage, u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    CreateBuffer(u32),
    BindBuffer(u32, Option<u32>),
    BufferData {
        target: u32,
        data: Vec<f32>,
        usage: u32,
    },
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    UniformMatrix4 {
        location: Option<String>,
        transpose: bool,
        value: [f32; 16],
    },
    ClearColor([f32; 4]),
    ClearDepth(f32),
    Enable(u32),
    DepthFunc(u32),
    Clear(u32),
    DrawArrays {
        mode: u32,
        first: i32,
        count: i32,
    },
}

#[derive(Default)]
pub struct RecordingGl {
    calls: RefCell<Vec<GlCall>>,
    next_handle: Cell<u32>,
    stages: RefCell<HashMap<u32, ShaderStage>>,
    sources: RefCell<HashMap<u32, String>>,
    compiled: RefCell<HashMap<u32, bool>>,
    attached: RefCell<HashMap<u32, Vec<u32>>>,
    linked: RefCell<HashMap<u32, bool>>,
    /// Force a link failure even with two good stages.
    fail_link: bool,
    /// Make `create_buffer` fail.
    fail_buffer: bool,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link_failure(mut self) -> Self {
        self.fail_link = true;
        self
    }

    pub fn with_buffer_failure(mut self) -> Self {
        self.fail_buffer = true;
        self
    }

    pub fn calls(&self) -> Vec<GlCall> {
        self.calls.borrow().clone()
    }

    pub fn draw_calls(&self) -> Vec<GlCall> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, GlCall::DrawArrays { .. }))
            .collect()
    }

    /// Index of the first call matching `pred`, if any.
    pub fn position(&self, pred: impl Fn(&GlCall) -> bool) -> Option<usize> {
        self.calls.borrow().iter().position(pred)
    }

    fn record(&self, call: GlCall) {
        self.calls.borrow_mut().push(call);
    }

    fn handle(&self) -> u32 {
        let h = self.next_handle.get() + 1;
        self.next_handle.set(h);
        h
    }
}

impl GlBackend for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type UniformLocation = String;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let h = self.handle();
        self.stages.borrow_mut().insert(h, stage);
        self.record(GlCall::CreateShader(stage, h));
        Ok(h)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_string());
    }

    fn compile_shader(&self, shader: u32) {
        let ok = self
            .sources
            .borrow()
            .get(&shader)
            .is_some_and(|s| s.contains("void main()"));
        self.compiled.borrow_mut().insert(shader, ok);
        self.record(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.compiled.borrow().get(&shader).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            "ERROR: 0:1: 'main' : function not defined".to_string()
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.record(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let h = self.handle();
        self.record(GlCall::CreateProgram(h));
        Ok(h)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.attached
            .borrow_mut()
            .entry(program)
            .or_default()
            .push(shader);
        self.record(GlCall::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        let attached = self
            .attached
            .borrow()
            .get(&program)
            .cloned()
            .unwrap_or_default();
        let stages = self.stages.borrow();
        let has = |want: ShaderStage| {
            attached
                .iter()
                .filter(|s| stages.get(*s) == Some(&want) && self.shader_compile_status(**s))
                .count()
                == 1
        };
        let ok = !self.fail_link
            && attached.len() == 2
            && has(ShaderStage::Vertex)
            && has(ShaderStage::Fragment);
        self.linked.borrow_mut().insert(program, ok);
        self.record(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.linked.borrow().get(&program).copied().unwrap_or(false)
    }

    fn program_info_log(&self, program: u32) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            "ERROR: Missing or invalid shader stage".to_string()
        }
    }

    fn attrib_location(&self, program: u32, _name: &str) -> Option<u32> {
        self.program_link_status(program).then_some(0)
    }

    fn uniform_location(&self, program: u32, name: &str) -> Option<String> {
        self.program_link_status(program).then(|| name.to_string())
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        if self.fail_buffer {
            return Err("out of memory".into());
        }
        let h = self.handle();
        self.record(GlCall::CreateBuffer(h));
        Ok(h)
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(GlCall::BindBuffer(target, buffer));
    }

    fn buffer_data_f32(&self, target: u32, data: &[f32], usage: u32) {
        self.record(GlCall::BufferData {
            target,
            data: data.to_vec(),
            usage,
        });
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
        self.record(GlCall::VertexAttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(GlCall::EnableVertexAttribArray(index));
    }

    fn uniform_matrix_4_f32(&self, location: Option<&String>, transpose: bool, value: &[f32; 16]) {
        self.record(GlCall::UniformMatrix4 {
            location: location.cloned(),
            transpose,
            value: *value,
        });
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(GlCall::ClearColor([r, g, b, a]));
    }

    fn clear_depth(&self, depth: f32) {
        self.record(GlCall::ClearDepth(depth));
    }

    fn enable(&self, capability: u32) {
        self.record(GlCall::Enable(capability));
    }

    fn depth_func(&self, func: u32) {
        self.record(GlCall::DepthFunc(func));
    }

    fn clear(&self, mask: u32) {
        self.record(GlCall::Clear(mask));
    }

    fn draw_arrays(&self, mode: u32, first: i32, count: i32) {
        self.record(GlCall::DrawArrays { mode, first, count });
    }
}

/// A surface with a fixed client size that may or may not support a context.
pub struct MockSurface {
    pub width: u32,
    pub height: u32,
    pub supports_context: bool,
    pub fail_link: bool,
    pub fail_buffer: bool,
}

impl MockSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            supports_context: true,
            fail_link: false,
            fail_buffer: false,
        }
    }

    pub fn without_context(width: u32, height: u32) -> Self {
        Self {
            supports_context: false,
            ..Self::new(width, height)
        }
    }
}

impl Surface for MockSurface {
    type Gl = RecordingGl;

    fn client_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn acquire_context(&self) -> Option<RecordingGl> {
        self.supports_context.then(|| {
            let mut gl = RecordingGl::new();
            gl.fail_link = self.fail_link;
            gl.fail_buffer = self.fail_buffer;
            gl
        })
    }
}

/// A document stand-in that counts the surfaces it appended.
pub struct MockHost {
    pub created: usize,
    pub width: u32,
    pub height: u32,
    pub broken: bool,
}

impl Default for MockHost {
    /// New surfaces get the browser's default canvas size, 300x150.
    fn default() -> Self {
        Self {
            created: 0,
            width: 300,
            height: 150,
            broken: false,
        }
    }
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SurfaceHost for MockHost {
    type Surface = MockSurface;

    fn create_surface(&mut self) -> Result<MockSurface, String> {
        if self.broken {
            return Err("no document".into());
        }
        self.created += 1;
        Ok(MockSurface::new(self.width, self.height))
    }
}

thread_local! {
    static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// `log` backend that keeps records per test thread.
struct CaptureLogger;

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|c| {
            c.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

/// Runs `f` and returns the warn- and error-level records it logged on this
/// thread, in order.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Vec<(Level, String)>) {
    if log::set_logger(&CAPTURE_LOGGER).is_ok() {
        log::set_max_level(log::LevelFilter::Trace);
    }
    CAPTURED.with(|c| c.borrow_mut().clear());
    let result = f();
    let records = CAPTURED.with(|c| {
        c.borrow_mut()
            .drain(..)
            .filter(|(level, _)| *level <= Level::Warn)
            .collect()
    });
    (result, records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_host_creates_browser_sized_surfaces() {
        let mut host = MockHost::default();
        let surface = host.create_surface().unwrap();
        assert_eq!(surface.client_size(), (300, 150));
        assert_eq!(host.created, 1);
    }

    #[test]
    fn capture_keeps_warnings_and_errors_only() {
        let ((), records) = capture_logs(|| {
            log::debug!("noise");
            log::warn!("careful");
            log::error!("broken");
        });
        assert_eq!(
            records,
            vec![
                (Level::Warn, "careful".to_string()),
                (Level::Error, "broken".to_string()),
            ]
        );
    }
}
