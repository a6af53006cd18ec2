//! Browser canvas as a [`Surface`], and the document as its [`SurfaceHost`].

use quad_canvas_core::render::{Surface, SurfaceHost};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, WebGlRenderingContext};

/// A `<canvas>` element drawn into through WebGL 1.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    pub fn element(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    type Gl = glow::Context;

    fn client_size(&self) -> (u32, u32) {
        let clamp = |v: i32| u32::try_from(v).unwrap_or(0);
        (
            clamp(self.canvas.client_width()),
            clamp(self.canvas.client_height()),
        )
    }

    fn acquire_context(&self) -> Option<glow::Context> {
        let webgl = self
            .canvas
            .get_context("webgl")
            .ok()
            .flatten()?
            .dyn_into::<WebGlRenderingContext>()
            .ok()?;
        Some(glow::Context::from_webgl1_context(webgl))
    }
}

/// Creates canvases and appends them to `document.body`.
pub struct DocumentHost;

impl SurfaceHost for DocumentHost {
    type Surface = CanvasSurface;

    fn create_surface(&mut self) -> Result<CanvasSurface, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document available")?;
        let canvas = document
            .create_element("canvas")
            .map_err(js_error)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| "created element is not a canvas".to_string())?;
        let body = document.body().ok_or("document has no body")?;
        body.append_child(&canvas).map_err(js_error)?;
        Ok(CanvasSurface::new(canvas))
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
