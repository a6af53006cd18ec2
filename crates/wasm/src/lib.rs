//! WASM bindings for quad-canvas.
//!
//! Exposes `WebGlCanvas`, which draws a quad with caller-supplied shaders
//! onto a `<canvas>` (creating one if none is given), and
//! `startGradientDemo`, which sizes the page's first canvas to the window
//! and draws the bundled gradient on it. Diagnostics go to the browser
//! console through [`console`].

pub mod console;

#[cfg(target_arch = "wasm32")]
pub mod surface;

/// Converts the window's inner size (CSS pixels, as reported by the
/// browser) into a canvas backing-store size.
///
/// Missing or non-finite values become 0; fractions are truncated.
pub fn viewport_size(inner_width: Option<f64>, inner_height: Option<f64>) -> (u32, u32) {
    let px = |v: Option<f64>| match v {
        Some(v) if v.is_finite() && v > 0.0 => v.min(f64::from(u32::MAX)) as u32,
        _ => 0,
    };
    (px(inner_width), px(inner_height))
}

#[cfg(target_arch = "wasm32")]
mod bindings {
    use log::LevelFilter;
    use quad_canvas_core::render::QuadCanvas;
    use quad_canvas_core::shaders::{GRADIENT_FRAGMENT_SHADER, GRADIENT_VERTEX_SHADER};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    use crate::surface::{CanvasSurface, DocumentHost};
    use crate::{console, viewport_size};

    /// A canvas with a quad drawn on it, built and drawn at construction.
    #[wasm_bindgen]
    pub struct WebGlCanvas {
        inner: QuadCanvas<CanvasSurface>,
    }

    #[wasm_bindgen]
    impl WebGlCanvas {
        /// Draws the quad on `canvas`, or on a new canvas appended to
        /// `document.body` when `canvas` is omitted. Never throws.
        #[wasm_bindgen(constructor)]
        pub fn new(
            canvas: Option<HtmlCanvasElement>,
            vertex_source: &str,
            fragment_source: &str,
        ) -> WebGlCanvas {
            console::init(LevelFilter::Warn);
            let inner = QuadCanvas::new(
                canvas.map(CanvasSurface::new),
                &mut DocumentHost,
                vertex_source,
                fragment_source,
            );
            Self { inner }
        }

        #[wasm_bindgen(js_name = isDrawn)]
        pub fn is_drawn(&self) -> bool {
            self.inner.is_drawn()
        }

        #[wasm_bindgen(js_name = issueCount)]
        pub fn issue_count(&self) -> usize {
            self.inner.issues().len()
        }

        /// Messages for everything that went wrong, in order.
        pub fn issues(&self) -> Vec<String> {
            self.inner.issues().iter().map(ToString::to_string).collect()
        }

        /// The canvas element drawn into, if one could be bound.
        pub fn canvas(&self) -> Option<HtmlCanvasElement> {
            self.inner.surface().map(|s| s.element().clone())
        }
    }

    /// Sizes the page's first `<canvas>` to the window and draws the
    /// gradient on it.
    #[wasm_bindgen(js_name = startGradientDemo)]
    pub fn start_gradient_demo() -> Result<WebGlCanvas, JsValue> {
        console::init(LevelFilter::Warn);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .query_selector("canvas")?
            .map(|el| el.dyn_into::<HtmlCanvasElement>())
            .transpose()
            .map_err(|_| JsValue::from_str("first `canvas` match is not a canvas element"))?;

        if let Some(canvas) = &canvas {
            let (width, height) =
                viewport_size(window.inner_width()?.as_f64(), window.inner_height()?.as_f64());
            canvas.set_width(width);
            canvas.set_height(height);
        }

        Ok(WebGlCanvas::new(
            canvas,
            GRADIENT_VERTEX_SHADER,
            GRADIENT_FRAGMENT_SHADER,
        ))
    }
}

#[cfg(target_arch = "wasm32")]
pub use bindings::{start_gradient_demo, WebGlCanvas};
