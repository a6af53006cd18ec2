//! GLSL ES 1.00 sources for the gradient demo.
//!
//! The vertex shader passes the model-space position through as a varying,
//! and the fragment shader turns it straight into color: red grows to the
//! right, green grows upward, blue is constant. Because the quad spans
//! roughly ±1.66 vertically, the gradient saturates well before the edges.
//!
//! Names here must match the ones the program builder resolves:
//! `aVertexPosition`, `uProjectionMatrix`, `uModelViewMatrix`.

/// Name of the per-vertex position attribute.
pub const VERTEX_POSITION_ATTRIBUTE: &str = "aVertexPosition";

/// Name of the projection matrix uniform.
pub const PROJECTION_MATRIX_UNIFORM: &str = "uProjectionMatrix";

/// Name of the model-view matrix uniform.
pub const MODEL_VIEW_MATRIX_UNIFORM: &str = "uModelViewMatrix";

/// Vertex stage of the gradient demo.
pub const GRADIENT_VERTEX_SHADER: &str = r#"
attribute vec4 aVertexPosition;

uniform mat4 uModelViewMatrix;
uniform mat4 uProjectionMatrix;

varying vec2 vUv;

void main() {
    gl_Position = uProjectionMatrix * uModelViewMatrix * aVertexPosition;
    vUv = aVertexPosition.xy;
}
"#;

/// Fragment stage of the gradient demo.
pub const GRADIENT_FRAGMENT_SHADER: &str = r#"
precision mediump float;

varying vec2 vUv;

void main() {
    gl_FragColor = vec4(vUv.x, vUv.y, 1, 1);
}
"#;
