//! CPU forms of the triangle shaders in `client/src/render/shaders`. These
//! must stay in step with the GLSL.

use glam::{Vec3, Vec4};

use crate::{Colour, Uniforms, Vertex};

/// Vertex stage. Returns the clip space position and the colour varying.
pub fn vertex(uniforms: &Uniforms, vertex: &Vertex) -> (Vec4, Vec3) {
    (
        uniforms.perspective * vertex.position.extend(1.0),
        vertex.colour,
    )
}

/// Fragment stage. Output is always fully opaque.
pub fn fragment(colour: Vec3) -> Colour {
    Colour::opaque(colour.to_array())
}
