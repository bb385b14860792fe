use scene::Vertex;
use web_sys::{WebGlBuffer, WebGlProgram};

use super::{create_buffer, get_attrib_location, Gl};

const FLOAT_BYTES: i32 = std::mem::size_of::<f32>() as i32;

/// Byte stride and colour offset of interleaved vertex data.
pub(crate) fn layout() -> (i32, i32) {
    (
        Vertex::STRIDE as i32 * FLOAT_BYTES,
        Vertex::COLOUR_OFFSET as i32 * FLOAT_BYTES,
    )
}

/// A mesh uploaded to a static vertex buffer.
pub struct Mesh {
    buffer: WebGlBuffer,
    position_location: u32,
    colour_location: u32,
    vertex_count: i32,
}

impl Mesh {
    // Requires that the program use "a_position" and "a_colour"
    pub fn new(gl: &Gl, program: &WebGlProgram, mesh: &scene::Mesh) -> anyhow::Result<Self> {
        let position_location = get_attrib_location(gl, program, "a_position")?;
        let colour_location = get_attrib_location(gl, program, "a_colour")?;
        let buffer = create_buffer(gl, &mesh.interleaved())?;

        Ok(Mesh {
            buffer,
            position_location,
            colour_location,
            vertex_count: mesh.vertex_count() as i32,
        })
    }

    // Should be called after using a program.
    pub fn draw(&self, gl: &Gl) {
        let (stride, colour_offset) = layout();

        gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&self.buffer));
        gl.enable_vertex_attrib_array(self.position_location);
        gl.vertex_attrib_pointer_with_i32(self.position_location, 3, Gl::FLOAT, false, stride, 0);
        gl.enable_vertex_attrib_array(self.colour_location);
        gl.vertex_attrib_pointer_with_i32(
            self.colour_location,
            3,
            Gl::FLOAT,
            false,
            stride,
            colour_offset,
        );

        gl.draw_arrays(Gl::TRIANGLES, 0, self.vertex_count);
    }
}
