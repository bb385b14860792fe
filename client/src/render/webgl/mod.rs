use js_sys::Float32Array;
use web_sys::{WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation};

mod mesh;
mod program;

pub type Gl = WebGl2RenderingContext;

pub use mesh::Mesh;

fn get_uniform_location(
    gl: &Gl,
    program: &WebGlProgram,
    location: &str,
) -> anyhow::Result<WebGlUniformLocation> {
    match gl.get_uniform_location(program, location) {
        Some(l) => Ok(l),
        None => Err(anyhow::anyhow!(
            "Failed to get WebGlUniformLocation {location}."
        )),
    }
}

fn get_attrib_location(gl: &Gl, program: &WebGlProgram, name: &str) -> anyhow::Result<u32> {
    match gl.get_attrib_location(program, name) {
        -1 => Err(anyhow::anyhow!("No attribute {name} in program.")),
        l => Ok(l as u32),
    }
}

fn create_buffer(gl: &Gl, data: &[f32]) -> anyhow::Result<WebGlBuffer> {
    let buffer = match gl.create_buffer() {
        Some(b) => b,
        None => return Err(anyhow::anyhow!("Failed to create WebGL buffer.")),
    };

    let data = Float32Array::from(data);
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_opt_array_buffer(Gl::ARRAY_BUFFER, Some(&data.buffer()), Gl::STATIC_DRAW);

    Ok(buffer)
}

pub fn create_program(gl: &Gl, vert: &str, frag: &str) -> anyhow::Result<WebGlProgram> {
    program::build(gl, vert, frag)
}

/// Upload a 4x4 matrix to a uniform. GL and glam are both column major.
pub fn set_matrix(gl: &Gl, location: &WebGlUniformLocation, m: &scene::Mat4) {
    gl.uniform_matrix4fv_with_f32_array(Some(location), false, &m.to_cols_array());
}

pub fn get_perspective_location(
    gl: &Gl,
    program: &WebGlProgram,
) -> anyhow::Result<WebGlUniformLocation> {
    get_uniform_location(gl, program, "u_perspective")
}
