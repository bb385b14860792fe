use scene::{Colour, Uniforms};
use web_sys::{WebGlProgram, WebGlUniformLocation};

mod webgl;

pub use webgl::Gl;

pub trait Renderer {
    /// Clear the colour and depth buffers to the background colour.
    fn clear(&mut self);

    /// Draw the mesh once, transformed by `uniforms`.
    fn draw(&mut self, uniforms: &Uniforms);
}

/// Draws a single mesh with the triangle shader pair. The program and vertex
/// buffer are created once and live as long as the renderer.
pub struct WebGlRenderer {
    gl: Gl,
    program: WebGlProgram,
    perspective_location: WebGlUniformLocation,
    mesh: webgl::Mesh,
}

impl WebGlRenderer {
    const BACKGROUND: Colour = Colour::BLACK;

    pub fn new(gl: Gl, (width, height): (u32, u32), mesh: &scene::Mesh) -> anyhow::Result<Self> {
        let program = webgl::create_program(
            &gl,
            include_str!("shaders/triangle.vert"),
            include_str!("shaders/triangle.frag"),
        )?;
        let perspective_location = webgl::get_perspective_location(&gl, &program)?;
        let mesh = webgl::Mesh::new(&gl, &program, mesh)?;

        gl.viewport(0, 0, width as i32, height as i32);
        gl.enable(Gl::DEPTH_TEST);
        gl.depth_func(Gl::LESS);
        let [r, g, b, a] = Self::BACKGROUND.raw();
        gl.clear_color(r, g, b, a);

        Ok(WebGlRenderer {
            gl,
            program,
            perspective_location,
            mesh,
        })
    }
}

impl Renderer for WebGlRenderer {
    fn clear(&mut self) {
        self.gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
    }

    fn draw(&mut self, uniforms: &Uniforms) {
        self.gl.use_program(Some(&self.program));
        webgl::set_matrix(&self.gl, &self.perspective_location, &uniforms.perspective);
        self.mesh.draw(&self.gl);
    }
}
