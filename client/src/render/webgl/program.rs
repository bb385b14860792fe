use web_sys::{WebGlProgram, WebGlShader};

use super::Gl;

/// The calls needed to compile and link a shader program.
pub trait ProgramApi {
    type Shader;
    type Program;

    const VERTEX_SHADER: u32;
    const FRAGMENT_SHADER: u32;

    fn create_program(&self) -> Option<Self::Program>;

    fn compile_shader(&self, src: &str, stype: u32) -> anyhow::Result<Self::Shader>;

    fn attach_shader(&self, program: &Self::Program, shader: &Self::Shader);

    fn link_program(&self, program: &Self::Program) -> anyhow::Result<()>;

    fn delete_shader(&self, shader: Self::Shader);

    fn delete_program(&self, program: Self::Program);
}

/// Compile and link a vertex and fragment shader into a program. On failure
/// every shader and the program created so far are deleted. Shaders are
/// flagged for deletion after linking and are freed along with the program.
pub fn build<A: ProgramApi>(api: &A, vert: &str, frag: &str) -> anyhow::Result<A::Program> {
    let program = match api.create_program() {
        Some(p) => p,
        None => return Err(anyhow::anyhow!("WebGL program creation failed.")),
    };

    let vert = match api.compile_shader(vert, A::VERTEX_SHADER) {
        Ok(s) => s,
        Err(e) => {
            api.delete_program(program);
            return Err(e);
        }
    };

    let frag = match api.compile_shader(frag, A::FRAGMENT_SHADER) {
        Ok(s) => s,
        Err(e) => {
            api.delete_shader(vert);
            api.delete_program(program);
            return Err(e);
        }
    };

    api.attach_shader(&program, &vert);
    api.attach_shader(&program, &frag);
    let linked = api.link_program(&program);
    api.delete_shader(vert);
    api.delete_shader(frag);

    match linked {
        Ok(()) => Ok(program),
        Err(e) => {
            api.delete_program(program);
            Err(e)
        }
    }
}

impl ProgramApi for Gl {
    type Shader = WebGlShader;
    type Program = WebGlProgram;

    const VERTEX_SHADER: u32 = Gl::VERTEX_SHADER;
    const FRAGMENT_SHADER: u32 = Gl::FRAGMENT_SHADER;

    fn create_program(&self) -> Option<WebGlProgram> {
        Gl::create_program(self)
    }

    fn compile_shader(&self, src: &str, stype: u32) -> anyhow::Result<WebGlShader> {
        let shader = match self.create_shader(stype) {
            Some(s) => s,
            None => return Err(anyhow::anyhow!("Failed to create shader.")),
        };

        self.shader_source(&shader, src);
        Gl::compile_shader(self, &shader);

        if self
            .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
            .is_falsy()
        {
            let log = self.get_shader_info_log(&shader);
            Gl::delete_shader(self, Some(&shader));
            return match log {
                Some(e) => Err(anyhow::anyhow!("Shader compilation failed, log: {e}")),
                None => Err(anyhow::anyhow!(
                    "Shader compilation failed, no error message."
                )),
            };
        }

        Ok(shader)
    }

    fn attach_shader(&self, program: &WebGlProgram, shader: &WebGlShader) {
        Gl::attach_shader(self, program, shader);
    }

    fn link_program(&self, program: &WebGlProgram) -> anyhow::Result<()> {
        Gl::link_program(self, program);

        if self
            .get_program_parameter(program, Gl::LINK_STATUS)
            .is_falsy()
        {
            let log = self.get_program_info_log(program).unwrap_or_default();
            return Err(anyhow::anyhow!("WebGL program linking failed. {log}"));
        }

        Ok(())
    }

    fn delete_shader(&self, shader: WebGlShader) {
        Gl::delete_shader(self, Some(&shader));
    }

    fn delete_program(&self, program: WebGlProgram) {
        Gl::delete_program(self, Some(&program));
    }
}
