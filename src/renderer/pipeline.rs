use std::fmt;
use thiserror::Error;

use super::device::{Device, ShaderStage};

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// Shader diagnostics. These are reported but never stop the program.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("{stage} shader compilation failed:\n{log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("shader program linking failed:\n{log}")]
    Link { log: String },
}

#[derive(Debug)]
pub struct Pipeline {
    pub program: u32,
    pub errors: Vec<PipelineError>,
}

impl Pipeline {
    /// Compiles and links the two stages. Every failure is logged and kept
    /// in `errors`; the program handle is returned regardless.
    pub fn new<D: Device>(device: &D, vs_source: &str, fs_source: &str) -> Self {
        let mut errors = Vec::new();

        let vs = Self::compile(device, ShaderStage::Vertex, vs_source, &mut errors);
        let fs = Self::compile(device, ShaderStage::Fragment, fs_source, &mut errors);

        let program = device.create_program();
        device.attach_shader(program, vs);
        device.attach_shader(program, fs);
        device.link_program(program);
        if !device.program_link_status(program) {
            Self::report(
                &mut errors,
                PipelineError::Link {
                    log: device.program_info_log(program),
                },
            );
        }

        device.delete_shader(vs);
        device.delete_shader(fs);

        Pipeline { program, errors }
    }

    fn compile<D: Device>(
        device: &D,
        stage: ShaderStage,
        source: &str,
        errors: &mut Vec<PipelineError>,
    ) -> u32 {
        let shader = device.create_shader(stage);
        device.shader_source(shader, source);
        device.compile_shader(shader);
        if !device.shader_compile_status(shader) {
            Self::report(
                errors,
                PipelineError::Compile {
                    stage,
                    log: device.shader_info_log(shader),
                },
            );
        }
        shader
    }

    fn report(errors: &mut Vec<PipelineError>, err: PipelineError) {
        log::error!("{}", err);
        errors.push(err);
    }

    pub fn activate<D: Device>(&self, device: &D) {
        device.use_program(self.program);
    }

    pub fn destroy<D: Device>(self, device: &D) {
        device.delete_program(self.program);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::device::recording::{Call, RecordingDevice};
    use crate::renderer::{FS_SOURCE, VS_SOURCE};

    #[test]
    fn embedded_shaders_compile_and_link() {
        let device = RecordingDevice::new();
        let pipeline = Pipeline::new(&device, VS_SOURCE, FS_SOURCE);
        assert!(pipeline.errors.is_empty(), "{:?}", pipeline.errors);
    }

    #[test]
    fn invalid_vertex_source_is_reported_not_fatal() {
        let device = RecordingDevice::new();
        let calls = device.calls();
        let pipeline = Pipeline::new(&device, "void main() { gl_Position = ; }", FS_SOURCE);

        assert_eq!(pipeline.errors.len(), 2);
        match &pipeline.errors[0] {
            PipelineError::Compile { stage, log } => {
                assert_eq!(*stage, ShaderStage::Vertex);
                assert!(!log.is_empty());
            }
            other => panic!("unexpected error {:?}", other),
        }
        assert!(matches!(pipeline.errors[1], PipelineError::Link { .. }));
        assert!(pipeline.errors[0]
            .to_string()
            .starts_with("vertex shader compilation failed"));

        // Linking still happens and the program is still handed back.
        assert!(calls.borrow().contains(&Call::LinkProgram(pipeline.program)));
    }

    #[test]
    fn shader_stages_are_deleted_after_linking() {
        let device = RecordingDevice::new();
        let calls = device.calls();
        Pipeline::new(&device, VS_SOURCE, FS_SOURCE);
        let calls = calls.borrow();

        let link = calls
            .iter()
            .position(|c| matches!(c, Call::LinkProgram(_)))
            .unwrap();
        let deleted: Vec<usize> = calls
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, Call::DeleteShader(_)))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(deleted.len(), 2);
        assert!(deleted.iter().all(|&i| i > link));
    }
}
