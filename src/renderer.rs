use std::convert::TryFrom;
use std::mem::ManuallyDrop;

mod buffer;
pub mod device;
mod mesh;
mod pipeline;
mod vertex;

use device::Device;
use mesh::Mesh;
use pipeline::Pipeline;
use vertex::{INDICES, QUAD};

pub const VS_SOURCE: &str = include_str!("data/triangle.vert");
pub const FS_SOURCE: &str = include_str!("data/triangle.frag");

const CLEAR_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

/// Only the first triangle of `INDICES` is submitted.
const DRAW_INDEX_COUNT: i32 = 3;

/// Neither shader declares this uniform, so its location is -1 and the
/// per-frame write does nothing.
const PULSE_UNIFORM: &str = "ourColor";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent2D {
    pub width: u32,
    pub height: u32,
}

/// Grey level oscillating in `[0, 1]` over `elapsed` seconds.
pub fn pulse(elapsed: f32) -> [f32; 4] {
    let v = elapsed.sin() / 2.0 + 0.5;
    [v, v, v, 1.0]
}

pub struct Renderer<D: Device> {
    device: D,
    frame: usize,
    mesh: ManuallyDrop<Mesh>,
    pipeline: ManuallyDrop<Pipeline>,
}

impl<D> Renderer<D>
where
    D: Device,
{
    pub fn new(device: D, init_dims: Extent2D) -> Self {
        Self::with_shaders(device, init_dims, VS_SOURCE, FS_SOURCE)
    }

    pub fn with_shaders(device: D, init_dims: Extent2D, vs_source: &str, fs_source: &str) -> Self {
        device.cull_front_faces();

        let pipeline = Pipeline::new(&device, vs_source, fs_source);
        if !pipeline.errors.is_empty() {
            log::warn!(
                "continuing with a shader program that reported {} error(s)",
                pipeline.errors.len()
            );
        }
        let mesh = Mesh::new(&device, &QUAD, &INDICES);

        let mut renderer = Renderer {
            device,
            frame: 0,
            mesh: ManuallyDrop::new(mesh),
            pipeline: ManuallyDrop::new(pipeline),
        };
        renderer.resize(init_dims);
        renderer
    }

    pub fn resize(&mut self, dims: Extent2D) {
        log::debug!("viewport resized to {}x{}", dims.width, dims.height);
        self.device
            .viewport(0, 0, to_gl_size(dims.width), to_gl_size(dims.height));
    }

    pub fn render(&mut self, elapsed: f32) {
        let device = &self.device;

        device.clear_color(CLEAR_COLOR);
        device.clear();

        self.mesh.bind(device);

        let location = device.uniform_location(self.pipeline.program, PULSE_UNIFORM);
        self.pipeline.activate(device);
        device.uniform_4f(location, pulse(elapsed));

        device.draw_elements(DRAW_INDEX_COUNT, 0);

        self.frame += 1;
    }
}

fn to_gl_size(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

impl<D: Device> Drop for Renderer<D> {
    fn drop(&mut self) {
        log::info!("releasing GPU objects after {} frames", self.frame);
        // Both fields are taken exactly once, here, and never touched again.
        unsafe {
            ManuallyDrop::take(&mut self.mesh).destroy(&self.device);
            ManuallyDrop::take(&mut self.pipeline).destroy(&self.device);
        }
    }
}
