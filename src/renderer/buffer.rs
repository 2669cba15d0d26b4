use bytemuck::Pod;

use super::device::{BufferTarget, Device};

#[derive(Debug)]
pub struct Buffer {
    pub id: u32,
    pub target: BufferTarget,
    pub len: usize,
}

impl Buffer {
    /// Creates a buffer, leaves it bound at `target` and fills it with `content`.
    pub fn new<D: Device, T: Pod>(device: &D, target: BufferTarget, content: &[T]) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(content);
        debug_assert_ne!(bytes.len(), 0);

        let id = device.create_buffer();
        device.bind_buffer(target, id);
        device.buffer_data(target, bytes);

        Buffer {
            id,
            target,
            len: bytes.len(),
        }
    }

    pub fn bind<D: Device>(&self, device: &D) {
        device.bind_buffer(self.target, self.id);
    }

    pub fn destroy<D: Device>(self, device: &D) {
        device.delete_buffer(self.id);
    }
}
