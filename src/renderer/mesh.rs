use super::buffer::Buffer;
use super::device::{BufferTarget, Device};
use super::vertex::Vertex;

/// A vertex array with its vertex and index buffers.
#[derive(Debug)]
pub struct Mesh {
    pub vertex_array: u32,
    pub vertices: Buffer,
    pub indices: Buffer,
}

impl Mesh {
    pub fn new<D: Device>(device: &D, vertices: &[Vertex], indices: &[u32]) -> Self {
        let vertex_array = device.create_vertex_array();
        device.bind_vertex_array(vertex_array);

        let vertices = Buffer::new(device, BufferTarget::Array, vertices);
        let indices = Buffer::new(device, BufferTarget::Element, indices);
        log::debug!(
            "uploaded {} vertex bytes and {} index bytes",
            vertices.len,
            indices.len
        );

        for attribute in Vertex::ATTRIBUTES.iter() {
            device.vertex_attrib_pointer(
                attribute.location,
                attribute.components,
                Vertex::STRIDE,
                attribute.offset,
            );
            device.enable_vertex_attrib_array(attribute.location);
        }

        // The attribute pointers captured the array buffer; the element
        // buffer binding belongs to the vertex array and must stay.
        device.bind_buffer(BufferTarget::Array, 0);
        device.bind_vertex_array(0);

        Mesh {
            vertex_array,
            vertices,
            indices,
        }
    }

    pub fn bind<D: Device>(&self, device: &D) {
        device.bind_vertex_array(self.vertex_array);
        self.indices.bind(device);
    }

    pub fn destroy<D: Device>(self, device: &D) {
        device.delete_vertex_array(self.vertex_array);
        self.vertices.destroy(device);
        self.indices.destroy(device);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::device::recording::{Call, RecordingDevice};
    use crate::renderer::vertex::{INDICES, QUAD};

    #[test]
    fn uploads_vertices_and_indices_inside_the_vertex_array() {
        let device = RecordingDevice::new();
        let calls = device.calls();
        let mesh = Mesh::new(&device, &QUAD, &INDICES);
        let calls = calls.borrow();

        let vao = calls
            .iter()
            .position(|c| *c == Call::BindVertexArray(mesh.vertex_array))
            .unwrap();
        let unbind = calls
            .iter()
            .position(|c| *c == Call::BindVertexArray(0))
            .unwrap();
        let uploads: Vec<usize> = calls
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c, Call::BufferData(..)))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(uploads.len(), 2);
        assert!(uploads.iter().all(|&i| vao < i && i < unbind));

        assert!(calls.contains(&Call::BufferData(
            BufferTarget::Array,
            bytemuck::cast_slice(&QUAD).to_vec()
        )));
        assert!(calls.contains(&Call::BufferData(
            BufferTarget::Element,
            bytemuck::cast_slice(&INDICES).to_vec()
        )));
        assert_eq!(mesh.indices.len, 24);
    }

    #[test]
    fn configures_position_and_color_attributes() {
        let device = RecordingDevice::new();
        let calls = device.calls();
        Mesh::new(&device, &QUAD, &INDICES);
        let calls = calls.borrow();

        assert!(calls.contains(&Call::VertexAttribPointer {
            location: 6,
            components: 3,
            stride: 24,
            offset: 0,
        }));
        assert!(calls.contains(&Call::VertexAttribPointer {
            location: 7,
            components: 3,
            stride: 24,
            offset: 12,
        }));
        assert!(calls.contains(&Call::EnableVertexAttribArray(6)));
        assert!(calls.contains(&Call::EnableVertexAttribArray(7)));
        assert!(calls.contains(&Call::BindBuffer(BufferTarget::Array, 0)));
        assert!(!calls.contains(&Call::BindBuffer(BufferTarget::Element, 0)));
    }

    #[test]
    fn destroy_deletes_all_three_objects() {
        let device = RecordingDevice::new();
        let calls = device.calls();
        let mesh = Mesh::new(&device, &QUAD, &INDICES);
        let (vao, vbo, ebo) = (mesh.vertex_array, mesh.vertices.id, mesh.indices.id);
        mesh.destroy(&device);

        let calls = calls.borrow();
        assert!(calls.contains(&Call::DeleteVertexArray(vao)));
        assert!(calls.contains(&Call::DeleteBuffer(vbo)));
        assert!(calls.contains(&Call::DeleteBuffer(ebo)));
    }
}
