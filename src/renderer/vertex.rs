use bytemuck::{Pod, Zeroable};
use std::mem;

const R: [f32; 3] = [1.0, 0.0, 0.0];
const G: [f32; 3] = [0.0, 1.0, 0.0];
const B: [f32; 3] = [0.0, 0.0, 1.0];
const SLATE: [f32; 3] = [0.3, 0.5, 0.7];

pub const POSITION_LOCATION: u32 = 6;
pub const COLOR_LOCATION: u32 = 7;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: i32,
    pub offset: usize,
}

impl Vertex {
    pub const STRIDE: i32 = mem::size_of::<Vertex>() as i32;

    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            location: POSITION_LOCATION,
            components: 3,
            offset: 0,
        },
        VertexAttribute {
            location: COLOR_LOCATION,
            components: 3,
            offset: mem::size_of::<[f32; 3]>(),
        },
    ];
}

pub const QUAD: [Vertex; 4] = [
    Vertex {
        position: [-0.5, -0.5, 0.0],
        color: R,
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        color: G,
    },
    Vertex {
        position: [0.0, 0.5, 0.0],
        color: B,
    },
    Vertex {
        position: [0.8, 0.8, 0.0],
        color: SLATE,
    },
];

#[rustfmt::skip]
pub const INDICES: [u32; 6] = [
    2, 1, 0,
    1, 2, 3,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertices_are_tightly_interleaved() {
        assert_eq!(Vertex::STRIDE, 24);
        assert_eq!(Vertex::ATTRIBUTES[0].offset, 0);
        assert_eq!(Vertex::ATTRIBUTES[1].offset, 12);
        assert_eq!(bytemuck::cast_slice::<_, u8>(&QUAD).len(), 4 * 24);
    }

    #[test]
    fn attributes_use_locations_six_and_seven() {
        let locations: Vec<u32> = Vertex::ATTRIBUTES.iter().map(|a| a.location).collect();
        assert_eq!(locations, vec![6, 7]);
        assert!(Vertex::ATTRIBUTES.iter().all(|a| a.components == 3));
    }

    #[test]
    fn indices_stay_inside_the_quad() {
        assert!(INDICES.iter().all(|&i| (i as usize) < QUAD.len()));
    }

    #[test]
    fn both_triangles_wind_clockwise() {
        for tri in INDICES.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| QUAD[i as usize].position);
            let cross = (b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0]);
            assert!(cross < 0.0, "triangle {:?} is not clockwise", tri);
        }
    }
}
