use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub colour: Vec3,
}

impl Vertex {
    /// Floats per vertex once interleaved: position then colour.
    pub const STRIDE: usize = 6;

    /// Offset of the colour within an interleaved vertex, in floats.
    pub const COLOUR_OFFSET: usize = 3;

    pub const fn new(position: Vec3, colour: Vec3) -> Self {
        Self { position, colour }
    }
}

pub type Triangle = (Vertex, Vertex, Vertex);

#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// The demo triangle: red at the origin, green above and blue below on
    /// the right.
    pub fn triangle() -> Self {
        Self::new(vec![(
            Vertex::new(Vec3::ZERO, Vec3::X),
            Vertex::new(Vec3::new(1.0, 1.0, 0.0), Vec3::Y),
            Vertex::new(Vec3::new(1.0, -1.0, 0.0), Vec3::Z),
        )])
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.triangles.iter().flat_map(|(a, b, c)| [a, b, c])
    }

    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Vertex data as `[x, y, z, r, g, b, ...]`, ready for a vertex buffer.
    pub fn interleaved(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.vertex_count() * Vertex::STRIDE);
        for vertex in self.vertices() {
            data.extend_from_slice(&vertex.position.to_array());
            data.extend_from_slice(&vertex.colour.to_array());
        }
        data
    }
}
