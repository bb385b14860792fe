pub use glam::{Mat4, Vec3, Vec4};

mod camera;
mod clock;
mod colour;
mod mesh;
pub mod shader;

pub use camera::{Camera, Uniforms};
pub use clock::{Clock, Ticker};
pub use colour::Colour;
pub use mesh::{Mesh, Triangle, Vertex};

#[cfg(test)]
mod tests;
