#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colour(pub [f32; 4]);

impl Colour {
    pub const BLACK: Colour = Colour([0.0, 0.0, 0.0, 1.0]);

    /// Opaque colour from an RGB triple.
    pub fn opaque(rgb: [f32; 3]) -> Colour {
        Colour([rgb[0], rgb[1], rgb[2], 1.0])
    }

    pub fn r(&self) -> f32 {
        self.0[0]
    }

    pub fn g(&self) -> f32 {
        self.0[1]
    }

    pub fn b(&self) -> f32 {
        self.0[2]
    }

    pub fn a(&self) -> f32 {
        self.0[3]
    }

    pub fn raw(self) -> [f32; 4] {
        self.0
    }
}
