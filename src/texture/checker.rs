use crate::aliases::{Vec2, Vec3};
use crate::texture::Texture;
use std::f64::consts::PI;
use std::sync::Arc;

/// 3d checker pattern alternating two textures every `length`.
pub struct CheckerTexture {
    length: f64,
    even: Arc<dyn Texture>,
    odd: Arc<dyn Texture>,
    phase: Vec3,
}

impl CheckerTexture {
    pub fn new(even: Arc<dyn Texture>, odd: Arc<dyn Texture>, length: f64, phase: &Vec3) -> Self {
        CheckerTexture {
            even,
            odd,
            length,
            phase: *phase,
        }
    }
}

impl Texture for CheckerTexture {
    fn value(&self, uv: &Vec2, p: &Vec3) -> Vec3 {
        let x = PI * p / self.length + self.phase;
        let sines = x[0].sin() * x[1].sin() * x[2].sin();
        if sines < 0.0 {
            self.odd.value(uv, p)
        } else {
            self.even.value(uv, p)
        }
    }
}
