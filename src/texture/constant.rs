use crate::aliases::{Vec2, Vec3};
use crate::texture::Texture;

pub struct ConstantTexture(Vec3);

impl ConstantTexture {
    pub fn new(color: &Vec3) -> Self {
        ConstantTexture(*color)
    }
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        ConstantTexture(Vec3::new(r, g, b))
    }
}

impl Texture for ConstantTexture {
    fn value(&self, _uv: &Vec2, _p: &Vec3) -> Vec3 {
        self.0
    }
}
