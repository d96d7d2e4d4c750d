use crate::aliases::Vec3;
use crate::ray::Ray;

/// Radiance arriving along rays which escape the scene.
pub trait Background: Send + Sync {
    fn color(&self, ray: &Ray) -> Vec3;
}

pub struct AmbientLight {
    color: Vec3,
}

impl AmbientLight {
    pub fn new(color: &Vec3) -> Self {
        Self { color: *color }
    }
    pub fn black() -> Self {
        Self::new(&Vec3::zeros())
    }
}

impl Background for AmbientLight {
    fn color(&self, _ray: &Ray) -> Vec3 {
        self.color
    }
}
