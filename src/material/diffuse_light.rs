use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use crate::texture::Texture;
use std::sync::Arc;

/// Emits light from the front side only, never scatters.
pub struct DiffuseLight {
    pub emit: Arc<dyn Texture>,
}

impl DiffuseLight {
    pub fn new(emit: Arc<dyn Texture>) -> Self {
        DiffuseLight { emit }
    }
}

impl Material for DiffuseLight {
    fn scatter(&self, _ray: &Ray, _rec: &HitRecord, _rng: &mut RandGen) -> Option<ScatterRecord> {
        None
    }
    fn emitted(&self, _ray: &Ray, rec: &HitRecord) -> Vec3 {
        if rec.front_face {
            self.emit.value(&rec.tex_coord, &rec.point)
        } else {
            Vec3::new(0.0, 0.0, 0.0)
        }
    }
}
