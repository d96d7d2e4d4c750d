use crate::aliases::RandGen;
use crate::hit_record::HitRecord;
use crate::material::glass::reflect;
use crate::material::Material;
use crate::pdf::phong::PhongPdf;
use crate::pdf::{Pdf, SingularPdf};
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use crate::texture::Texture;
use std::sync::Arc;

/// Glossy reflection concentrated around the mirror direction.
pub struct Phong {
    albedo: Arc<dyn Texture>,
    exponent: f64,
}

impl Phong {
    pub fn new(albedo: Arc<dyn Texture>, exponent: f64) -> Self {
        Self { albedo, exponent }
    }
    fn lobe(&self, ray: &Ray, rec: &HitRecord) -> PhongPdf {
        let mirror = reflect(&ray.direction.normalize(), &rec.normal);
        PhongPdf::new(&mirror, self.exponent, &rec.normal)
    }
}

impl Material for Phong {
    fn scatter(&self, ray: &Ray, rec: &HitRecord, _rng: &mut RandGen) -> Option<ScatterRecord> {
        Some(ScatterRecord {
            attenuation: self.albedo.value(&rec.tex_coord, &rec.point),
            pdf: SingularPdf::Finite {
                pdf: Box::new(self.lobe(ray, rec)),
            },
        })
    }
    fn scattering_pdf(&self, ray: &Ray, rec: &HitRecord, scattered: &Ray) -> f64 {
        if scattered.direction.dot(&rec.normal) <= 0.0 {
            return 0.0;
        }
        self.lobe(ray, rec).value(&scattered.direction)
    }
}
