pub mod diffuse_light;
pub mod glass;
pub mod isotropic;
pub mod lambertian;
pub mod phong;

use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;

pub trait Material: Send + Sync {
    /// Calculates informations to determine the next ray or
    /// None when this Material does not scatter rays.
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord>;
    /// Calculates the emitted light from HitRecord.
    fn emitted(&self, _ray: &Ray, _rec: &HitRecord) -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }
    /// Density of scattering `ray` into `scattered`, cosine term included.
    /// Must agree with the pdf handed out by `scatter`.
    fn scattering_pdf(&self, _ray: &Ray, _rec: &HitRecord, _scattered: &Ray) -> f64 {
        0.0
    }
}
