use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::pdf::SingularPdf;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use rand::Rng;

/// * `n` - must be normalized
pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    debug_assert!((n.norm() - 1.0).abs() < 1e-3);
    v - 2.0 * v.dot(n) * n
}

/// * `uv` - must be normalized
/// * `n` - must be normalized and point against `uv`
pub fn refract(uv: &Vec3, n: &Vec3, r: f64) -> Option<Vec3> {
    let cos_theta = (-uv).dot(n).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    if r * sin_theta > 1.0 {
        return None; // total internal reflection
    }
    let r_out_perp = r * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.norm_squared()).abs().sqrt() * n;
    Some(r_out_perp + r_out_parallel)
}

/// Approximation formula of probability of reflection when a light enter into a material
pub fn schlick_formula(cosine: f64, ref_idx: f64) -> f64 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

/// A clear dielectric; rays are reflected or refracted, never importance sampled.
pub struct Glass {
    pub ref_idx: f64,
}

impl Glass {
    pub fn new(ref_idx: f64) -> Self {
        Glass { ref_idx }
    }
}

impl Material for Glass {
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        // r = relative refractive index
        let r = if rec.front_face {
            1.0 / self.ref_idx
        } else {
            self.ref_idx
        };
        let unit_dir = ray.direction.normalize();
        let cosine = (-unit_dir).dot(&rec.normal).min(1.0);
        let dir = match refract(&unit_dir, &rec.normal, r) {
            Some(refracted) if rng.gen::<f64>() >= schlick_formula(cosine, r) => refracted,
            _ => reflect(&unit_dir, &rec.normal),
        };
        Some(ScatterRecord {
            attenuation: Vec3::new(1.0, 1.0, 1.0),
            pdf: SingularPdf::Delta {
                ray: Ray::new(&rec.point, &dir, ray.time),
            },
        })
    }
}
