use crate::aliases::{RandGen, Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::material::isotropic::Isotropic;
use crate::material::Material;
use crate::ray::Ray;
use crate::texture::Texture;
use rand::Rng;
use std::sync::Arc;

/// A homogeneous participating medium filling a closed boundary.
/// Rays are scattered at an exponentially distributed distance inside it.
pub struct ConstantMedium {
    boundary: Arc<dyn Hitable>,
    neg_inv_density: f64,
    phase_function: Arc<dyn Material>,
}

impl ConstantMedium {
    pub fn new(boundary: Arc<dyn Hitable>, density: f64, albedo: Arc<dyn Texture>) -> Self {
        ConstantMedium {
            boundary,
            neg_inv_density: -1.0 / density,
            phase_function: Arc::new(Isotropic::new(albedo)),
        }
    }
}

impl Hitable for ConstantMedium {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64, rng: &mut RandGen) -> Option<HitRecord<'_>> {
        let enter = self
            .boundary
            .hit(ray, f64::NEG_INFINITY, f64::INFINITY, rng)?
            .t;
        let exit = self.boundary.hit(ray, enter + 0.0001, f64::INFINITY, rng)?.t;
        let enter = enter.max(t_min).max(0.0);
        let exit = exit.min(t_max);
        if enter >= exit {
            return None;
        }
        let ray_length = ray.direction.norm();
        let distance_inside_boundary = (exit - enter) * ray_length;
        let hit_distance = self.neg_inv_density * (1.0 - rng.gen::<f64>()).ln();
        if hit_distance > distance_inside_boundary {
            return None;
        }
        let t = enter + hit_distance / ray_length;
        // normal and front_face are arbitrary for a volume
        Some(HitRecord {
            t,
            point: ray.at(t),
            tex_coord: Vec2::zeros(),
            normal: Vec3::new(1.0, 0.0, 0.0),
            front_face: true,
            material: self.phase_function.as_ref(),
        })
    }
}
