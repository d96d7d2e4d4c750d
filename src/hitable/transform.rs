use crate::affine::Affine;
use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;
use std::sync::Arc;

/// An instance of a hitable placed by a rigid transformation.
pub struct Transform {
    original: Arc<dyn Hitable>,
    transform: Affine,
    inv_transform: Affine,
}

impl Transform {
    pub fn new(original: Arc<dyn Hitable>, tr: &Affine) -> Self {
        Transform {
            original,
            transform: *tr,
            inv_transform: tr.inverse(),
        }
    }
}

impl Hitable for Transform {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64, rng: &mut RandGen) -> Option<HitRecord<'_>> {
        // an affine map keeps the ray parameter t unchanged
        self.original
            .hit(&ray.get_transformed(&self.inv_transform), t_min, t_max, rng)
            .map(|rec| rec.get_transformed(&self.transform))
    }
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        let local_origin = self.inv_transform.act_point(origin);
        let local_dir = self.original.random_direction_from(&local_origin, rng);
        self.transform.act_vec(&local_dir)
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        self.original.direction_density(
            &self.inv_transform.act_point(origin),
            &self.inv_transform.act_vec(dir),
        )
    }
}
