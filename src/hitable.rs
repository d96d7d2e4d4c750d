pub mod constant_medium;
pub mod cube;
pub mod hitable_list;
pub mod rectangle;
pub mod sphere;
pub mod transform;

use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::ray::Ray;

pub trait Hitable: Send + Sync {
    /// The closest hit with t in (t_min, t_max), if any.
    /// `rng` is consumed only by hitables with a stochastic surface (participating media).
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64, rng: &mut RandGen) -> Option<HitRecord<'_>>;
    fn is_hit(&self, ray: &Ray, t_min: f64, t_max: f64, rng: &mut RandGen) -> bool {
        self.hit(ray, t_min, t_max, rng).is_some()
    }
    /// Density (in solid angle measure) of `random_direction_from(origin)` generating `dir`.
    fn direction_density(&self, _origin: &Vec3, _dir: &Vec3) -> f64 {
        0.0
    }
    /// A random direction from `origin` toward this hitable.
    /// Need not be normalized.
    fn random_direction_from(&self, _origin: &Vec3, _rng: &mut RandGen) -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }
}
