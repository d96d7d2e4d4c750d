use crate::aliases::{RandGen, Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::material::Material;
use crate::onb::Onb;
use crate::pdf::random_in_cone;
use crate::ray::Ray;
use std::f64::consts::PI;
use std::sync::Arc;

pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<dyn Material>,
}

impl Sphere {
    pub fn new(center: &Vec3, radius: f64, material: Arc<dyn Material>) -> Self {
        Sphere {
            center: *center,
            radius,
            material,
        }
    }
    /// Calculates the parameter t of the ray at which it hits this Sphere.
    pub fn hit_core(center: &Vec3, radius: f64, ray: &Ray, t_min: f64, t_max: f64) -> Option<f64> {
        let oc = ray.origin - center;
        let a = ray.direction.norm_squared();
        let b = oc.dot(&ray.direction);
        let c = oc.norm_squared() - radius * radius;
        let disc = b * b - a * c;
        if disc <= 0.0 {
            return None;
        }
        let disc_rt = disc.sqrt();
        let mut t = (-b - disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        t = (-b + disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        None
    }
    /// convert a point on unit sphere to a uv coordinate
    pub fn get_uv(p: &Vec3) -> Vec2 {
        let phi = f64::atan2(-p[2], p[0]) + PI;
        let theta = f64::acos((-p[1]).clamp(-1.0, 1.0));
        Vec2::new(phi / (2.0 * PI), theta / PI)
    }
    /// Cosine of the half angle of the cone the sphere subtends seen from `origin`,
    /// or None when `origin` is not outside the sphere.
    fn cos_theta_max(&self, origin: &Vec3) -> Option<f64> {
        let dist_squared = (self.center - origin).norm_squared();
        let ratio = self.radius * self.radius / dist_squared;
        if ratio < 1.0 {
            Some((1.0 - ratio).sqrt())
        } else {
            None
        }
    }
}

impl Hitable for Sphere {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64, _rng: &mut RandGen) -> Option<HitRecord<'_>> {
        Sphere::hit_core(&self.center, self.radius, ray, t_min, t_max).map(|t| {
            let point = ray.at(t);
            let outward_normal = (point - self.center) / self.radius;
            let uv = Sphere::get_uv(&outward_normal);
            HitRecord::new(ray, t, &point, &uv, &outward_normal, self.material.as_ref())
        })
    }
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        match self.cos_theta_max(origin) {
            Some(cosine) => {
                let vec_local = random_in_cone(cosine, rng);
                Onb::build_from_w(&(self.center - origin)).local_to_global_vec(&vec_local)
            }
            None => Vec3::new(1.0, 0.0, 0.0),
        }
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        let cosine_max = match self.cos_theta_max(origin) {
            Some(c) => c,
            None => return 0.0,
        };
        let ray = Ray::new(origin, dir, 0.0);
        if Sphere::hit_core(&self.center, self.radius, &ray, 0.001, f64::INFINITY).is_none() {
            return 0.0;
        }
        let solid_angle = 2.0 * PI * (1.0 - cosine_max);
        1.0 / solid_angle
    }
}
