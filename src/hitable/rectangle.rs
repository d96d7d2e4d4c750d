use crate::aliases::{RandGen, Vec2, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::material::Material;
use crate::ray::Ray;
use rand::Rng;
use std::sync::Arc;

/// A parallelogram spanned by two edges from a corner.
pub struct Rectangle {
    origin: Vec3,
    edge_0: Vec3,
    edge_1: Vec3,
    // normal is (edge_0 x edge_1).normalize().
    // This defines the front side of Rectangle.
    normal: Vec3,
    area: f64,
    material: Arc<dyn Material>,
}

impl Rectangle {
    pub fn new(origin: &Vec3, edge_0: &Vec3, edge_1: &Vec3, material: Arc<dyn Material>) -> Self {
        let n = edge_0.cross(edge_1);
        Rectangle {
            origin: *origin,
            edge_0: *edge_0,
            edge_1: *edge_1,
            normal: n.normalize(),
            area: n.norm(),
            material,
        }
    }
    /// Ray parameter and planar coordinates of the intersection.
    fn hit_core(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<(f64, Vec2)> {
        let denom = ray.direction.dot(&self.normal);
        if denom.abs() < 1e-8 {
            return None;
        }
        let t = (self.origin - ray.origin).dot(&self.normal) / denom;
        if t <= t_min || t_max <= t {
            return None;
        }
        // planar coordinates, valid for non-orthogonal edges as well
        let rel_pt = ray.at(t) - self.origin;
        let n = self.edge_0.cross(&self.edge_1);
        let w = n / n.norm_squared();
        let u = w.dot(&rel_pt.cross(&self.edge_1));
        let v = w.dot(&self.edge_0.cross(&rel_pt));
        if (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) {
            Some((t, Vec2::new(u, v)))
        } else {
            None
        }
    }
}

impl Hitable for Rectangle {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64, _rng: &mut RandGen) -> Option<HitRecord<'_>> {
        self.hit_core(ray, t_min, t_max).map(|(t, uv)| {
            HitRecord::new(ray, t, &ray.at(t), &uv, &self.normal, self.material.as_ref())
        })
    }
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        self.origin + rng.gen::<f64>() * self.edge_0 + rng.gen::<f64>() * self.edge_1 - origin
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        let ray = Ray::new(origin, dir, 0.0);
        if let Some((t, _)) = self.hit_core(&ray, 0.001, f64::INFINITY) {
            let dist_squared = (t * dir).norm_squared();
            let cosine = dir.normalize().dot(&self.normal).abs();
            if cosine <= 0.0 {
                return 0.0;
            }
            dist_squared / (cosine * self.area)
        } else {
            0.0
        }
    }
}
