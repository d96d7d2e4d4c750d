use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;
use rand::Rng;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct HitableList {
    pub list: Vec<Arc<dyn Hitable>>,
}

impl HitableList {
    pub fn new(objs: Vec<Arc<dyn Hitable>>) -> Self {
        HitableList { list: objs }
    }
    pub fn empty() -> Self {
        HitableList { list: Vec::new() }
    }
    pub fn push(&mut self, obj: Arc<dyn Hitable>) {
        self.list.push(obj);
    }
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Hitable for HitableList {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64, rng: &mut RandGen) -> Option<HitRecord<'_>> {
        let mut res: Option<HitRecord<'_>> = None;
        let mut closest_so_far = t_max;
        for obj in &self.list {
            if let Some(tmp_rec) = obj.hit(ray, t_min, closest_so_far, rng) {
                closest_so_far = tmp_rec.t;
                res = Some(tmp_rec);
            }
        }
        res
    }
    fn is_hit(&self, ray: &Ray, t_min: f64, t_max: f64, rng: &mut RandGen) -> bool {
        self.list.iter().any(|obj| obj.is_hit(ray, t_min, t_max, rng))
    }
    fn random_direction_from(&self, origin: &Vec3, rng: &mut RandGen) -> Vec3 {
        if self.list.is_empty() {
            return Vec3::new(1.0, 0.0, 0.0);
        }
        let idx = rng.gen_range(0..self.list.len());
        self.list[idx].random_direction_from(origin, rng)
    }
    fn direction_density(&self, origin: &Vec3, dir: &Vec3) -> f64 {
        if self.list.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .list
            .iter()
            .map(|o| o.direction_density(origin, dir))
            .sum();
        sum / self.list.len() as f64
    }
}
