use crate::aliases::{RandGen, Vec3};
use crate::hitable::Hitable;
use crate::pdf::Pdf;

/// Samples directions from `origin` toward a (collection of) hitable(s),
/// typically the light sources of a scene.
pub struct HitablePdf<'a> {
    origin: Vec3,
    hitable: &'a dyn Hitable,
}

impl<'a> HitablePdf<'a> {
    pub fn new(hitable: &'a dyn Hitable, origin: &Vec3) -> Self {
        HitablePdf {
            hitable,
            origin: *origin,
        }
    }
}

impl<'a> Pdf for HitablePdf<'a> {
    fn value(&self, dir: &Vec3) -> f64 {
        self.hitable.direction_density(&self.origin, dir)
    }
    fn generate(&self, rng: &mut RandGen) -> Vec3 {
        self.hitable.random_direction_from(&self.origin, rng)
    }
}
