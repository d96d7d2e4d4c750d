use super::{random_unit_vector, Pdf};
use crate::aliases::{RandGen, Vec3};
use std::f64::consts::PI;

/// Uniform distribution on the whole sphere of directions.
#[derive(Clone, Copy, Default)]
pub struct SpherePdf;

impl SpherePdf {
    pub fn new() -> Self {
        SpherePdf {}
    }
    pub fn boxed() -> Box<Self> {
        Box::new(Self::new())
    }
}

impl Pdf for SpherePdf {
    fn value(&self, _dir: &Vec3) -> f64 {
        1.0 / (4.0 * PI)
    }
    fn generate(&self, rng: &mut RandGen) -> Vec3 {
        random_unit_vector(rng)
    }
}
