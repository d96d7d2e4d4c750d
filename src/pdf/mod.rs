pub mod cosine;
pub mod hitable;
pub mod mixture;
pub mod phong;
pub mod sphere;

use crate::aliases::{RandGen, Vec3};
use crate::ray::Ray;
use rand::Rng;
use std::f64::consts::PI;

/// A probability distribution function on directions which can be a delta distribution.
pub enum SingularPdf {
    /// Importance sampling is skipped and this ray is followed as is.
    Delta { ray: Ray },
    /// A finite distribution to sample the outgoing direction from.
    Finite { pdf: Box<dyn Pdf> },
}

/// Probability distribution function on directions
pub trait Pdf {
    /// Probability density at a direction, in solid angle measure.
    /// dir is not required to be normalized
    fn value(&self, dir: &Vec3) -> f64;
    /// Generates a random direction following this pdf.
    /// The result is not necessarily normalized.
    fn generate(&self, rng: &mut RandGen) -> Vec3;
}

/// Uniformly distributed direction on the unit sphere.
pub fn random_unit_vector(rng: &mut RandGen) -> Vec3 {
    random_in_cone(-1.0, rng)
}

/// Calculates a random point on a unit hemisphere (x^2+y^2+z^2=1, z>=0)
/// such that pdf(d)/sin(t) ~= cos(t) where t is angle between d and n=(0,0,1)
pub fn random_cosine_direction(rng: &mut RandGen) -> Vec3 {
    let r0 = rng.gen::<f64>();
    let rr0 = r0.sqrt();
    let r1 = rng.gen::<f64>();
    let angle = 2.0 * PI * r1;
    let z = (1.0 - r0).sqrt();
    let x = angle.cos() * rr0;
    let y = angle.sin() * rr0;
    Vec3::new(x, y, z)
}

/// Generate uniformly a random (normalized) direction vector in a cone around z-axis
pub fn random_in_cone(cos_half_angle: f64, rng: &mut RandGen) -> Vec3 {
    let r1 = rng.gen::<f64>();
    let r2 = rng.gen::<f64>();
    let z = 1.0 + r1 * (cos_half_angle - 1.0);
    let sine = (1.0 - z * z).max(0.0).sqrt();
    let phi = 2.0 * PI * r2;
    let x = phi.cos() * sine;
    let y = phi.sin() * sine;
    Vec3::new(x, y, z)
}

#[cfg(test)]
pub(crate) mod testing {
    //! Monte Carlo helpers shared by the pdf tests.
    use super::{random_unit_vector, Pdf};
    use crate::aliases::{RandGen, Vec3};
    use std::f64::consts::PI;

    /// Estimates the integral of `pdf.value` over the whole sphere.
    pub fn integrate_over_sphere(pdf: &dyn Pdf, sample_cnt: usize, rng: &mut RandGen) -> f64 {
        let mut integral = 0.0;
        for _ in 0..sample_cnt {
            let dir = random_unit_vector(rng);
            integral += pdf.value(&dir);
        }
        integral * 4.0 * PI / sample_cnt as f64
    }

    /// Pearson's chi-square statistic of `generate()` draws histogrammed by
    /// the cosine against `axis`. `cdf(c)` is the probability that the cosine
    /// is less than `c`.
    pub fn chi_square_by_cosine(
        pdf: &dyn Pdf,
        axis: &Vec3,
        cdf: impl Fn(f64) -> f64,
        bins: usize,
        sample_cnt: usize,
        rng: &mut RandGen,
    ) -> f64 {
        let axis = axis.normalize();
        let mut counts = vec![0usize; bins];
        for _ in 0..sample_cnt {
            let c = pdf.generate(rng).normalize().dot(&axis);
            let idx = (((c + 1.0) * 0.5 * bins as f64) as usize).min(bins - 1);
            counts[idx] += 1;
        }
        let mut chi2 = 0.0;
        for (i, &count) in counts.iter().enumerate() {
            let lo = -1.0 + 2.0 * i as f64 / bins as f64;
            let hi = -1.0 + 2.0 * (i + 1) as f64 / bins as f64;
            let expected = (cdf(hi) - cdf(lo)) * sample_cnt as f64;
            if expected < 5.0 {
                // too sparse for the statistic; such bins must stay (almost) empty
                assert!(count as f64 <= expected + 5.0);
                continue;
            }
            chi2 += (count as f64 - expected).powi(2) / expected;
        }
        chi2
    }
}
