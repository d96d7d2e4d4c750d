use crate::aliases::{RandGen, Vec3};
use crate::onb::Onb;
use crate::pdf::random_cosine_direction;
use crate::pdf::Pdf;
use std::f64::consts::PI;

/// Pdf such that pdf(d)/sin(t) ~= max(cos(t), 0) in a specified local coordinate (u,v,w)
pub struct CosinePdf(Onb);

impl CosinePdf {
    pub fn new(w: &Vec3) -> Self {
        CosinePdf(Onb::build_from_w(w))
    }
    pub fn boxed(w: &Vec3) -> Box<Self> {
        Box::new(Self::new(w))
    }
}

impl Pdf for CosinePdf {
    fn value(&self, dir: &Vec3) -> f64 {
        let cosine = dir.normalize().dot(self.0.w());
        (cosine / PI).max(0.0) // since integral of cos(theta) on a unit hemisphere = pi.
    }
    fn generate(&self, rng: &mut RandGen) -> Vec3 {
        self.0.local_to_global_vec(&random_cosine_direction(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::CosinePdf;
    use crate::aliases::{RandGen, Vec3};
    use crate::pdf::testing::{chi_square_by_cosine, integrate_over_sphere};
    use crate::pdf::Pdf;
    use rand::SeedableRng;

    #[test]
    fn cosine_pdf_integrates_to_one() {
        let mut rng = RandGen::seed_from_u64(20);
        let pdf = CosinePdf::new(&Vec3::new(1.0, 2.0, -0.5));
        let integral = integrate_over_sphere(&pdf, 200_000, &mut rng);
        println!("[cosine_pdf_integrates_to_one] integral: {}", integral);
        assert!((integral - 1.0).abs() < 0.02);
    }

    #[test]
    fn cosine_pdf_samples_match_density() {
        let mut rng = RandGen::seed_from_u64(21);
        let normal = Vec3::new(0.0, 1.0, 1.0);
        let pdf = CosinePdf::new(&normal);
        // P(cos < c) = c^2 on the upper hemisphere
        let chi2 = chi_square_by_cosine(
            &pdf,
            &normal,
            |c| c.max(0.0).powi(2),
            10,
            100_000,
            &mut rng,
        );
        println!("[cosine_pdf_samples_match_density] chi2: {}", chi2);
        assert!(chi2 < 40.0);
    }

    #[test]
    fn cosine_pdf_is_zero_below_surface() {
        let pdf = CosinePdf::new(&Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(pdf.value(&Vec3::new(0.3, 0.0, -1.0)), 0.0);
        assert!(pdf.value(&Vec3::new(0.0, 0.0, 5.0)) > 0.3);
    }
}
