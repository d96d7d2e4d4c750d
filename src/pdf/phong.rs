use crate::aliases::{RandGen, Vec3};
use crate::onb::Onb;
use crate::pdf::Pdf;
use rand::Rng;
use std::f64::consts::PI;

pub const MIN_EXPONENT: f64 = 0.1;
pub const MAX_EXPONENT: f64 = 1000.0;

/// A pdf concentrated around a lobe axis, proportional to cos^alpha,
/// used for sampling an outgoing direction in Phong-like reflection.
pub struct PhongPdf {
    basis: Onb, // w is the lobe axis
    exponent: f64,
    normal: Vec3, // samples are kept on the side this vector points to
}

impl PhongPdf {
    /// * `axis` - need not be normalized.
    /// * `exponent` - clamped to [MIN_EXPONENT, MAX_EXPONENT].
    /// * `normal` - reference normal for rejection; need not be normalized.
    pub fn new(axis: &Vec3, exponent: f64, normal: &Vec3) -> Self {
        Self {
            basis: Onb::build_from_w(axis),
            exponent: exponent.clamp(MIN_EXPONENT, MAX_EXPONENT),
            normal: *normal,
        }
    }
    pub fn boxed(axis: &Vec3, exponent: f64, normal: &Vec3) -> Box<Self> {
        Box::new(Self::new(axis, exponent, normal))
    }
    pub fn exponent(&self) -> f64 {
        self.exponent
    }
}

impl Pdf for PhongPdf {
    fn value(&self, dir: &Vec3) -> f64 {
        let cosine = dir.normalize().dot(self.basis.w()).clamp(0.0, 1.0);
        (self.exponent + 1.0) * cosine.powf(self.exponent) / (2.0 * PI)
    }
    fn generate(&self, rng: &mut RandGen) -> Vec3 {
        loop {
            let phi = rng.gen::<f64>() * 2.0 * PI;
            // xi == 0 would give cos_theta == 0 for every exponent
            let xi = rng.gen::<f64>().max(1e-10);
            let cos_theta = xi.powf(1.0 / (self.exponent + 1.0));
            let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
            let dir = self.basis.local_to_global_vec(&Vec3::new(
                phi.cos() * sin_theta,
                phi.sin() * sin_theta,
                cos_theta,
            ));
            if dir.dot(&self.normal) > 0.0 {
                return dir;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PhongPdf, MAX_EXPONENT, MIN_EXPONENT};
    use crate::aliases::{RandGen, Vec3};
    use crate::pdf::testing::{chi_square_by_cosine, integrate_over_sphere};
    use crate::pdf::{random_cosine_direction, random_unit_vector, Pdf};
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn phong_pdf_clamps_exponent() {
        let n = Vec3::new(0.0, 0.0, 1.0);
        assert_eq!(PhongPdf::new(&n, 0.0, &n).exponent(), MIN_EXPONENT);
        assert_eq!(PhongPdf::new(&n, 1.0e6, &n).exponent(), MAX_EXPONENT);
        assert_eq!(PhongPdf::new(&n, 30.0, &n).exponent(), 30.0);
    }

    #[test]
    fn phong_pdf_integrates_to_one() {
        let mut rng = RandGen::seed_from_u64(30);
        for &exponent in &[0.1, 1.0, 5.0] {
            let axis = Vec3::new(0.2, 0.1, 1.0);
            let pdf = PhongPdf::new(&axis, exponent, &axis);
            let integral = integrate_over_sphere(&pdf, 400_000, &mut rng);
            println!("[phong_pdf_integrates_to_one] alpha: {}, integral: {}", exponent, integral);
            assert!((integral - 1.0).abs() < 0.03);
        }
    }

    #[test]
    fn phong_pdf_integrates_to_one_for_sharp_lobes() {
        // uniform sphere sampling is too noisy for a narrow lobe;
        // all but e^-21 of its mass lies within the cone below.
        let mut rng = RandGen::seed_from_u64(31);
        let axis = Vec3::new(0.0, 0.0, 1.0);
        let pdf = PhongPdf::new(&axis, 200.0, &axis);
        const SAMPLE_CNT: usize = 400_000;
        let cos_max = 0.9;
        let solid_angle = 2.0 * std::f64::consts::PI * (1.0 - cos_max);
        let mut integral = 0.0;
        for _ in 0..SAMPLE_CNT {
            let dir = crate::pdf::random_in_cone(cos_max, &mut rng);
            integral += pdf.value(&dir);
        }
        integral *= solid_angle / SAMPLE_CNT as f64;
        println!("[phong_pdf_integrates_to_one_for_sharp_lobes] integral: {}", integral);
        assert!((integral - 1.0).abs() < 0.03);
    }

    #[test]
    fn phong_pdf_samples_match_density() {
        let mut rng = RandGen::seed_from_u64(32);
        let axis = Vec3::new(1.0, -1.0, 0.5);
        let exponent = 4.0;
        // the reference normal equals the axis, so nothing is rejected and
        // P(cos < c) = c^(alpha+1) on the upper hemisphere
        let pdf = PhongPdf::new(&axis, exponent, &axis);
        let chi2 = chi_square_by_cosine(
            &pdf,
            &axis,
            |c| c.max(0.0).powf(exponent + 1.0),
            10,
            100_000,
            &mut rng,
        );
        println!("[phong_pdf_samples_match_density] chi2: {}", chi2);
        assert!(chi2 < 40.0);
    }

    #[test]
    fn phong_pdf_rejects_directions_below_normal() {
        let mut rng = RandGen::seed_from_u64(33);
        let normal = Vec3::new(0.0, 1.0, 0.0);
        // a grazing lobe axis: roughly half of the lobe is below the surface
        let axis = Vec3::new(1.0, 0.05, 0.0);
        for &exponent in &[MIN_EXPONENT, 1.0, 30.0, MAX_EXPONENT] {
            let pdf = PhongPdf::new(&axis, exponent, &normal);
            for _ in 0..2000 {
                assert!(pdf.generate(&mut rng).dot(&normal) > 0.0);
            }
        }
    }

    proptest! {
        #[test]
        fn phong_pdf_generate_is_above_reference_normal(
            exponent in MIN_EXPONENT..MAX_EXPONENT,
            seed in any::<u64>(),
        ) {
            let mut rng = RandGen::seed_from_u64(seed);
            let normal = random_unit_vector(&mut rng);
            // mirror directions always lie in the hemisphere of the normal
            let axis = crate::onb::Onb::build_from_w(&normal)
                .local_to_global_vec(&random_cosine_direction(&mut rng));
            let pdf = PhongPdf::new(&axis, exponent, &normal);
            for _ in 0..32 {
                prop_assert!(pdf.generate(&mut rng).dot(&normal) > 0.0);
            }
        }
    }
}
