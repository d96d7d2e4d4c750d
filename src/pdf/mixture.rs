use crate::aliases::{RandGen, Vec3};
use crate::pdf::Pdf;
use rand::Rng;

/// Probability of drawing from the first pdf.
const MIX: f64 = 0.5;

/// Equal-weight mixture of two pdfs.
/// Both are borrowed; they live in the caller's stack frame.
pub struct MixturePdf<'a, 'b> {
    a_pdf: &'a dyn Pdf,
    b_pdf: &'b dyn Pdf,
}

impl<'a, 'b> MixturePdf<'a, 'b> {
    pub fn new(a_pdf: &'a dyn Pdf, b_pdf: &'b dyn Pdf) -> Self {
        MixturePdf { a_pdf, b_pdf }
    }
}

impl<'a, 'b> Pdf for MixturePdf<'a, 'b> {
    fn value(&self, dir: &Vec3) -> f64 {
        MIX * self.a_pdf.value(dir) + (1.0 - MIX) * self.b_pdf.value(dir)
    }
    fn generate(&self, rng: &mut RandGen) -> Vec3 {
        if rng.gen::<f64>() < MIX {
            self.a_pdf.generate(rng)
        } else {
            self.b_pdf.generate(rng)
        }
    }
}
