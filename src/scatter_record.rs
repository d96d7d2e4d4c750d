use crate::aliases::Vec3;
use crate::pdf::SingularPdf;

/// Informations to calculate the scattered ray.
pub struct ScatterRecord {
    /// Multiplicative throughput factor, component-wise on RGB.
    pub attenuation: Vec3,
    // A pdf to sample a direction of the scattered ray, or the ray itself.
    pub pdf: SingularPdf,
}
