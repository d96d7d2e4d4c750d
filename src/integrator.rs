//! Radiance estimators.
//!
//! Every strategy is a recursive function of a ray and a remaining bounce
//! budget. The next-event estimation and MIS variants additionally thread the
//! weight applied to emission found by the *next* hit, so that a light reached
//! by one of the two legs of a bounce is counted exactly once in expectation.

use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::pdf::hitable::HitablePdf;
use crate::pdf::mixture::MixturePdf;
use crate::pdf::{Pdf, SingularPdf};
use crate::ray::Ray;
use crate::scene::Scene;
use std::fmt;
use std::str::FromStr;

/// Hits closer than this are ignored to avoid self-intersection.
pub const T_MIN: f64 = 0.001;
/// Sampled directions shorter than this (squared) are treated as degenerate.
pub const MIN_DIR_NORM_SQUARED: f64 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Sample the material's pdf only.
    BsdfSampling,
    /// Sample an equal mixture of the light pdf and the material's pdf.
    MixtureSampling,
    /// One light sample and one material sample per bounce, emission found by
    /// the material sample is dropped.
    Nee,
    /// Like `Nee` but both legs are weighted by the power heuristic.
    #[default]
    Mis,
}

impl RenderMode {
    pub const ALL: [RenderMode; 4] = [
        RenderMode::BsdfSampling,
        RenderMode::MixtureSampling,
        RenderMode::Nee,
        RenderMode::Mis,
    ];
    pub fn name(&self) -> &'static str {
        match self {
            RenderMode::BsdfSampling => "bsdf",
            RenderMode::MixtureSampling => "mixture",
            RenderMode::Nee => "nee",
            RenderMode::Mis => "mis",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RenderMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RenderMode::ALL
            .iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                format!(
                    "unknown render mode '{}' (expected one of bsdf, mixture, nee, mis)",
                    s
                )
            })
    }
}

/// Power heuristic with exponent 2.
pub fn power_heuristic(pdf_strategy: f64, pdf_other: f64) -> f64 {
    let a = pdf_strategy * pdf_strategy;
    let b = pdf_other * pdf_other;
    if a + b > 0.0 {
        a / (a + b)
    } else {
        0.0
    }
}

/// Whether a sample can be divided by its density.
fn is_usable(dir: &Vec3, density: f64) -> bool {
    dir.norm_squared() >= MIN_DIR_NORM_SQUARED && density > 0.0 && density.is_finite()
}

/// Estimated radiance arriving along `ray`.
pub fn radiance(mode: RenderMode, ray: &Ray, scene: &Scene, depth: u32, rng: &mut RandGen) -> Vec3 {
    match mode {
        RenderMode::BsdfSampling => bsdf_sampling(ray, scene, depth, rng),
        RenderMode::MixtureSampling => mixture_sampling(ray, scene, depth, rng),
        RenderMode::Nee => next_event_estimation(ray, scene, depth, true, rng),
        RenderMode::Mis => multiple_importance(ray, scene, depth, 1.0, rng),
    }
}

type Estimator = fn(&Ray, &Scene, u32, &mut RandGen) -> Vec3;

/// `emitted + attenuation * scattering_pdf * L / pdf(dir)` for one direction drawn from `pdf`.
#[allow(clippy::too_many_arguments)]
fn scatter_once(
    ray: &Ray,
    rec: &HitRecord,
    emitted: Vec3,
    attenuation: &Vec3,
    pdf: &dyn Pdf,
    scene: &Scene,
    depth: u32,
    rng: &mut RandGen,
    next: Estimator,
) -> Vec3 {
    let dir = pdf.generate(rng);
    let pdf_value = pdf.value(&dir);
    if !is_usable(&dir, pdf_value) {
        return emitted;
    }
    let scattered = Ray::new(&rec.point, &dir, ray.time);
    let scattering_pdf = rec.material.scattering_pdf(ray, rec, &scattered);
    let sample = next(&scattered, scene, depth - 1, rng);
    emitted + attenuation.component_mul(&sample) * (scattering_pdf / pdf_value)
}

/// Path tracing sampling the material's own pdf.
pub fn bsdf_sampling(ray: &Ray, scene: &Scene, depth: u32, rng: &mut RandGen) -> Vec3 {
    if depth == 0 {
        return Vec3::zeros();
    }
    let rec = match scene.hitables.hit(ray, T_MIN, f64::INFINITY, rng) {
        Some(rec) => rec,
        None => return scene.bg.color(ray),
    };
    let emitted = rec.material.emitted(ray, &rec);
    let srec = match rec.material.scatter(ray, &rec, rng) {
        Some(srec) => srec,
        None => return emitted,
    };
    match srec.pdf {
        SingularPdf::Delta { ray: ref skip } => srec
            .attenuation
            .component_mul(&bsdf_sampling(skip, scene, depth - 1, rng)),
        SingularPdf::Finite { ref pdf } => scatter_once(
            ray,
            &rec,
            emitted,
            &srec.attenuation,
            pdf.as_ref(),
            scene,
            depth,
            rng,
            bsdf_sampling,
        ),
    }
}

/// Path tracing sampling an equal mixture of the lights and the material's pdf.
pub fn mixture_sampling(ray: &Ray, scene: &Scene, depth: u32, rng: &mut RandGen) -> Vec3 {
    if depth == 0 {
        return Vec3::zeros();
    }
    let rec = match scene.hitables.hit(ray, T_MIN, f64::INFINITY, rng) {
        Some(rec) => rec,
        None => return scene.bg.color(ray),
    };
    let emitted = rec.material.emitted(ray, &rec);
    let srec = match rec.material.scatter(ray, &rec, rng) {
        Some(srec) => srec,
        None => return emitted,
    };
    let material_pdf = match srec.pdf {
        SingularPdf::Delta { ray: ref skip } => {
            return srec
                .attenuation
                .component_mul(&mixture_sampling(skip, scene, depth - 1, rng))
        }
        SingularPdf::Finite { ref pdf } => pdf.as_ref(),
    };
    let light_pdf = HitablePdf::new(&scene.lights, &rec.point);
    let mixture = MixturePdf::new(&light_pdf, material_pdf);
    // without lights half of the samples would carry no density
    let pdf: &dyn Pdf = if scene.lights.is_empty() {
        material_pdf
    } else {
        &mixture
    };
    scatter_once(
        ray,
        &rec,
        emitted,
        &srec.attenuation,
        pdf,
        scene,
        depth,
        rng,
        mixture_sampling,
    )
}

/// Path tracing with next event estimation.
///
/// `include_le` is false right after a material sample: the light found
/// there was already accounted for by the light sample of the same bounce.
pub fn next_event_estimation(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    include_le: bool,
    rng: &mut RandGen,
) -> Vec3 {
    let rec = match scene.hitables.hit(ray, T_MIN, f64::INFINITY, rng) {
        Some(rec) => rec,
        None => return scene.bg.color(ray),
    };
    let le = if include_le {
        rec.material.emitted(ray, &rec)
    } else {
        Vec3::zeros()
    };
    // end of the path: too many vertices, or the light leg of a bounce
    if depth == 0 {
        return le;
    }
    let srec = match rec.material.scatter(ray, &rec, rng) {
        Some(srec) => srec,
        None => return le,
    };
    let material_pdf = match srec.pdf {
        SingularPdf::Delta { ray: ref skip } => {
            return srec
                .attenuation
                .component_mul(&next_event_estimation(skip, scene, depth - 1, true, rng))
        }
        SingularPdf::Finite { ref pdf } => pdf.as_ref(),
    };
    let mut light_out = le;

    // direct
    let light_pdf = HitablePdf::new(&scene.lights, &rec.point);
    let light_dir = light_pdf.generate(rng);
    let pdf_light = light_pdf.value(&light_dir);
    if is_usable(&light_dir, pdf_light) {
        let light_ray = Ray::new(&rec.point, &light_dir, ray.time);
        let brdf = srec.attenuation * rec.material.scattering_pdf(ray, &rec, &light_ray);
        let l_dir = next_event_estimation(&light_ray, scene, 0, true, rng);
        light_out += brdf.component_mul(&l_dir) / pdf_light;
    }

    // indirect
    let bsdf_dir = material_pdf.generate(rng);
    let pdf_bsdf = material_pdf.value(&bsdf_dir);
    if is_usable(&bsdf_dir, pdf_bsdf) {
        let bsdf_ray = Ray::new(&rec.point, &bsdf_dir, ray.time);
        let bsdf = srec.attenuation * rec.material.scattering_pdf(ray, &rec, &bsdf_ray);
        let l_ind = next_event_estimation(&bsdf_ray, scene, depth - 1, false, rng);
        light_out += bsdf.component_mul(&l_ind) / pdf_bsdf;
    }
    light_out
}

/// Path tracing with next event estimation, both legs combined by
/// multiple importance sampling.
///
/// `le_weight` is the weight of the emission found by this call, computed by
/// the bounce which generated `ray`.
pub fn multiple_importance(
    ray: &Ray,
    scene: &Scene,
    depth: u32,
    le_weight: f64,
    rng: &mut RandGen,
) -> Vec3 {
    let rec = match scene.hitables.hit(ray, T_MIN, f64::INFINITY, rng) {
        Some(rec) => rec,
        None => return scene.bg.color(ray),
    };
    let le = le_weight * rec.material.emitted(ray, &rec);
    if depth == 0 {
        return le;
    }
    let srec = match rec.material.scatter(ray, &rec, rng) {
        Some(srec) => srec,
        None => return le,
    };
    let material_pdf = match srec.pdf {
        SingularPdf::Delta { ray: ref skip } => {
            return srec
                .attenuation
                .component_mul(&multiple_importance(skip, scene, depth - 1, 1.0, rng))
        }
        SingularPdf::Finite { ref pdf } => pdf.as_ref(),
    };
    let mut light_out = le;

    // direct
    let light_pdf = HitablePdf::new(&scene.lights, &rec.point);
    let light_dir = light_pdf.generate(rng);
    let pdf_light = light_pdf.value(&light_dir);
    if is_usable(&light_dir, pdf_light) {
        let light_ray = Ray::new(&rec.point, &light_dir, ray.time);
        let brdf = srec.attenuation * rec.material.scattering_pdf(ray, &rec, &light_ray);
        let weight_light = power_heuristic(pdf_light, material_pdf.value(&light_dir));
        let l_dir = multiple_importance(&light_ray, scene, 0, weight_light, rng);
        light_out += brdf.component_mul(&l_dir) / pdf_light;
    }

    // indirect
    let bsdf_dir = material_pdf.generate(rng);
    let pdf_bsdf = material_pdf.value(&bsdf_dir);
    if is_usable(&bsdf_dir, pdf_bsdf) {
        let bsdf_ray = Ray::new(&rec.point, &bsdf_dir, ray.time);
        let bsdf = srec.attenuation * rec.material.scattering_pdf(ray, &rec, &bsdf_ray);
        let weight_bsdf = power_heuristic(pdf_bsdf, light_pdf.value(&bsdf_dir));
        let l_ind = multiple_importance(&bsdf_ray, scene, depth - 1, weight_bsdf, rng);
        light_out += bsdf.component_mul(&l_ind) / pdf_bsdf;
    }
    light_out
}
