use mistrace::aliases::{RandGen, Vec3};
use mistrace::background::AmbientLight;
use mistrace::hitable::hitable_list::HitableList;
use mistrace::hitable::rectangle::Rectangle;
use mistrace::hitable::sphere::Sphere;
use mistrace::hitable::Hitable;
use mistrace::material::diffuse_light::DiffuseLight;
use mistrace::material::lambertian::Lambertian;
use mistrace::ray::Ray;
use mistrace::texture::constant::ConstantTexture;
use mistrace::{radiance, RenderMode, Scene};
use rand::SeedableRng;
use std::sync::Arc;

const ALBEDO: f64 = 0.5;
const EMISSION: f64 = 4.0;
const RADIUS: f64 = 1.0;
const HEIGHT: f64 = 3.0;

/// A spherical light hanging over a large gray floor, nothing else.
///
/// The radiance leaving the floor point right below the light is
/// albedo * L * r^2 / h^2.
fn sphere_over_floor() -> Scene {
    let gray = Arc::new(Lambertian::new(Arc::new(ConstantTexture::rgb(
        ALBEDO, ALBEDO, ALBEDO,
    ))));
    let light = Arc::new(DiffuseLight::new(Arc::new(ConstantTexture::rgb(
        EMISSION, EMISSION, EMISSION,
    ))));
    let floor: Arc<dyn Hitable> = Arc::new(Rectangle::new(
        &Vec3::new(-50.0, -50.0, 0.0),
        &Vec3::new(100.0, 0.0, 0.0),
        &Vec3::new(0.0, 100.0, 0.0),
        gray,
    ));
    let lamp: Arc<dyn Hitable> = Arc::new(Sphere::new(&Vec3::new(0.0, 0.0, HEIGHT), RADIUS, light));
    Scene {
        hitables: HitableList::new(vec![floor, lamp.clone()]),
        lights: HitableList::new(vec![lamp]),
        bg: Arc::new(AmbientLight::black()),
    }
}

/// Mean and variance of the red channel over `n` independent estimates.
fn estimate(mode: RenderMode, n: usize, seed: u64) -> (f64, f64) {
    let scene = sphere_over_floor();
    let ray = Ray::new(&Vec3::new(0.0, -2.0, 2.0), &Vec3::new(0.0, 2.0, -2.0), 0.0);
    let mut rng = RandGen::seed_from_u64(seed);
    let (mut sum, mut sum_sq) = (0.0, 0.0);
    for _ in 0..n {
        let x = radiance(mode, &ray, &scene, 2, &mut rng)[0];
        sum += x;
        sum_sq += x * x;
    }
    let mean = sum / n as f64;
    (mean, sum_sq / n as f64 - mean * mean)
}

#[test]
fn all_estimators_converge_to_analytic_value() {
    let expected = ALBEDO * EMISSION * RADIUS * RADIUS / (HEIGHT * HEIGHT);
    for (k, mode) in RenderMode::ALL.iter().enumerate() {
        let (mean, _) = estimate(*mode, 200_000, 100 + k as u64);
        assert!(
            (mean - expected).abs() < 0.01,
            "{}: {} vs {}",
            mode,
            mean,
            expected
        );
    }
}

#[test]
fn light_sampling_reduces_variance() {
    let (_, var_bsdf) = estimate(RenderMode::BsdfSampling, 50_000, 110);
    let (_, var_mixture) = estimate(RenderMode::MixtureSampling, 50_000, 111);
    let (_, var_nee) = estimate(RenderMode::Nee, 50_000, 112);
    let (_, var_mis) = estimate(RenderMode::Mis, 50_000, 113);
    assert!(var_mis < var_bsdf, "{} {}", var_mis, var_bsdf);
    assert!(var_nee < var_bsdf, "{} {}", var_nee, var_bsdf);
    assert!(var_mixture < var_bsdf, "{} {}", var_mixture, var_bsdf);
}
