use mistrace::aliases::Vec3;
use mistrace::background::AmbientLight;
use mistrace::film::Ppm;
use mistrace::hitable::hitable_list::HitableList;
use mistrace::hitable::rectangle::Rectangle;
use mistrace::hitable::Hitable;
use mistrace::material::diffuse_light::DiffuseLight;
use mistrace::material::lambertian::Lambertian;
use mistrace::texture::constant::ConstantTexture;
use mistrace::{render, Camera, CameraSettings, RenderMode, RenderSettings, Scene};
use std::f64::consts::PI;
use std::sync::Arc;

const LIGHT_SIDE: f64 = 0.1;
const LIGHT_HEIGHT: f64 = 2.0;
const EMISSION: f64 = 10.0;
const ALBEDO: f64 = 0.5;

/// A small square light facing down onto a gray square.
fn small_light_over_square() -> Scene {
    let gray = Arc::new(Lambertian::new(Arc::new(ConstantTexture::rgb(
        ALBEDO, ALBEDO, ALBEDO,
    ))));
    let light = Arc::new(DiffuseLight::new(Arc::new(ConstantTexture::rgb(
        EMISSION, EMISSION, EMISSION,
    ))));
    let half = 0.5 * LIGHT_SIDE;
    let lamp: Arc<dyn Hitable> = Arc::new(Rectangle::new(
        &Vec3::new(-half, LIGHT_HEIGHT, -half),
        &Vec3::new(LIGHT_SIDE, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, LIGHT_SIDE),
        light,
    ));
    let receiver: Arc<dyn Hitable> = Arc::new(Rectangle::new(
        &Vec3::new(-1.0, 0.0, -1.0),
        &Vec3::new(0.0, 0.0, 2.0),
        &Vec3::new(2.0, 0.0, 0.0),
        gray,
    ));
    Scene {
        hitables: HitableList::new(vec![receiver, lamp.clone()]),
        lights: HitableList::new(vec![lamp]),
        bg: Arc::new(AmbientLight::black()),
    }
}

fn single_pixel_camera() -> Camera {
    Camera::new(&CameraSettings {
        image_width: 1,
        vfov: 1.0,
        look_from: Vec3::new(0.0, 1.0, -3.0),
        look_at: Vec3::zeros(),
        ..CameraSettings::default()
    })
}

#[test]
fn direct_light_matches_small_source_approximation() {
    let scene = small_light_over_square();
    let camera = single_pixel_camera();
    // albedo / pi * L * A * cos * cos' / d^2 with both cosines 1
    let expected =
        ALBEDO / PI * EMISSION * LIGHT_SIDE * LIGHT_SIDE / (LIGHT_HEIGHT * LIGHT_HEIGHT);
    for mode in [RenderMode::Nee, RenderMode::Mis] {
        let settings = RenderSettings {
            samples_per_pixel: 64,
            max_depth: 1,
            mode,
            threads: 1,
            seed: 7,
            show_progress: false,
        };
        let film = render(&scene, &camera, &settings);
        assert_eq!((film.width(), film.height()), (1, 1));
        let col = film.pixel(0, 0);
        for c in 0..3 {
            assert!(
                (col[c] - expected).abs() < 0.02 * expected,
                "{}: {} vs {}",
                mode,
                col[c],
                expected
            );
        }
    }
}

#[test]
fn bsdf_sampling_needs_a_bounce_to_see_the_light() {
    let scene = small_light_over_square();
    let settings = RenderSettings {
        samples_per_pixel: 16,
        max_depth: 1,
        mode: RenderMode::BsdfSampling,
        threads: 1,
        seed: 8,
        show_progress: false,
    };
    let film = render(&scene, &single_pixel_camera(), &settings);
    assert_eq!(*film.pixel(0, 0), Vec3::zeros());
}

#[test]
fn output_does_not_depend_on_thread_count() {
    let scene = small_light_over_square();
    let camera = Camera::new(&CameraSettings {
        image_width: 12,
        aspect_ratio: 1.5,
        vfov: 50.0,
        look_from: Vec3::new(0.0, 1.0, -3.0),
        look_at: Vec3::zeros(),
        ..CameraSettings::default()
    });
    let settings = RenderSettings {
        samples_per_pixel: 9,
        max_depth: 4,
        mode: RenderMode::Mis,
        threads: 1,
        seed: 42,
        show_progress: false,
    };
    let single = render(&scene, &camera, &settings);
    let multi = render(
        &scene,
        &camera,
        &RenderSettings {
            threads: 3,
            ..settings.clone()
        },
    );
    assert_eq!((single.width(), single.height()), (12, 8));
    assert_eq!(single, multi);
    assert_eq!(single.mse(&multi), Some(0.0));

    let reseeded = render(
        &scene,
        &camera,
        &RenderSettings {
            seed: 43,
            ..settings
        },
    );
    assert_ne!(single, reseeded);
}

#[test]
fn rendered_film_writes_as_ppm() {
    let scene = small_light_over_square();
    let camera = Camera::new(&CameraSettings {
        image_width: 3,
        aspect_ratio: 3.0,
        look_from: Vec3::new(0.0, 1.0, -3.0),
        look_at: Vec3::zeros(),
        ..CameraSettings::default()
    });
    let settings = RenderSettings {
        samples_per_pixel: 1,
        max_depth: 2,
        threads: 2,
        ..RenderSettings::default()
    };
    let film = render(&scene, &camera, &settings);
    let mut out = Vec::new();
    film.write_ppm(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("P3"));
    assert_eq!(lines.next(), Some("3 1"));
    assert_eq!(lines.next(), Some("255"));
    assert_eq!(lines.count(), 3);
}

#[test]
fn modes_compare_through_written_ppm() {
    let scene = small_light_over_square();
    let camera = single_pixel_camera();
    let settings = RenderSettings {
        samples_per_pixel: 16,
        max_depth: 1,
        mode: RenderMode::Nee,
        threads: 1,
        seed: 9,
        show_progress: false,
    };
    let nee = render(&scene, &camera, &settings);
    let bsdf = render(
        &scene,
        &camera,
        &RenderSettings {
            mode: RenderMode::BsdfSampling,
            ..settings
        },
    );
    let mut out = Vec::new();
    nee.write_ppm(&mut out).unwrap();
    let reference = Ppm::read(&mut out.as_slice()).unwrap();
    assert_eq!(nee.to_ppm().mse(&reference), Some(0.0));
    // material sampling cannot reach the light in a single bounce
    let mse = bsdf.to_ppm().mse(&reference).unwrap();
    assert!(mse > 0.0);
    assert_eq!(bsdf.mse(&nee), Some(mse));
}
