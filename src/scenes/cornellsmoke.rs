use mistrace::affine::Affine;
use mistrace::aliases::Vec3;
use mistrace::background::AmbientLight;
use mistrace::camera::CameraSettings;
use mistrace::hitable::constant_medium::ConstantMedium;
use mistrace::hitable::cube::cube;
use mistrace::hitable::hitable_list::HitableList;
use mistrace::hitable::rectangle::Rectangle;
use mistrace::hitable::transform::Transform;
use mistrace::hitable::Hitable;
use mistrace::material::diffuse_light::DiffuseLight;
use mistrace::material::lambertian::Lambertian;
use mistrace::material::Material;
use mistrace::scene::Scene;
use mistrace::texture::checker::CheckerTexture;
use mistrace::texture::constant::ConstantTexture;
use std::f64::consts::PI;
use std::sync::Arc;

pub fn scene() -> (Scene, CameraSettings) {
    let white: Arc<dyn Material> =
        Arc::new(Lambertian::new(Arc::new(ConstantTexture::rgb(0.73, 0.73, 0.73))));
    let red = Arc::new(Lambertian::new(Arc::new(ConstantTexture::rgb(0.65, 0.05, 0.05))));
    let green = Arc::new(Lambertian::new(Arc::new(ConstantTexture::rgb(0.12, 0.45, 0.15))));
    // the phase keeps the floor plane y = 0 off the zero set of the pattern
    let checker_floor = Arc::new(Lambertian::new(Arc::new(CheckerTexture::new(
        Arc::new(ConstantTexture::rgb(0.73, 0.73, 0.73)),
        Arc::new(ConstantTexture::rgb(0.15, 0.15, 0.50)),
        55.5,
        &Vec3::new(0.0, 0.5 * PI, 0.0),
    ))));
    let light = Arc::new(DiffuseLight::new(Arc::new(ConstantTexture::rgb(7.0, 7.0, 7.0))));

    let mut objs = HitableList::empty();
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        &Vec3::new(0.0, 555.0, 0.0),
        green,
    )));
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 0.0, 555.0),
        &Vec3::new(0.0, 0.0, -555.0),
        &Vec3::new(0.0, 555.0, 0.0),
        red,
    )));
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 555.0, 0.0),
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        white.clone(),
    )));
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 0.0, 555.0),
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, -555.0),
        checker_floor,
    )));
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(555.0, 0.0, 555.0),
        &Vec3::new(-555.0, 0.0, 0.0),
        &Vec3::new(0.0, 555.0, 0.0),
        white.clone(),
    )));
    let ceiling_light: Arc<dyn Hitable> = Arc::new(Rectangle::new(
        &Vec3::new(113.0, 554.0, 127.0),
        &Vec3::new(330.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 305.0),
        light,
    ));
    objs.push(ceiling_light.clone());

    let tall = Transform::new(
        Arc::new(cube(&Vec3::zeros(), &Vec3::new(165.0, 330.0, 165.0), white.clone())),
        &Affine::translate(&Vec3::new(265.0, 0.0, 295.0)).after(&Affine::rotate_y(15.0)),
    );
    let short = Transform::new(
        Arc::new(cube(&Vec3::zeros(), &Vec3::new(165.0, 165.0, 165.0), white)),
        &Affine::translate(&Vec3::new(130.0, 0.0, 65.0)).after(&Affine::rotate_y(-18.0)),
    );
    objs.push(Arc::new(ConstantMedium::new(
        Arc::new(tall),
        0.01,
        Arc::new(ConstantTexture::rgb(0.0, 0.0, 0.0)),
    )));
    objs.push(Arc::new(ConstantMedium::new(
        Arc::new(short),
        0.01,
        Arc::new(ConstantTexture::rgb(1.0, 1.0, 1.0)),
    )));

    let scene = Scene {
        hitables: objs,
        lights: HitableList::new(vec![ceiling_light]),
        bg: Arc::new(AmbientLight::black()),
    };
    (scene, CameraSettings::default())
}
