use mistrace::affine::Affine;
use mistrace::aliases::Vec3;
use mistrace::background::AmbientLight;
use mistrace::camera::CameraSettings;
use mistrace::hitable::cube::cube;
use mistrace::hitable::hitable_list::HitableList;
use mistrace::hitable::rectangle::Rectangle;
use mistrace::hitable::sphere::Sphere;
use mistrace::hitable::transform::Transform;
use mistrace::hitable::Hitable;
use mistrace::material::diffuse_light::DiffuseLight;
use mistrace::material::glass::Glass;
use mistrace::material::lambertian::Lambertian;
use mistrace::material::phong::Phong;
use mistrace::material::Material;
use mistrace::scene::Scene;
use mistrace::texture::constant::ConstantTexture;
use std::sync::Arc;

fn lambertian(r: f64, g: f64, b: f64) -> Arc<dyn Material> {
    Arc::new(Lambertian::new(Arc::new(ConstantTexture::rgb(r, g, b))))
}

/// The empty box, the ceiling light and the rotated Phong box.
/// Returns the objects and the ceiling light.
fn room() -> (HitableList, Arc<dyn Hitable>) {
    let red = lambertian(0.65, 0.05, 0.05);
    let white = lambertian(0.73, 0.73, 0.73);
    let green = lambertian(0.12, 0.45, 0.15);
    let light: Arc<dyn Material> = Arc::new(DiffuseLight::new(Arc::new(ConstantTexture::rgb(
        15.0, 15.0, 15.0,
    ))));

    let mut objs = HitableList::empty();
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        &Vec3::new(0.0, 555.0, 0.0),
        green,
    ))); // left
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 0.0, 555.0),
        &Vec3::new(0.0, 0.0, -555.0),
        &Vec3::new(0.0, 555.0, 0.0),
        red,
    ))); // right
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 555.0, 0.0),
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 555.0),
        white.clone(),
    ))); // top
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(0.0, 0.0, 555.0),
        &Vec3::new(555.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, -555.0),
        white.clone(),
    ))); // bottom
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(555.0, 0.0, 555.0),
        &Vec3::new(-555.0, 0.0, 0.0),
        &Vec3::new(0.0, 555.0, 0.0),
        white,
    ))); // far
    let ceiling_light: Arc<dyn Hitable> = Arc::new(Rectangle::new(
        &Vec3::new(213.0, 554.0, 227.0),
        &Vec3::new(130.0, 0.0, 0.0),
        &Vec3::new(0.0, 0.0, 105.0),
        light,
    ));
    objs.push(ceiling_light.clone());

    let white_phong: Arc<dyn Material> =
        Arc::new(Phong::new(Arc::new(ConstantTexture::rgb(0.73, 0.73, 0.73)), 30.0));
    let tall_box = cube(
        &Vec3::new(0.0, 0.0, 0.0),
        &Vec3::new(165.0, 330.0, 165.0),
        white_phong,
    );
    let tr = Affine::translate(&Vec3::new(265.0, 0.0, 295.0)).after(&Affine::rotate_y(15.0));
    objs.push(Arc::new(Transform::new(Arc::new(tall_box), &tr)));
    (objs, ceiling_light)
}

pub fn scene() -> (Scene, CameraSettings) {
    let (mut objs, ceiling_light) = room();
    let blue_phong = Arc::new(Phong::new(
        Arc::new(ConstantTexture::rgb(30.0 / 255.0, 144.0 / 255.0, 1.0)),
        30.0,
    ));
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(190.0, 90.0, 190.0),
        90.0,
        blue_phong,
    )));
    let scene = Scene {
        hitables: objs,
        lights: HitableList::new(vec![ceiling_light]),
        bg: Arc::new(AmbientLight::black()),
    };
    (scene, CameraSettings::default())
}

pub fn glass_scene() -> (Scene, CameraSettings) {
    let (mut objs, ceiling_light) = room();
    let glass_sphere: Arc<dyn Hitable> = Arc::new(Sphere::new(
        &Vec3::new(190.0, 90.0, 190.0),
        90.0,
        Arc::new(Glass::new(1.5)),
    ));
    objs.push(glass_sphere.clone());
    let scene = Scene {
        hitables: objs,
        lights: HitableList::new(vec![ceiling_light, glass_sphere]),
        bg: Arc::new(AmbientLight::black()),
    };
    (scene, CameraSettings::default())
}
