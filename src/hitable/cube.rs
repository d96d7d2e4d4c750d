use crate::aliases::Vec3;
use crate::hitable::hitable_list::HitableList;
use crate::hitable::rectangle::Rectangle;
use crate::material::Material;
use std::sync::Arc;

/// An axis-aligned box with opposite corners `a` and `b`, made of six outward-facing rectangles.
pub fn cube(a: &Vec3, b: &Vec3, material: Arc<dyn Material>) -> HitableList {
    let min = a.inf(b);
    let max = a.sup(b);
    let dx = Vec3::new(max.x - min.x, 0.0, 0.0);
    let dy = Vec3::new(0.0, max.y - min.y, 0.0);
    let dz = Vec3::new(0.0, 0.0, max.z - min.z);
    let mut sides = HitableList::empty();
    let mut add = |origin: Vec3, e0: Vec3, e1: Vec3| {
        sides.push(Arc::new(Rectangle::new(&origin, &e0, &e1, material.clone())));
    };
    add(Vec3::new(min.x, min.y, max.z), dx, dy); // front
    add(Vec3::new(max.x, min.y, max.z), -dz, dy); // right
    add(Vec3::new(max.x, min.y, min.z), -dx, dy); // back
    add(Vec3::new(min.x, min.y, min.z), dz, dy); // left
    add(Vec3::new(min.x, max.y, max.z), dx, -dz); // top
    add(Vec3::new(min.x, min.y, min.z), dx, dz); // bottom
    sides
}

#[cfg(test)]
mod tests {
    use super::cube;
    use crate::aliases::{RandGen, Vec3};
    use crate::hitable::Hitable;
    use crate::material::lambertian::Lambertian;
    use crate::ray::Ray;
    use crate::texture::constant::ConstantTexture;
    use rand::SeedableRng;
    use std::sync::Arc;

    #[test]
    fn cube_faces_point_outward() {
        let mat = Arc::new(Lambertian::new(Arc::new(ConstantTexture::rgb(0.5, 0.5, 0.5))));
        let c = cube(&Vec3::new(-1.0, -1.0, -1.0), &Vec3::new(1.0, 1.0, 1.0), mat);
        let dirs = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, -1.0),
        ];
        let mut rng = RandGen::seed_from_u64(0);
        let offset = Vec3::new(0.1, 0.2, 0.3);
        for d in dirs.iter() {
            let ray = Ray::new(&(3.0 * d + offset), &(-d), 0.0);
            let rec = c.hit(&ray, 0.001, f64::MAX, &mut rng).unwrap();
            assert!(rec.front_face);
            assert!((rec.t - (2.0 + offset.dot(d))).abs() < 1e-9);
        }
    }
}
